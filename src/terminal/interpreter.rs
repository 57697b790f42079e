//! Fixed-vocabulary command evaluator
//!
//! [`evaluate`] maps one submitted line to an [`Outcome`]: what happens to
//! the transcript, plus any [`Effect`]s the caller must carry out. The
//! evaluator never touches shell state itself, so every command can be
//! checked by calling it directly.
//!
//! Resolution order for a line (trimmed, compared case-insensitively):
//!
//! 1. `echo <text>` and `cat <file>` prefixes
//! 2. the `sudo hire` / `sudo hire ab` Easter egg
//! 3. the built-in table
//! 4. anything else non-empty is "command not found"

use chrono::{DateTime, FixedOffset};
use std::time::Duration;

/// Prompt echoed before every submitted line
pub const PROMPT: &str = "bhaveshnankani@vscode-portfolio:~$";

/// Transcript after startup and after `clear`
pub const BANNER: [&str; 3] = [
    "Welcome to ab's Portfolio Terminal! 💻",
    "Type \"help\" to see available commands",
    "",
];

/// How long `sudo` waits before refusing
pub const SUDO_DELAY: Duration = Duration::from_millis(500);

/// Files `cat <file>` is allowed to open
pub const CAT_FILES: [&str; 3] = ["about.html", "projects.json", "contact.css"];

/// Inputs the evaluator reads from outside the line itself
#[derive(Debug, Clone, Copy)]
pub struct EvalContext {
    pub now: DateTime<FixedOffset>,
}

impl EvalContext {
    pub fn now() -> Self {
        EvalContext {
            now: chrono::Local::now().fixed_offset(),
        }
    }
}

/// Side effects requested by a command, executed by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenFile {
        id: &'static str,
        name: &'static str,
    },
    /// Append `lines` to the transcript once `after` has elapsed
    Delayed { after: Duration, lines: Vec<String> },
}

/// What a submission does to the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Append(Vec<String>),
    /// Replace everything with [`BANNER`]
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub transcript: Transcript,
    pub effects: Vec<Effect>,
}

impl Outcome {
    /// Lines appended by this outcome, empty for a reset
    pub fn lines(&self) -> &[String] {
        match &self.transcript {
            Transcript::Append(lines) => lines,
            Transcript::Reset => &[],
        }
    }
}

/// How a handler's reply is folded into the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Append the lines plus one blank separator
    Normal,
    /// Append the lines with no separator; a delayed effect finishes the output
    Deferred,
    Reset,
}

#[derive(Debug)]
struct Reply {
    lines: Vec<String>,
    effects: Vec<Effect>,
    flow: Flow,
}

impl Reply {
    fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Reply {
            lines: lines.into_iter().map(Into::into).collect(),
            effects: Vec::new(),
            flow: Flow::Normal,
        }
    }

    fn open(id: &'static str) -> Self {
        Reply {
            lines: vec![format!("✓ Opening {id}...")],
            effects: vec![Effect::OpenFile { id, name: id }],
            flow: Flow::Normal,
        }
    }
}

type Handler = fn(&EvalContext) -> Reply;

/// Built-in commands, matched by exact lower-case name
static BUILTINS: [(&str, Handler); 13] = [
    ("help", help),
    ("clear", clear),
    ("about", about),
    ("projects", projects),
    ("contact", contact),
    ("skills", skills),
    ("whoami", whoami),
    ("ls", ls),
    ("pwd", pwd),
    ("date", date),
    ("cat", cat),
    ("exit", exit),
    ("sudo", sudo),
];

/// Whether `name` is a built-in command
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.iter().any(|(n, _)| *n == name)
}

/// Built-in command names in table order
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

fn help(_: &EvalContext) -> Reply {
    Reply::lines([
        "",
        "📖 Available Commands:",
        "  help       - Show this help message",
        "  clear      - Clear terminal",
        "  about      - Open about.html",
        "  projects   - Open projects.json",
        "  contact    - Open contact.css",
        "  skills     - Show technical skills",
        "  whoami     - About ab",
        "  ls         - List files",
        "  pwd        - Print working directory",
        "  date       - Show current date",
        "  echo <msg> - Print message",
        "  cat        - Read files",
        "  exit       - Try to leave",
        "",
    ])
}

fn clear(_: &EvalContext) -> Reply {
    Reply {
        lines: Vec::new(),
        effects: Vec::new(),
        flow: Flow::Reset,
    }
}

fn about(_: &EvalContext) -> Reply {
    Reply::open("about.html")
}

fn projects(_: &EvalContext) -> Reply {
    Reply::open("projects.json")
}

fn contact(_: &EvalContext) -> Reply {
    Reply::open("contact.css")
}

fn skills(_: &EvalContext) -> Reply {
    Reply::lines([
        "",
        "💡 Technical Skills:",
        "  Frontend: React, Next.js 15, TypeScript, Tailwind CSS",
        "  Backend: Node.js, Express, Python, Flask",
        "  Database: PostgreSQL, MongoDB Atlas",
        "  DevOps: AWS, Vercel, Render, Git, CI/CD",
        "",
    ])
}

fn whoami(_: &EvalContext) -> Reply {
    Reply::lines([
        "",
        "root user: ab Nankani (Full Stack Engineer & Coffee Consumer ☕️)",
        "",
    ])
}

fn ls(_: &EvalContext) -> Reply {
    Reply::lines([
        "",
        "home.jsx",
        "about.html",
        "projects.json",
        "contact.css",
        "",
    ])
}

fn pwd(_: &EvalContext) -> Reply {
    Reply::lines(["/home/bhaveshnankani/vscode-portfolio"])
}

fn cat(_: &EvalContext) -> Reply {
    Reply::lines(["Meow? 🐈 (Did you mean 'cat contact.css'?)"])
}

fn exit(_: &EvalContext) -> Reply {
    Reply::lines(["There is no escape. You must hire me. 🔒"])
}

fn date(ctx: &EvalContext) -> Reply {
    Reply::lines([ctx.now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()])
}

fn sudo(_: &EvalContext) -> Reply {
    Reply {
        lines: vec!["[sudo] password for bhaveshnankani: ".to_string()],
        effects: vec![Effect::Delayed {
            after: SUDO_DELAY,
            lines: vec!["Sorry, permission denied.".to_string(), String::new()],
        }],
        flow: Flow::Deferred,
    }
}

/// `s` with `prefix` removed, comparing the prefix ASCII-case-insensitively
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let n = prefix.len();
    if s.len() >= n && s.is_char_boundary(n) && s[..n].eq_ignore_ascii_case(prefix) {
        Some(&s[n..])
    } else {
        None
    }
}

fn cat_file(filename: &str) -> Reply {
    match CAT_FILES.into_iter().find(|f| *f == filename) {
        Some(id) => Reply::open(id),
        None => Reply::lines([format!("cat: {filename}: No such file or directory")]),
    }
}

fn dispatch(command: &str, ctx: &EvalContext) -> Reply {
    let lower = command.to_lowercase();

    if let Some(text) = strip_prefix_ignore_case(command, "echo ") {
        return Reply::lines([text]);
    }
    if let Some(rest) = strip_prefix_ignore_case(command, "cat ") {
        return cat_file(rest.trim());
    }
    if lower == "sudo hire ab" || lower == "sudo hire" {
        return Reply::lines([
            "Permission denied: You need to schedule an interview first.",
            "Run 'contact' to proceed. 💼",
        ]);
    }
    if let Some((_, handler)) = BUILTINS.iter().find(|(name, _)| *name == lower) {
        return handler(ctx);
    }
    if command.is_empty() {
        return Reply::lines(Vec::<String>::new());
    }
    Reply::lines([
        format!("bash: {command}: command not found"),
        "Type \"help\" for available commands".to_string(),
    ])
}

/// Evaluate one submitted line.
///
/// `raw` is echoed exactly as typed; matching uses the trimmed line.
pub fn evaluate(raw: &str, ctx: &EvalContext) -> Outcome {
    let command = raw.trim();
    let reply = dispatch(command, ctx);
    tracing::debug!(command, flow = ?reply.flow, effects = reply.effects.len(), "evaluated");

    let transcript = match reply.flow {
        Flow::Reset => Transcript::Reset,
        flow => {
            let mut lines = Vec::with_capacity(reply.lines.len() + 2);
            lines.push(format!("{PROMPT} {raw}"));
            lines.extend(reply.lines);
            if flow == Flow::Normal {
                lines.push(String::new());
            }
            Transcript::Append(lines)
        }
    };

    Outcome {
        transcript,
        effects: reply.effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EvalContext {
        EvalContext {
            now: DateTime::parse_from_rfc3339("2026-10-17T09:30:05+02:00").unwrap(),
        }
    }

    fn run(line: &str) -> Outcome {
        evaluate(line, &ctx())
    }

    #[test]
    fn test_echo_keeps_case_and_spacing() {
        let out = run("ECHO Hello   World");
        assert_eq!(
            out.lines(),
            [
                format!("{PROMPT} ECHO Hello   World"),
                "Hello   World".to_string(),
                String::new()
            ]
        );
        assert!(out.effects.is_empty());
    }

    #[test]
    fn test_bare_echo_is_unknown() {
        // trimmed to "echo", which has no handler
        let out = run("echo ");
        assert_eq!(out.lines()[1], "bash: echo: command not found");
    }

    #[test]
    fn test_date_uses_context_clock() {
        let out = run("date");
        assert_eq!(out.lines()[1], "Sat Oct 17 2026 09:30:05 GMT+0200");
    }

    #[test]
    fn test_cat_trims_filename() {
        let out = run("cat    projects.json  ");
        assert_eq!(out.lines()[1], "✓ Opening projects.json...");
        assert_eq!(
            out.effects,
            vec![Effect::OpenFile {
                id: "projects.json",
                name: "projects.json"
            }]
        );
    }

    #[test]
    fn test_cat_filename_is_case_sensitive() {
        let out = run("cat ABOUT.html");
        assert_eq!(out.lines()[1], "cat: ABOUT.html: No such file or directory");
        assert!(out.effects.is_empty());
    }

    #[test]
    fn test_sudo_hire_easter_egg() {
        for line in ["sudo hire", "SUDO HIRE AB"] {
            let out = run(line);
            assert_eq!(
                out.lines()[1],
                "Permission denied: You need to schedule an interview first."
            );
            assert!(out.effects.is_empty());
        }
    }

    #[test]
    fn test_builtin_table_is_complete() {
        for name in [
            "help", "clear", "about", "projects", "contact", "skills", "whoami", "ls", "pwd",
            "date", "cat", "exit", "sudo",
        ] {
            assert!(is_builtin(name), "{name} missing");
        }
        assert!(!is_builtin("echo"));
    }

    #[test]
    fn test_clear_is_case_insensitive() {
        assert_eq!(run("  CLEAR ").transcript, Transcript::Reset);
    }
}
