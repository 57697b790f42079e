//! One terminal panel's transcript, input line and command history

use super::interpreter::{evaluate, Effect, EvalContext, Transcript, BANNER};
use super::scheduler::Scheduler;
use std::time::{Duration, Instant};

/// Interactive state of the simulated terminal.
///
/// Delayed output (the `sudo` follow-up) is held in an owned scheduler, so
/// dropping the session or calling [`TerminalSession::cancel_pending`]
/// guarantees no queued line is ever appended afterwards.
#[derive(Debug)]
pub struct TerminalSession {
    output: Vec<String>,
    input: String,
    /// Caret position in `input`, counted in chars
    cursor: usize,
    history: Vec<String>,
    /// `None` when not recalling history
    history_cursor: Option<usize>,
    pending: Scheduler<Vec<String>>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        TerminalSession {
            output: banner(),
            input: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_cursor: None,
            pending: Scheduler::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Input split at the caret
    pub fn input_parts(&self) -> (&str, &str) {
        self.input.split_at(self.byte_offset(self.cursor))
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.input
            .char_indices()
            .nth(chars)
            .map_or(self.input.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the caret
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.input.remove(at);
    }

    /// Delete the char under the caret
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Replace the input line, caret at the end
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.move_end();
    }

    /// Reset the transcript and input line, keeping history
    pub fn clear(&mut self) {
        self.output = banner();
        self.set_input(String::new());
    }

    /// Submit the current input line.
    ///
    /// Transcript changes are applied here; the returned effects are the
    /// caller's to execute. Delayed effects can be handed back through
    /// [`TerminalSession::schedule`].
    pub fn submit(&mut self, ctx: &EvalContext) -> Vec<Effect> {
        let raw = std::mem::take(&mut self.input);
        self.cursor = 0;
        if !raw.trim().is_empty() {
            self.history.push(raw.clone());
        }
        self.history_cursor = None;

        let outcome = evaluate(&raw, ctx);
        match outcome.transcript {
            Transcript::Append(lines) => self.output.extend(lines),
            Transcript::Reset => self.output = banner(),
        }
        outcome.effects
    }

    /// Queue `lines` to be appended once `after` has passed
    pub fn schedule(&mut self, now: Instant, after: Duration, lines: Vec<String>) {
        self.pending.schedule(now, after, lines);
    }

    /// When the next queued line comes due
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.next_due()
    }

    /// Append every queued line that is due; returns how many lines landed
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut appended = 0;
        for lines in self.pending.take_due(now) {
            appended += lines.len();
            self.output.extend(lines);
        }
        appended
    }

    pub fn has_pending(&self) -> bool {
        self.pending.pending() > 0
    }

    /// Drop queued output without appending it
    pub fn cancel_pending(&mut self) -> usize {
        let dropped = self.pending.cancel_all();
        if dropped > 0 {
            tracing::debug!(dropped, "cancelled pending terminal output");
        }
        dropped
    }

    /// Recall the previous history entry into the input line
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_cursor = Some(index);
        self.set_input(self.history[index].clone());
    }

    /// Step forward through history; stepping past the newest entry leaves
    /// recall mode with an empty input line.
    pub fn history_next(&mut self) {
        let Some(current) = self.history_cursor else {
            return;
        };
        let last = self.history.len().saturating_sub(1);
        let index = (current + 1).min(last);
        if index == last && current == index {
            self.history_cursor = None;
            self.set_input(String::new());
        } else {
            self.history_cursor = Some(index);
            self.set_input(self.history[index].clone());
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn banner() -> Vec<String> {
    BANNER.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(session: &mut TerminalSession, line: &str) -> Vec<Effect> {
        session.set_input(line);
        session.submit(&EvalContext::now())
    }

    #[test]
    fn test_starts_with_banner() {
        let session = TerminalSession::new();
        assert_eq!(session.output(), BANNER);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_blank_lines_skip_history() {
        let mut session = TerminalSession::new();
        submit(&mut session, "   ");
        submit(&mut session, "ls");
        assert_eq!(session.history(), ["ls"]);
        // echo + separator for the blank line
        assert_eq!(session.output().len(), 3 + 2 + 8);
    }

    #[test]
    fn test_history_round_trip() {
        let mut session = TerminalSession::new();
        submit(&mut session, "help");
        submit(&mut session, "ls");
        submit(&mut session, "pwd");

        session.history_prev();
        assert_eq!(session.input(), "pwd");
        session.history_prev();
        session.history_prev();
        session.history_prev();
        assert_eq!(session.input(), "help");
        assert_eq!(session.history_cursor(), Some(0));

        session.history_next();
        assert_eq!(session.input(), "ls");
        session.history_next();
        assert_eq!(session.input(), "pwd");
        session.history_next();
        assert_eq!(session.input(), "");
        assert_eq!(session.history_cursor(), None);

        // further Down presses stay out of recall mode
        session.history_next();
        assert_eq!(session.history_cursor(), None);
    }

    #[test]
    fn test_history_prev_on_empty_history_is_noop() {
        let mut session = TerminalSession::new();
        session.set_input("draft");
        session.history_prev();
        assert_eq!(session.input(), "draft");
        assert_eq!(session.history_cursor(), None);
    }

    #[test]
    fn test_cancel_pending_drops_output() {
        let mut session = TerminalSession::new();
        let now = Instant::now();
        session.schedule(now, Duration::from_millis(500), vec!["late".to_string()]);
        assert!(session.has_pending());
        assert_eq!(session.cancel_pending(), 1);
        assert_eq!(session.tick(now + Duration::from_secs(1)), 0);
        assert!(!session.output().iter().any(|l| l == "late"));
    }

    #[test]
    fn test_caret_editing() {
        let mut session = TerminalSession::new();
        for c in "cat".chars() {
            session.insert_char(c);
        }
        session.move_home();
        session.insert_char('x');
        assert_eq!(session.input(), "xcat");
        assert_eq!(session.input_parts(), ("x", "cat"));

        session.delete();
        assert_eq!(session.input(), "xat");
        session.move_left();
        session.backspace();
        assert_eq!(session.input(), "xat");
        assert_eq!(session.cursor(), 0);

        session.move_right();
        session.backspace();
        session.move_end();
        session.delete();
        session.insert_char('!');
        assert_eq!(session.input(), "at!");
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn test_caret_counts_chars_not_bytes() {
        let mut session = TerminalSession::new();
        session.set_input("héllo");
        assert_eq!(session.cursor(), 5);
        session.move_left();
        session.move_left();
        session.move_left();
        session.backspace();
        assert_eq!(session.input(), "hllo");
        assert_eq!(session.input_parts(), ("h", "llo"));
    }

    #[test]
    fn test_recall_puts_caret_at_end() {
        let mut session = TerminalSession::new();
        submit(&mut session, "whoami");
        assert_eq!(session.cursor(), 0);
        session.history_prev();
        assert_eq!(session.cursor(), 6);
        session.insert_char('?');
        assert_eq!(session.input(), "whoami?");
    }

    #[test]
    fn test_next_due_tracks_queue() {
        let mut session = TerminalSession::new();
        let now = Instant::now();
        assert_eq!(session.next_due(), None);
        session.schedule(now, Duration::from_millis(500), vec!["late".to_string()]);
        assert_eq!(session.next_due(), Some(now + Duration::from_millis(500)));
        session.tick(now + Duration::from_millis(500));
        assert_eq!(session.next_due(), None);
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut session = TerminalSession::new();
        submit(&mut session, "whoami");
        session.set_input("half typed");
        session.clear();
        assert_eq!(session.output(), BANNER);
        assert_eq!(session.input(), "");
        assert_eq!(session.history(), ["whoami"]);
    }
}
