//! Simulated terminal
//!
//! - [`interpreter`]: pure evaluation of a submitted line into transcript
//!   changes and [`Effect`]s
//! - [`session`]: transcript, input line, history recall and queued output
//! - [`scheduler`]: cancellable delayed tasks ticked by the UI loop
//!
//! The terminal never reaches into the shell; it hands back effects and the
//! shell decides what opening a file means.

pub mod interpreter;
pub mod scheduler;
pub mod session;

pub use interpreter::{evaluate, Effect, EvalContext, Outcome, Transcript, BANNER, PROMPT};
pub use session::TerminalSession;
