//! Line-oriented console over the user manager.

mod command;
mod render;
mod session;

pub use command::{CommandParseError, ConsoleCommand, Target, help_text, parse_line};
pub use render::RosterView;
pub use session::{ConsoleError, run_console};
