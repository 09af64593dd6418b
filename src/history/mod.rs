mod command;
mod engine;

pub use command::{Command, CommandState};
pub use engine::CommandHistory;
