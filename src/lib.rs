//! textundo - 可撤銷的文字命令歷史引擎

pub mod buffer;
pub mod config;
pub mod history;
pub mod input;
pub mod session;
pub mod utils;

// 重新導出常用類型
pub use buffer::TextBuffer;
pub use config::Config;
pub use history::{Command, CommandHistory, CommandState};
pub use input::Op;
pub use session::Session;
