// 配置管理

use crate::history::CommandHistory;

#[derive(Debug, Clone)]
pub struct Config {
    pub history_limit: usize,
    pub color: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            history_limit: CommandHistory::DEFAULT_LIMIT,
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
