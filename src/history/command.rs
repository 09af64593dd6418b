// 可撤銷的追加命令

use crate::buffer::TextBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    Unapplied,
    Applied,
}

/// 向緩衝區末尾追加一段文字的命令
///
/// 不實作 `Clone`：已套用的命令只存在於歷史引擎內部。
#[derive(Debug)]
pub struct Command {
    payload: String,
    state: CommandState,
}

impl Command {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            state: CommandState::Unapplied,
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn state(&self) -> CommandState {
        self.state
    }

    pub fn is_applied(&self) -> bool {
        self.state == CommandState::Applied
    }

    /// Unapplied -> Applied，已套用時不做任何事
    pub(crate) fn execute(&mut self, buffer: &mut TextBuffer) -> bool {
        match self.state {
            CommandState::Unapplied => {
                buffer.append(&self.payload);
                self.state = CommandState::Applied;
                true
            }
            CommandState::Applied => false,
        }
    }

    /// Applied -> Unapplied，未套用時不做任何事
    pub(crate) fn undo(&mut self, buffer: &mut TextBuffer) -> bool {
        match self.state {
            CommandState::Applied => {
                buffer.truncate(self.payload.chars().count());
                self.state = CommandState::Unapplied;
                true
            }
            CommandState::Unapplied => false,
        }
    }
}

impl From<&str> for Command {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

impl From<String> for Command {
    fn from(payload: String) -> Self {
        Self::new(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_command_is_unapplied() {
        let command = Command::new("abc");
        assert_eq!(command.state(), CommandState::Unapplied);
        assert_eq!(command.payload(), "abc");
    }

    #[test]
    fn test_execute_then_undo() {
        let mut buffer = TextBuffer::new();
        let mut command = Command::from("Hello");

        assert!(command.execute(&mut buffer));
        assert!(command.is_applied());
        assert_eq!(buffer.content(), "Hello");

        assert!(command.undo(&mut buffer));
        assert!(!command.is_applied());
        assert_eq!(buffer.content(), "");
    }

    #[test]
    fn test_execute_twice_appends_once() {
        let mut buffer = TextBuffer::new();
        let mut command = Command::new("ab");

        assert!(command.execute(&mut buffer));
        assert!(!command.execute(&mut buffer));
        assert_eq!(buffer.content(), "ab");
    }

    #[test]
    fn test_undo_unapplied_is_noop() {
        let mut buffer = TextBuffer::new();
        buffer.append("keep");
        let mut command = Command::new("ep");

        assert!(!command.undo(&mut buffer));
        assert_eq!(buffer.content(), "keep");
    }

    #[test]
    fn test_undo_only_first_call_has_effect() {
        let mut buffer = TextBuffer::new();
        buffer.append("x");
        let mut command = Command::new("yz");
        command.execute(&mut buffer);

        assert!(command.undo(&mut buffer));
        assert!(!command.undo(&mut buffer));
        assert_eq!(buffer.content(), "x");
    }

    #[test]
    fn test_command_can_cycle() {
        let mut buffer = TextBuffer::new();
        let mut command = Command::new("世界");

        for _ in 0..3 {
            command.execute(&mut buffer);
            assert_eq!(buffer.content(), "世界");
            command.undo(&mut buffer);
            assert_eq!(buffer.content(), "");
        }
    }
}
