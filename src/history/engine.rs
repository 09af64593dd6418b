// 撤銷/重做歷史管理

use std::collections::VecDeque;

use super::command::Command;
use crate::buffer::TextBuffer;

/// 命令歷史引擎
///
/// 引擎獨佔緩衝區，外部只能拿到 `&TextBuffer`，所以撤銷一定依照
/// 執行的反向順序進行，`truncate` 的長度永遠等於要撤銷的命令內容。
#[derive(Debug)]
pub struct CommandHistory {
    buffer: TextBuffer,
    undo_stack: VecDeque<Command>,
    redo_stack: Vec<Command>,
    max_size: usize,
}

impl CommandHistory {
    pub const DEFAULT_LIMIT: usize = 1000;

    pub fn new(buffer: TextBuffer) -> Self {
        Self::with_limit(buffer, Self::DEFAULT_LIMIT)
    }

    /// 最少保留一筆歷史
    pub fn with_limit(buffer: TextBuffer, max_size: usize) -> Self {
        Self {
            buffer,
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    pub fn execute(&mut self, command: impl Into<Command>) {
        let mut command = command.into();
        command.execute(&mut self.buffer);
        log::debug!(
            "executed {:?} ({} chars)",
            command.payload(),
            command.payload().chars().count()
        );

        if self.undo_stack.len() >= self.max_size {
            // 被擠出的命令仍留在緩衝區中，只是無法再撤銷
            if let Some(evicted) = self.undo_stack.pop_front() {
                log::debug!("history full, evicted {:?}", evicted.payload());
            }
        }
        self.undo_stack.push_back(command);
        self.redo_stack.clear();
    }

    /// 撤銷最近一次命令，歷史為空時回傳 `None`
    pub fn undo_last(&mut self) -> Option<&str> {
        let Some(mut command) = self.undo_stack.pop_back() else {
            log::trace!("nothing to undo");
            return None;
        };
        command.undo(&mut self.buffer);
        log::debug!("undid {:?}", command.payload());
        self.redo_stack.push(command);
        self.redo_stack.last().map(|command| command.payload())
    }

    /// 重新執行最近一次撤銷的命令
    pub fn redo_last(&mut self) -> Option<&str> {
        let Some(mut command) = self.redo_stack.pop() else {
            log::trace!("nothing to redo");
            return None;
        };
        command.execute(&mut self.buffer);
        log::debug!("redid {:?}", command.payload());
        self.undo_stack.push_back(command);
        self.undo_stack.back().map(|command| command.payload())
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> TextBuffer {
        self.buffer
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn limit(&self) -> usize {
        self.max_size
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(TextBuffer::new())
    }
}
