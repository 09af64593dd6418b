use anyhow::Result;
use crossterm::style::Stylize;
use std::io::Write;

use crate::buffer::TextBuffer;
use crate::config::Config;
use crate::history::CommandHistory;
use crate::input::Op;
use crate::utils::visual_width;

/// 一次編輯會話：把腳本操作交給歷史引擎，每步之後輸出緩衝區
pub struct Session {
    history: CommandHistory,
    color: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            history: CommandHistory::with_limit(TextBuffer::new(), config.history_limit),
            color: config.color,
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn into_buffer(self) -> TextBuffer {
        self.history.into_buffer()
    }

    pub fn run<W: Write>(&mut self, ops: impl IntoIterator<Item = Op>, out: &mut W) -> Result<()> {
        for op in ops {
            self.apply(op, out)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn apply<W: Write>(&mut self, op: Op, out: &mut W) -> Result<()> {
        match op {
            Op::Exec(payload) => {
                self.history.execute(payload);
                self.write_content(out)?;
            }
            Op::Undo => {
                if self.history.undo_last().is_some() {
                    self.write_content(out)?;
                } else {
                    self.write_note(out, "nothing to undo")?;
                }
            }
            Op::Redo => {
                if self.history.redo_last().is_some() {
                    self.write_content(out)?;
                } else {
                    self.write_note(out, "nothing to redo")?;
                }
            }
            Op::Print => {
                self.write_content(out)?;
                self.write_status(out)?;
            }
        }
        Ok(())
    }

    fn write_content<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.history.buffer().content())?;
        Ok(())
    }

    fn write_note<W: Write>(&self, out: &mut W, note: &str) -> Result<()> {
        if self.color {
            writeln!(out, "{}", note.dark_grey())?;
        } else {
            writeln!(out, "{note}")?;
        }
        Ok(())
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<()> {
        let buffer = self.history.buffer();
        let status = format!(
            "[{} chars, {} cols, {} undo, {} redo]",
            buffer.len_chars(),
            visual_width(&buffer.content()),
            self.history.undo_len(),
            self.history.redo_len()
        );
        if self.color {
            writeln!(out, "{}", status.cyan())?;
        } else {
            writeln!(out, "{status}")?;
        }
        Ok(())
    }
}

/// 內建的示範腳本
pub fn demo_script() -> Vec<Op> {
    vec![
        Op::Exec("Hello, ".to_string()),
        Op::Exec("world!".to_string()),
        Op::Undo,
        Op::Undo,
    ]
}
