use anyhow::{Context, Result};
use ropey::Rope;
use std::fs;
use std::path::Path;

/// 命令作用的文本緩衝區
///
/// 只能透過 `append` / `truncate` 修改，兩者僅對 crate 內部開放，
/// 外部只能讀取內容。
#[derive(Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// 在末尾追加文字
    pub(crate) fn append(&mut self, text: &str) {
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
    }

    /// 移除最後 `count` 個字符（以 char 計算）
    pub(crate) fn truncate(&mut self, count: usize) {
        let len = self.rope.len_chars();
        debug_assert!(
            count <= len,
            "truncate({count}) on a buffer of {len} chars"
        );
        let count = count.min(len);
        self.rope.remove(len - count..len);
    }

    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// 以指定編碼寫出內容
    pub fn save_to(&self, path: &Path, encoding: &'static encoding_rs::Encoding) -> Result<()> {
        let contents = self.rope.to_string();
        let (encoded, _, had_errors) = encoding.encode(&contents);
        if had_errors {
            log::warn!(
                "Encoding errors occurred while saving file: {}",
                path.display()
            );
        }
        fs::write(path, encoded)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }
}
