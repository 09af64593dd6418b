/// 編輯腳本中的一行操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // 追加文字
    Exec(String),

    // 撤銷/重做
    Undo,
    Redo,

    // 輸出內容與狀態
    Print,
}
