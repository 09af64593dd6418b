use anyhow::{bail, Context, Result};

use super::op::Op;

/// 解析整份腳本，錯誤訊息帶 1-based 行號
pub fn parse_script(source: &str) -> Result<Vec<Op>> {
    let mut ops = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(op) = parse_line(line).with_context(|| format!("line {}", idx + 1))? {
            ops.push(op);
        }
    }
    Ok(ops)
}

/// 解析單行，空行與 `#` 註解回傳 `None`
pub fn parse_line(line: &str) -> Result<Option<Op>> {
    // 只去掉行尾的 \r，保留 payload 的尾部空格
    let line = line.strip_suffix('\r').unwrap_or(line);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // 關鍵字後的第一個空白字元（空格或 tab）是分隔符
    let (keyword, rest) = match trimmed.char_indices().find(|(_, ch)| ch.is_whitespace()) {
        Some((idx, sep)) => (&trimmed[..idx], Some(&trimmed[idx + sep.len_utf8()..])),
        None => (trimmed, None),
    };

    let op = match keyword {
        "exec" => Op::Exec(parse_payload(rest.unwrap_or(""))?),
        "undo" | "redo" | "print" => {
            if let Some(extra) = rest.filter(|r| !r.trim().is_empty()) {
                bail!("`{keyword}` takes no argument, got {extra:?}");
            }
            match keyword {
                "undo" => Op::Undo,
                "redo" => Op::Redo,
                _ => Op::Print,
            }
        }
        other => bail!("unknown operation `{other}`"),
    };
    Ok(Some(op))
}

fn parse_payload(raw: &str) -> Result<String> {
    let Some(quoted) = raw.strip_prefix('"') else {
        return Ok(raw.to_string());
    };

    let mut text = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    loop {
        match chars.next() {
            Some('"') => {
                // 結尾引號之後只允許空白
                let rest = chars.as_str();
                if !rest.trim_end().is_empty() {
                    bail!("unexpected text after closing quote: {rest:?}");
                }
                return Ok(text);
            }
            Some('\\') => match chars.next() {
                Some('n') => text.push('\n'),
                Some('t') => text.push('\t'),
                Some('"') => text.push('"'),
                Some('\\') => text.push('\\'),
                Some(other) => bail!("unknown escape `\\{other}`"),
                None => bail!("dangling `\\` at end of payload"),
            },
            Some(ch) => text.push(ch),
            None => bail!("unterminated quoted payload"),
        }
    }
}
