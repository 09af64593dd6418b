use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// 檢測編碼，基於 BOM
fn detect_encoding(bytes: &[u8]) -> (&'static encoding_rs::Encoding, usize) {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        (encoding_rs::UTF_8, 3)
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        (encoding_rs::UTF_16LE, 2)
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        (encoding_rs::UTF_16BE, 2)
    } else {
        // 無 BOM，預設 UTF-8
        (encoding_rs::UTF_8, 0)
    }
}

/// 解碼腳本內容；有指定編碼時直接使用（不理會 BOM），否則依 BOM 判斷
pub fn decode_script(bytes: &[u8], encoding: Option<&'static encoding_rs::Encoding>) -> String {
    let (decoded, encoding, had_errors) = match encoding {
        Some(specified) => {
            let (decoded, had_errors) = specified.decode_without_bom_handling(bytes);
            (decoded, specified, had_errors)
        }
        None => {
            let (detected, bom_length) = detect_encoding(bytes);
            let (decoded, had_errors) = detected.decode_without_bom_handling(&bytes[bom_length..]);
            (decoded, detected, had_errors)
        }
    };

    if had_errors {
        log::warn!("Encoding errors detected in script ({})", encoding.name());
    }
    decoded.into_owned()
}

pub fn read_script(path: &Path, encoding: Option<&'static encoding_rs::Encoding>) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read script: {}", path.display()))?;
    Ok(decode_script(&bytes, encoding))
}

pub fn read_script_stdin(encoding: Option<&'static encoding_rs::Encoding>) -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read script from stdin")?;
    Ok(decode_script(&bytes, encoding))
}

/// 依標籤查找編碼，例如 `utf-8`、`gbk`、`big5`
pub fn encoding_for_label(label: &str) -> Result<&'static encoding_rs::Encoding> {
    encoding_rs::Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| anyhow::anyhow!("unknown encoding `{label}`"))
}
