// Parser - ファイル内容から整数への変換

use crate::core::{Number, SumError, SumResult};

/// 区切りとして扱うASCII空白（スペース、\t、\n、\v、\f、\r）
fn is_separator(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// 先頭の空白区切りトークンを切り出す
///
/// 空白はASCIIのみを対象とし、トークン以降の内容は一切見ない。
fn first_token(content: &[u8]) -> &[u8] {
    let start = content
        .iter()
        .position(|byte| !is_separator(byte))
        .unwrap_or(content.len());
    let rest = &content[start..];
    let end = rest.iter().position(is_separator).unwrap_or(rest.len());
    &rest[..end]
}

/// ファイル内容を整数として解釈する
///
/// 先頭トークンのみを対象とし、そのトークン全体が整数リテラルでなければ失敗する
/// （"42x" は不可、"42 abc" は 42）。UTF-8として検証するのもトークンだけ。
pub fn parse_number(content: impl AsRef<[u8]>) -> SumResult<Number> {
    let token = first_token(content.as_ref());
    let text = std::str::from_utf8(token)
        .map_err(|_| SumError::parse(String::from_utf8_lossy(token)))?;
    text.parse::<Number>().map_err(|_| SumError::parse(text))
}
