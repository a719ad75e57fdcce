//! 不可打印字符判定

/// 码点级判定：`c < 32` 且不在 {9, 10, 13} 中，或 `c == 127`
pub fn is_non_printable_code_point(c: u32) -> bool {
    (c < 32 && !matches!(c, 9 | 10 | 13)) || c == 127
}

/// 字符级判定（等价于对 `c as u32` 调用 [`is_non_printable_code_point`]）
pub fn is_non_printable(c: char) -> bool {
    is_non_printable_code_point(c as u32)
}

/// 收集一行中的不可打印字符：保持出现顺序，保留重复
pub fn offending_chars(line: &str) -> String {
    line.chars().filter(|&c| is_non_printable(c)).collect()
}
