//! Python 风格的字符串 repr 渲染（诊断行输出需逐字节稳定）
use std::fmt::Write;

/// Python `repr(str)` 风格渲染，仅覆盖引号选择与 C0/DEL/C1 控制符的转义
/// - 其他不可打印的 Unicode（如 U+00A0、U+200B）原样输出，与 Python 不同
/// - 默认单引号；若含 `'` 且不含 `"` 则改用双引号
/// - `\t` `\n` `\r` 使用短转义，其余 C0/DEL/C1 控制符使用 `\xNN`（小写十六进制）
pub fn python_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                // char::is_control 覆盖 U+0000..=U+001F、U+007F..=U+009F，均落在一个字节内
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
