//! 公共类型（对外暴露）
use std::fmt;

use crate::classify::offending_chars;
use crate::repr::python_repr;

/// 单行诊断：行号（从 1 开始）与按序拼接的不可打印字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line_number: usize,
    pub chars: String,
}

impl Diagnostic {
    /// 对一行文本求诊断；没有不可打印字符时返回 None
    pub fn for_line(line_number: usize, line: &str) -> Option<Self> {
        let chars = offending_chars(line);
        if chars.is_empty() {
            None
        } else {
            Some(Self { line_number, chars })
        }
    }
}

/// 输出格式：`Line {N}: {repr}`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, python_repr(&self.chars))
    }
}
