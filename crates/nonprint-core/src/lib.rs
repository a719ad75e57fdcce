//! 不可打印字符扫描库
//!
//! 设计要点：
//! - 逐行扫描 UTF-8 文本，按通用换行（`\n` / `\r\n` / `\r`）切分行，行号从 1 开始。
//! - 不可打印判定：码点 < 32 且不是 9/10/13，或等于 127（DEL）。
//! - 每个命中行输出一行 `Line N: '...'`，字符按出现顺序拼接，并以 Python repr 风格转义。
//! - 错误只有两类：文件不存在、其他失败（见 [`ScanError`]）。

mod classify;
mod error;
mod lines;
mod repr;
mod scan;
mod stats;
mod types;

pub use classify::{is_non_printable, is_non_printable_code_point, offending_chars};
pub use error::ScanError;
pub use repr::python_repr;
pub use scan::{scan_and_write, scan_reader};
pub use stats::ScanStats;
pub use types::Diagnostic;
