//! 扫描主流程
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::ScanError;
use crate::lines::UniversalLines;
use crate::stats::ScanStats;
use crate::types::Diagnostic;

/// 扫描单个文件，将诊断行逐行写入 `out`
/// - 文件不存在 → `ScanError::FileNotFound`
/// - 其他打开/读取/解码/写出错误 → `ScanError::GenericFailure`，已写出的诊断保留
pub fn scan_and_write(path: &Path, out: &mut dyn Write) -> Result<ScanStats, ScanError> {
    let file = File::open(path).map_err(|e| {
        debug!(?path, error = %e, "open failed");
        ScanError::from_open(path, e)
    })?;
    info!(?path, "starting scan");
    // 文件句柄随 reader 在所有返回路径上释放
    let stats = scan_reader(BufReader::new(file), out)?;
    info!(
        lines_scanned = stats.lines_scanned,
        lines_flagged = stats.lines_flagged,
        chars_flagged = stats.chars_flagged,
        "scan finished"
    );
    Ok(stats)
}

/// 扫描任意缓冲输入（测试与内存数据使用）
pub fn scan_reader<R: BufRead>(reader: R, out: &mut dyn Write) -> Result<ScanStats, ScanError> {
    let mut lines = UniversalLines::new(reader);
    let mut stats = ScanStats::default();
    let mut line_number: usize = 0;

    while let Some(raw) = lines.next_line().map_err(ScanError::generic)? {
        line_number += 1;
        stats.lines_scanned += 1;

        let text = String::from_utf8(raw)
            .map_err(|e| ScanError::generic(format!("line {line_number}: {e}")))?;

        if let Some(diag) = Diagnostic::for_line(line_number, &text) {
            let count = diag.chars.chars().count();
            debug!(line = line_number, count, "non-printable characters found");
            stats.lines_flagged += 1;
            stats.chars_flagged += count;
            writeln!(out, "{diag}").map_err(ScanError::generic)?;
        }
    }

    Ok(stats)
}
