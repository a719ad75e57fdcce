//! 扫描统计信息（便于 CLI 打印日志）

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// 已读取的行数
    pub lines_scanned: usize,
    /// 含不可打印字符的行数（即输出的诊断行数）
    pub lines_flagged: usize,
    /// 不可打印字符总数（含重复）
    pub chars_flagged: usize,
}
