//! 扫描错误（封闭集合：仅两种）
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 扫描失败的原因；`Display` 即面向用户的提示文本
#[derive(Debug, Error)]
pub enum ScanError {
    /// 目标文件不存在
    #[error("Error: The file '{}' does not exist.", .path.display())]
    FileNotFound { path: PathBuf },

    /// 其他任何失败（权限、解码、读写错误等）
    #[error("An error occurred: {message}")]
    GenericFailure { message: String },
}

impl ScanError {
    /// 打开文件失败时的归类：NotFound 单独处理，其余归为通用失败
    pub(crate) fn from_open(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::FileNotFound { path: path.to_path_buf() },
            _ => ScanError::generic(err),
        }
    }

    pub(crate) fn generic(err: impl std::fmt::Display) -> Self {
        ScanError::GenericFailure { message: err.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScanError::FileNotFound { .. })
    }
}
