// ==========================================
// 邮件名单清洗工具 - 清洗模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 输入拒绝 / 解析失败 / 会话操作 / 列配置操作
// ==========================================

use crate::i18n;
use thiserror::Error;

/// 清洗模块错误类型
///
/// 任何错误都只波及单个文件或单次编辑操作，对进程不致命
#[derive(Error, Debug)]
pub enum CleanError {
    // ===== 文件前置校验（解析之前）=====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件过大: {size} 字节（上限 {max} 字节）")]
    FileTooLarge { size: u64, max: u64 },

    #[error("文件格式不支持: {0}（仅支持 .csv/.xlsx/.xls）")]
    UnsupportedFormat(String),

    #[error("文件名不安全: {0}")]
    UnsafeFilename(String),

    // ===== 解析错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 内容校验（解析之后）=====
    #[error("行数超限: {rows} 行（上限 {max} 行）")]
    TooManyRows { rows: usize, max: usize },

    #[error("内容包含可疑片段 (行 {row})")]
    SuspiciousContent { row: usize },

    // ===== 会话操作 =====
    #[error("会话数超限（上限 {max} 个）")]
    TooManyFiles { max: usize },

    #[error("会话不存在: {0}")]
    SessionNotFound(String),

    #[error("记录不存在: {0}")]
    RecordNotFound(String),

    // ===== 列配置操作 =====
    #[error("列名为空")]
    EmptyColumnLabel,

    #[error("列名重复: {0}")]
    DuplicateColumnLabel(String),

    #[error("列不存在: {0}")]
    ColumnNotFound(String),

    #[error("不能关闭最后一个启用的列")]
    LastEnabledColumn,

    #[error("不能删除最后一列")]
    LastColumn,

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CleanError {
    /// 渲染面向用户的本地化消息（跟随当前 locale）
    pub fn user_message(&self) -> String {
        match self {
            CleanError::FileNotFound(path) => {
                i18n::t_with_args("upload.file_not_found", &[("path", path)])
            }
            CleanError::FileTooLarge { size, max } => i18n::t_with_args(
                "upload.file_too_large",
                &[("size", &size.to_string()), ("max", &max.to_string())],
            ),
            CleanError::UnsupportedFormat(name) => {
                i18n::t_with_args("upload.unsupported_format", &[("name", name)])
            }
            CleanError::UnsafeFilename(name) => {
                i18n::t_with_args("upload.unsafe_filename", &[("name", name)])
            }
            CleanError::FileReadError(_)
            | CleanError::ExcelParseError(_)
            | CleanError::CsvParseError(_) => i18n::t("upload.parse_failed"),
            CleanError::TooManyRows { rows, max } => i18n::t_with_args(
                "upload.too_many_rows",
                &[("rows", &rows.to_string()), ("max", &max.to_string())],
            ),
            CleanError::SuspiciousContent { row } => {
                i18n::t_with_args("upload.suspicious_content", &[("row", &row.to_string())])
            }
            CleanError::TooManyFiles { max } => {
                i18n::t_with_args("upload.too_many_files", &[("max", &max.to_string())])
            }
            CleanError::SessionNotFound(_) => i18n::t("session.not_found"),
            CleanError::RecordNotFound(_) => i18n::t("session.record_not_found"),
            CleanError::EmptyColumnLabel => i18n::t("columns.empty_label"),
            CleanError::DuplicateColumnLabel(label) => {
                i18n::t_with_args("columns.duplicate_label", &[("label", label)])
            }
            CleanError::ColumnNotFound(_) => i18n::t("columns.not_found"),
            CleanError::LastEnabledColumn => i18n::t("columns.last_enabled"),
            CleanError::LastColumn => i18n::t("columns.last_column"),
            CleanError::InternalError(_) | CleanError::Other(_) => i18n::t("error.internal"),
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        CleanError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for CleanError {
    fn from(err: csv::Error) -> Self {
        CleanError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for CleanError {
    fn from(err: calamine::Error) -> Self {
        CleanError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type CleanResult<T> = Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_share_generic_user_message() {
        // 解析失败统一呈现"无法处理文件"类消息，不暴露内部细节
        let a = CleanError::CsvParseError("bad quote".to_string()).user_message();
        let b = CleanError::ExcelParseError("bad sheet".to_string()).user_message();
        assert_eq!(a, b);
        assert!(!a.contains("bad quote"));
    }

    #[test]
    fn test_file_too_large_message_contains_numbers() {
        let msg = CleanError::FileTooLarge {
            size: 123,
            max: 100,
        }
        .user_message();
        assert!(msg.contains("123"));
        assert!(msg.contains("100"));
    }
}
