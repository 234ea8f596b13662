// ==========================================
// 邮件名单清洗工具 - 资源限额配置
// ==========================================
// 职责: 上传/解析/会话阶段的资源上限
// 红线: 只读数据结构，由调用方显式传入各组件
// ==========================================

use serde::{Deserialize, Serialize};

// ===== 默认值 =====

/// 单文件大小上限（10 MiB）
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// 单文件数据行数上限（不含表头）
pub const DEFAULT_MAX_ROWS: usize = 50_000;

/// 同时打开的文件会话数上限
pub const DEFAULT_MAX_FILES: usize = 20;

/// 单元格截断长度（按字符计）
pub const DEFAULT_MAX_CELL_LENGTH: usize = 1000;

/// 允许的文件扩展名（小写，含点）
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[".csv", ".xlsx", ".xls"];

// ==========================================
// CleanerLimits - 资源限额
// ==========================================
// 用途: 文件校验器/清洗器/会话管理器共享的限额配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerLimits {
    /// 单文件大小上限（字节）
    pub max_file_size_bytes: u64,

    /// 单文件数据行数上限（不含表头）
    pub max_rows: usize,

    /// 同时打开的文件会话数上限
    pub max_files: usize,

    /// 单元格截断长度（字符数）
    pub max_cell_length: usize,

    /// 允许的文件扩展名（小写后缀匹配）
    pub allowed_extensions: Vec<String>,
}

impl Default for CleanerLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            max_rows: DEFAULT_MAX_ROWS,
            max_files: DEFAULT_MAX_FILES,
            max_cell_length: DEFAULT_MAX_CELL_LENGTH,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CleanerLimits {
    /// 判断文件名扩展名是否被允许（大小写不敏感后缀匹配）
    pub fn extension_allowed(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.allowed_extensions.iter().any(|ext| lower.ends_with(ext))
    }
}
