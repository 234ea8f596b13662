// ==========================================
// 邮件名单清洗工具 - 核心库
// ==========================================
// 技术栈: Rust + calamine + csv
// 系统定位: 联系人名单提取与清洗管道
// 核心流程: 解析 → 校验 → 清洗 → 去重 → 编辑 → 导出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 联系人记录/列配置/文件会话
pub mod domain;

// 清洗层 - 提取与清洗管道
pub mod cleaner;

// 导出层 - CSV 序列化与导出文件名
pub mod export;

// 会话层 - 文件会话编排
pub mod session;

// 配置层 - 资源限额
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{ColumnSpec, ContactRecord, FileSession, ProcessingStats};

// 清洗管道
pub use cleaner::{
    CleanError, CleanResult, EmailValidatorImpl, ExtractedName, FieldSanitizerImpl,
    FileValidatorImpl, NameExtractorImpl, RecordBuilderImpl, UniversalFileParser,
};

// 配置
pub use config::CleanerLimits;

// 导出
pub use export::{sanitize_export_filename, CsvExporter};

// 会话编排
pub use session::SessionManager;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "邮件名单清洗工具";
