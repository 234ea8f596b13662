// ==========================================
// 邮件名单清洗工具 - 清洗层
// ==========================================
// 职责: 记录提取与清洗管道（解析 → 校验 → 清洗 → 去重 → 姓名推断）
// ==========================================

// 模块声明
pub mod cleaner_trait;
pub mod email_validator;
pub mod error;
pub mod file_parser;
pub mod file_validator;
pub mod name_data;
pub mod name_extractor;
pub mod record_builder;
pub mod sanitizer;

// 重导出核心类型
pub use email_validator::EmailValidator as EmailValidatorImpl;
pub use error::{CleanError, CleanResult};
pub use file_parser::{CsvFileParser, ExcelFileParser, UniversalFileParser};
pub use file_validator::FileValidator as FileValidatorImpl;
pub use name_extractor::{ExtractedName, NameExtractor as NameExtractorImpl};
pub use record_builder::RecordBuilder as RecordBuilderImpl;
pub use sanitizer::FieldSanitizer as FieldSanitizerImpl;

// 重导出 Trait 接口
pub use cleaner_trait::{
    EmailValidator, FieldSanitizer, FileParser, FileValidator, NameExtractor, RecordBuilder,
};
