// ==========================================
// 邮件名单清洗工具 - 领域层
// ==========================================
// 职责: 联系人记录、列配置、文件会话等领域模型
// ==========================================

pub mod column;
pub mod contact;
pub mod session;

pub use column::{default_columns, ColumnSpec};
pub use contact::{ContactRecord, ProcessingStats};
pub use session::FileSession;
