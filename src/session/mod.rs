// ==========================================
// 邮件名单清洗工具 - 会话层
// ==========================================
// 职责: 多文件会话的编排（摄取 → 校验 → 构建 → 导出）
// ==========================================

pub mod manager;

pub use manager::SessionManager;
