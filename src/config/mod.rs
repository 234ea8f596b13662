// ==========================================
// 邮件名单清洗工具 - 配置层
// ==========================================
// 职责: 资源限额常量（显式传入，不使用环境全局状态）
// ==========================================

pub mod limits;

pub use limits::CleanerLimits;
