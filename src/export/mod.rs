// ==========================================
// 邮件名单清洗工具 - 导出层
// ==========================================
// 职责: 启用列 → 转义 CSV 文本 + 导出文件名清洗
// ==========================================

pub mod csv_exporter;

pub use csv_exporter::{sanitize_export_filename, CsvExporter};
