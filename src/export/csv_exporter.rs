// ==========================================
// 邮件名单清洗工具 - CSV 导出器实现
// ==========================================
// 职责: 记录集 + 启用列 → 转义 CSV 文本（确定性纯函数）
// 注意: 转义语义需与历史导出逐字节一致，故手写而不走 csv crate 写入器
//       （csv crate 仅用于解析侧）
// ==========================================

use crate::domain::{ColumnSpec, ContactRecord};

/// 导出文件名为空时的默认名
pub const DEFAULT_EXPORT_NAME: &str = "cleaned_email_list";

/// 导出文件名长度上限（不含 .csv 后缀）
pub const MAX_EXPORT_NAME_LENGTH: usize = 120;

// ==========================================
// CsvExporter 实现
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    /// 序列化为 CSV 文本
    ///
    /// - 表头行 = 启用列标签逗号拼接（历史行为: 表头不转义）
    /// - 数据字段含逗号/双引号/换行时双引号包裹，内嵌双引号翻倍
    /// - 行以 \n 拼接，无尾随换行
    /// - 不过滤行: 工作集内全部记录导出（含用户手工添加的行）
    pub fn to_csv(records: &[ContactRecord], columns: &[ColumnSpec]) -> String {
        let enabled: Vec<&ColumnSpec> = columns.iter().filter(|c| c.enabled).collect();

        let header = enabled
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(header);

        for record in records {
            let line = enabled
                .iter()
                .map(|col| escape_field(record.field(&col.id).unwrap_or("")))
                .collect::<Vec<_>>()
                .join(",");
            lines.push(line);
        }

        lines.join("\n")
    }
}

/// 单字段转义: 含逗号/双引号/换行时包裹并翻倍内嵌双引号
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// 清洗导出文件名（CSV 序列化的旁路纯函数，不属于序列化本身）
///
/// 去 NUL / 路径分隔 / 穿越片段，不安全字符替换为下划线，
/// 空名回落默认名，长度截断，强制 .csv 后缀
pub fn sanitize_export_filename(name: &str) -> String {
    let mut base: String = name
        .replace('\0', "")
        .replace("..", "")
        .replace(['/', '\\'], "");

    // 去掉既有 .csv 后缀，统一在末尾追加
    if base.to_lowercase().ends_with(".csv") {
        base.truncate(base.len() - 4);
    }

    let mut cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // 去除首尾的点与下划线，避免隐藏文件/空壳名
    cleaned = cleaned.trim_matches(['.', '_']).to_string();

    if cleaned.is_empty() {
        cleaned = DEFAULT_EXPORT_NAME.to_string();
    }
    if cleaned.chars().count() > MAX_EXPORT_NAME_LENGTH {
        cleaned = cleaned.chars().take(MAX_EXPORT_NAME_LENGTH).collect();
    }

    format!("{}.csv", cleaned)
}
