// ==========================================
// 邮件名单清洗工具 - 列配置模型
// ==========================================
// 职责: 导出/展示列定义与内置列集合
// ==========================================

use serde::{Deserialize, Serialize};

// ===== 内置列 id =====
pub const COL_NAME: &str = "name";
pub const COL_EMAIL_ONLY: &str = "email_only";
pub const COL_FIRST_NAME: &str = "first_name";
pub const COL_LAST_NAME: &str = "last_name";
pub const COL_EMAIL: &str = "email";
pub const COL_COMPANY: &str = "company";

// ==========================================
// ColumnSpec - 列定义
// ==========================================
// id: 记录字段的稳定键; label: 用户可见/导出表头; enabled: 是否参与展示与导出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub id: String,
    pub label: String,
    pub enabled: bool,
}

impl ColumnSpec {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            enabled: true,
        }
    }
}

/// 内置默认列集合（全部启用）
///
/// email_only 与 email 两列历史上并存，保留六列外观以兼容既有导出模板
pub fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(COL_NAME, "Name"),
        ColumnSpec::new(COL_EMAIL_ONLY, "Email Only"),
        ColumnSpec::new(COL_FIRST_NAME, "First Name"),
        ColumnSpec::new(COL_LAST_NAME, "Last Name"),
        ColumnSpec::new(COL_EMAIL, "Email"),
        ColumnSpec::new(COL_COMPANY, "Company"),
    ]
}

/// 由标签生成列 id（小写、空白折叠为下划线）
///
/// 与既有 id 冲突时由调用方追加序号保证唯一
pub fn slug_from_label(label: &str) -> String {
    let slug: String = label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if slug.is_empty() {
        "column".to_string()
    } else {
        slug
    }
}
