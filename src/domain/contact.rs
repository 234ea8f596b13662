// ==========================================
// 邮件名单清洗工具 - 联系人领域模型
// ==========================================
// 职责: 规范联系人记录与单文件处理统计
// 红线: 记录字段必须经过字段清洗器; email 恒通过邮箱校验器
// ==========================================

use crate::domain::column;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ==========================================
// ContactRecord - 规范联系人记录
// ==========================================
// 生命周期: 记录构建器创建 → 用户字段级编辑（再次过清洗器）→ 显式删除
// 不持久化，仅存活于会话内（serde 派生用于界面层的临时序列化）
//
// 历史上 email / email_only 为同值双字段；此处折叠为单一 email 存储，
// 两个内置列 id 都读写该字段（默认列集仍保持六列外观）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    /// 记录唯一标识（UUID v4，创建时生成，仅作编辑键）
    pub id: String,

    /// 显示姓名（可为空）
    pub name: String,

    /// 规范化邮箱（小写、去空白；非空且通过邮箱校验器）
    pub email: String,

    /// 名（可为空，与 name 可推导时保持一致）
    pub first_name: String,

    /// 姓（可为空）
    pub last_name: String,

    /// 公司（可为空）
    pub company: String,

    /// 自定义列数据（列 id → 值）
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl ContactRecord {
    /// 创建一条全空白记录（"添加行"操作使用）
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            extra: HashMap::new(),
        }
    }

    /// 按列 id 读取字段值（内置列 + 自定义列）
    ///
    /// # 返回
    /// - Some(&str): 字段存在（内置列恒存在）
    /// - None: 未知的自定义列 id
    pub fn field(&self, column_id: &str) -> Option<&str> {
        match column_id {
            column::COL_NAME => Some(&self.name),
            // email_only 与 email 读写同一存储字段
            column::COL_EMAIL | column::COL_EMAIL_ONLY => Some(&self.email),
            column::COL_FIRST_NAME => Some(&self.first_name),
            column::COL_LAST_NAME => Some(&self.last_name),
            column::COL_COMPANY => Some(&self.company),
            _ => self.extra.get(column_id).map(|s| s.as_str()),
        }
    }

    /// 按列 id 写入字段值
    ///
    /// 调用方必须先对 value 过字段清洗器
    pub fn set_field(&mut self, column_id: &str, value: String) {
        match column_id {
            column::COL_NAME => self.name = value,
            column::COL_EMAIL | column::COL_EMAIL_ONLY => self.email = value,
            column::COL_FIRST_NAME => self.first_name = value,
            column::COL_LAST_NAME => self.last_name = value,
            column::COL_COMPANY => self.company = value,
            _ => {
                self.extra.insert(column_id.to_string(), value);
            }
        }
    }

    /// 按列 id 删除字段（删除列时使用）
    ///
    /// 内置列字段清空为空串，自定义列移除键
    pub fn remove_field(&mut self, column_id: &str) {
        match column_id {
            column::COL_NAME
            | column::COL_EMAIL
            | column::COL_EMAIL_ONLY
            | column::COL_FIRST_NAME
            | column::COL_LAST_NAME
            | column::COL_COMPANY => self.set_field(column_id, String::new()),
            _ => {
                self.extra.remove(column_id);
            }
        }
    }
}

// ==========================================
// ProcessingStats - 单文件处理统计
// ==========================================
// 用途: 记录构建器一次性产出，附着于 FileSession，之后不再重算
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// 数据行总数（不含表头）
    pub total: usize,

    /// 产出记录数
    pub valid: usize,

    /// 邮箱格式/安全校验失败的行数
    pub invalid: usize,

    /// 重复邮箱（规范化后精确匹配）被丢弃的行数
    pub duplicates: usize,

    /// 清洗后发生变化的单元格数
    pub sanitized: usize,

    /// 从邮箱 local-part 推断出姓名的记录数
    pub names_extracted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_record_has_unique_id() {
        let a = ContactRecord::blank();
        let b = ContactRecord::blank();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_email_only_aliases_email() {
        let mut record = ContactRecord::blank();
        record.set_field("email", "jane@x.com".to_string());
        assert_eq!(record.field("email_only"), Some("jane@x.com"));

        record.set_field("email_only", "john@x.com".to_string());
        assert_eq!(record.field("email"), Some("john@x.com"));
    }

    #[test]
    fn test_extra_field_roundtrip() {
        let mut record = ContactRecord::blank();
        assert_eq!(record.field("phone"), None);

        record.set_field("phone", "123".to_string());
        assert_eq!(record.field("phone"), Some("123"));

        record.remove_field("phone");
        assert_eq!(record.field("phone"), None);
    }

    #[test]
    fn test_remove_builtin_field_clears() {
        let mut record = ContactRecord::blank();
        record.set_field("company", "Acme".to_string());
        record.remove_field("company");
        assert_eq!(record.field("company"), Some(""));
    }
}
