// ==========================================
// 邮件名单清洗工具 - 文件会话模型
// ==========================================
// 职责: 单个上传文件的工作集（记录、统计、列配置）与列模型操作
// 红线: columns 恒含至少一个启用列; 列操作失败必须原子不变
// ==========================================

use crate::cleaner::cleaner_trait::FieldSanitizer;
use crate::cleaner::error::{CleanError, CleanResult};
use crate::domain::column::{self, ColumnSpec};
use crate::domain::contact::{ContactRecord, ProcessingStats};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// FileSession - 单文件工作集
// ==========================================
// 生命周期: 上传+校验成功时创建; 用户关闭标签页或会话结束时销毁
// 各会话互相独立，任何失败不波及其他会话
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSession {
    /// 会话唯一标识（UUID v4）
    pub id: String,

    /// 清洗后的文件名
    pub name: String,

    /// 联系人记录集
    pub data: Vec<ContactRecord>,

    /// 处理统计（创建时产出一次，不再重算）
    pub stats: ProcessingStats,

    /// 列配置
    pub columns: Vec<ColumnSpec>,
}

impl FileSession {
    /// 创建会话（默认六列全部启用）
    pub fn new(name: String, data: Vec<ContactRecord>, stats: ProcessingStats) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            data,
            stats,
            columns: column::default_columns(),
        }
    }

    // ==========================================
    // 列模型操作（同步、失败即原子不变）
    // ==========================================

    /// 添加自定义列
    ///
    /// # 拒绝条件
    /// - 标签 trim 后为空
    /// - 标签与既有列大小写不敏感重复
    ///
    /// # 效果
    /// - 生成唯一列 id，追加启用列
    /// - 为所有既有记录回填空串
    pub fn add_column(&mut self, label: &str, sanitizer: &dyn FieldSanitizer) -> CleanResult<()> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(CleanError::EmptyColumnLabel);
        }
        if self.label_exists(trimmed, None) {
            return Err(CleanError::DuplicateColumnLabel(trimmed.to_string()));
        }

        let id = self.unique_column_id(&column::slug_from_label(trimmed));
        let clean_label = sanitizer.sanitize(trimmed);

        self.columns.push(ColumnSpec {
            id: id.clone(),
            label: clean_label,
            enabled: true,
        });
        for record in &mut self.data {
            record.set_field(&id, String::new());
        }
        Ok(())
    }

    /// 重命名列
    ///
    /// # 拒绝条件
    /// - 新标签 trim 后为空
    /// - 新标签与**其他**列大小写不敏感冲突
    pub fn rename_column(
        &mut self,
        column_id: &str,
        new_label: &str,
        sanitizer: &dyn FieldSanitizer,
    ) -> CleanResult<()> {
        let trimmed = new_label.trim();
        if trimmed.is_empty() {
            return Err(CleanError::EmptyColumnLabel);
        }
        if self.label_exists(trimmed, Some(column_id)) {
            return Err(CleanError::DuplicateColumnLabel(trimmed.to_string()));
        }

        let clean_label = sanitizer.sanitize(trimmed);
        let spec = self
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| CleanError::ColumnNotFound(column_id.to_string()))?;
        spec.label = clean_label;
        Ok(())
    }

    /// 切换列启用状态
    ///
    /// # 拒绝条件
    /// - 关闭最后一个仍启用的列
    pub fn toggle_column(&mut self, column_id: &str) -> CleanResult<()> {
        let enabled_count = self.columns.iter().filter(|c| c.enabled).count();
        let spec = self
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| CleanError::ColumnNotFound(column_id.to_string()))?;

        if spec.enabled && enabled_count <= 1 {
            return Err(CleanError::LastEnabledColumn);
        }
        spec.enabled = !spec.enabled;
        Ok(())
    }

    /// 删除列
    ///
    /// # 拒绝条件
    /// - 仅剩一列
    /// - 删除最后一个仍启用的列（守住"至少一个启用列"不变量）
    ///
    /// # 效果
    /// - 移除列定义，并从所有记录删除对应字段
    /// - 例外: email / email_only 共享存储，删除其一时兄弟列的数据保留
    pub fn remove_column(&mut self, column_id: &str) -> CleanResult<()> {
        if self.columns.len() <= 1 {
            return Err(CleanError::LastColumn);
        }
        let index = self
            .columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| CleanError::ColumnNotFound(column_id.to_string()))?;

        let enabled_count = self.columns.iter().filter(|c| c.enabled).count();
        if self.columns[index].enabled && enabled_count <= 1 {
            return Err(CleanError::LastEnabledColumn);
        }

        let removed = self.columns.remove(index);
        // email 与 email_only 共享同一存储字段:
        // 兄弟列仍存在时不清数据，否则另一列会同时丢值
        let shares_live_sibling = match removed.id.as_str() {
            column::COL_EMAIL => self.columns.iter().any(|c| c.id == column::COL_EMAIL_ONLY),
            column::COL_EMAIL_ONLY => self.columns.iter().any(|c| c.id == column::COL_EMAIL),
            _ => false,
        };
        if !shares_live_sibling {
            for record in &mut self.data {
                record.remove_field(&removed.id);
            }
        }
        Ok(())
    }

    // ==========================================
    // 记录级操作
    // ==========================================

    /// 字段级编辑（值再次过字段清洗器）
    pub fn edit_record(
        &mut self,
        record_id: &str,
        column_id: &str,
        value: &str,
        sanitizer: &dyn FieldSanitizer,
    ) -> CleanResult<()> {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return Err(CleanError::ColumnNotFound(column_id.to_string()));
        }
        let record = self
            .data
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| CleanError::RecordNotFound(record_id.to_string()))?;
        record.set_field(column_id, sanitizer.sanitize(value));
        Ok(())
    }

    /// 删除一条记录
    pub fn delete_record(&mut self, record_id: &str) -> CleanResult<()> {
        let index = self
            .data
            .iter()
            .position(|r| r.id == record_id)
            .ok_or_else(|| CleanError::RecordNotFound(record_id.to_string()))?;
        self.data.remove(index);
        Ok(())
    }

    /// 追加一条空白记录（按当前列集合初始化为空串）
    pub fn add_row(&mut self) -> &ContactRecord {
        let mut record = ContactRecord::blank();
        for spec in &self.columns {
            record.set_field(&spec.id, String::new());
        }
        self.data.push(record);
        self.data.last().expect("刚插入的记录必然存在")
    }

    // ===== 内部辅助 =====

    /// 标签是否已被占用（大小写不敏感; exclude_id 用于重命名时排除自身）
    fn label_exists(&self, label: &str, exclude_id: Option<&str>) -> bool {
        let lower = label.to_lowercase();
        self.columns
            .iter()
            .filter(|c| exclude_id.map_or(true, |id| c.id != id))
            .any(|c| c.label.to_lowercase() == lower)
    }

    /// 生成不与既有列冲突的列 id
    fn unique_column_id(&self, base: &str) -> String {
        if !self.columns.iter().any(|c| c.id == base) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", base, n);
            if !self.columns.iter().any(|c| c.id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::sanitizer::FieldSanitizer;

    fn test_session() -> FileSession {
        let mut record = ContactRecord::blank();
        record.set_field("email", "jane@x.com".to_string());
        FileSession::new(
            "contacts.csv".to_string(),
            vec![record],
            ProcessingStats::default(),
        )
    }

    #[test]
    fn test_add_column_backfills_records() {
        let mut session = test_session();
        let sanitizer = FieldSanitizer::default();

        session.add_column("Phone Number", &sanitizer).unwrap();

        assert_eq!(session.columns.len(), 7);
        assert_eq!(session.columns[6].id, "phone_number");
        assert!(session.columns[6].enabled);
        assert_eq!(session.data[0].field("phone_number"), Some(""));
    }

    #[test]
    fn test_add_column_rejects_duplicate_label_case_insensitive() {
        let mut session = test_session();
        let sanitizer = FieldSanitizer::default();
        let before = session.columns.clone();

        // "Email" 已作为内置列标签存在（任意大小写均拒绝）
        assert!(matches!(
            session.add_column("EMAIL", &sanitizer),
            Err(CleanError::DuplicateColumnLabel(_))
        ));
        assert_eq!(session.columns, before);
    }

    #[test]
    fn test_add_column_rejects_empty_label() {
        let mut session = test_session();
        let sanitizer = FieldSanitizer::default();
        assert!(matches!(
            session.add_column("   ", &sanitizer),
            Err(CleanError::EmptyColumnLabel)
        ));
        assert_eq!(session.columns.len(), 6);
    }

    #[test]
    fn test_rename_column() {
        let mut session = test_session();
        let sanitizer = FieldSanitizer::default();

        session
            .rename_column("company", "Organization", &sanitizer)
            .unwrap();
        assert_eq!(session.columns[5].label, "Organization");

        // 与其他列冲突 → 拒绝
        assert!(matches!(
            session.rename_column("company", "name", &sanitizer),
            Err(CleanError::DuplicateColumnLabel(_))
        ));

        // 重命名为自身标签（仅改大小写）允许
        session
            .rename_column("company", "ORGANIZATION", &sanitizer)
            .unwrap();
        assert_eq!(session.columns[5].label, "ORGANIZATION");
    }

    #[test]
    fn test_toggle_rejects_last_enabled_column() {
        let mut session = test_session();
        // 关掉前五列
        for id in ["name", "email_only", "first_name", "last_name", "email"] {
            session.toggle_column(id).unwrap();
        }
        assert!(matches!(
            session.toggle_column("company"),
            Err(CleanError::LastEnabledColumn)
        ));

        // 重新启用后可再关闭其他列
        session.toggle_column("name").unwrap();
        session.toggle_column("company").unwrap();
    }

    #[test]
    fn test_remove_rejects_last_column() {
        let mut session = test_session();
        for id in ["name", "email_only", "first_name", "last_name", "email"] {
            session.remove_column(id).unwrap();
        }
        assert_eq!(session.columns.len(), 1);
        assert!(matches!(
            session.remove_column("company"),
            Err(CleanError::LastColumn)
        ));
    }

    #[test]
    fn test_remove_column_deletes_record_field() {
        let mut session = test_session();
        let sanitizer = FieldSanitizer::default();
        session.add_column("Tags", &sanitizer).unwrap();
        session
            .edit_record(
                &session.data[0].id.clone(),
                "tags",
                "vip",
                &sanitizer,
            )
            .unwrap();
        assert_eq!(session.data[0].field("tags"), Some("vip"));

        session.remove_column("tags").unwrap();
        assert_eq!(session.data[0].field("tags"), None);
    }

    #[test]
    fn test_remove_email_only_column_keeps_email_data() {
        let mut session = test_session();

        session.remove_column("email_only").unwrap();
        assert!(!session.columns.iter().any(|c| c.id == "email_only"));
        // 共享存储: Email 列仍在展示/导出该值，不得清空
        assert_eq!(session.data[0].field("email"), Some("jane@x.com"));

        // 兄弟列也删除后才真正清数据
        session.remove_column("email").unwrap();
        assert_eq!(session.data[0].field("email"), Some(""));
    }

    #[test]
    fn test_remove_email_column_keeps_email_only_data() {
        let mut session = test_session();

        session.remove_column("email").unwrap();
        assert_eq!(session.data[0].field("email_only"), Some("jane@x.com"));
    }

    #[test]
    fn test_edit_record_sanitizes_value() {
        let mut session = test_session();
        let sanitizer = FieldSanitizer::default();
        let record_id = session.data[0].id.clone();

        session
            .edit_record(&record_id, "company", "=SUM(A1:A9)", &sanitizer)
            .unwrap();
        assert_eq!(session.data[0].field("company"), Some("'=SUM(A1:A9)"));
    }

    #[test]
    fn test_add_row_initializes_all_columns() {
        let mut session = test_session();
        let sanitizer = FieldSanitizer::default();
        session.add_column("Phone", &sanitizer).unwrap();

        let id = session.add_row().id.clone();
        let record = session.data.iter().find(|r| r.id == id).unwrap();
        assert_eq!(record.field("phone"), Some(""));
        assert_eq!(record.field("email"), Some(""));
    }

    #[test]
    fn test_delete_record() {
        let mut session = test_session();
        let record_id = session.data[0].id.clone();
        session.delete_record(&record_id).unwrap();
        assert!(session.data.is_empty());
        assert!(matches!(
            session.delete_record(&record_id),
            Err(CleanError::RecordNotFound(_))
        ));
    }
}
