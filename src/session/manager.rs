// ==========================================
// 邮件名单清洗工具 - 会话管理器
// ==========================================
// 职责: 编排单文件摄取管道并持有全部活动会话
// 红线: 元数据校验必须在解析之前; 任一环节失败不产生会话
// ==========================================

use crate::cleaner::cleaner_trait::{FileValidator, RecordBuilder};
use crate::cleaner::error::{CleanError, CleanResult};
use crate::cleaner::file_parser::UniversalFileParser;
use crate::cleaner::file_validator::FileValidator as FileValidatorImpl;
use crate::cleaner::record_builder::RecordBuilder as RecordBuilderImpl;
use crate::config::CleanerLimits;
use crate::domain::FileSession;
use crate::export::{sanitize_export_filename, CsvExporter};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

// ==========================================
// SessionManager
// ==========================================
pub struct SessionManager {
    limits: CleanerLimits,
    sessions: Vec<FileSession>,
    validator: FileValidatorImpl,
    builder: RecordBuilderImpl,
    parser: UniversalFileParser,
}

impl SessionManager {
    pub fn new(limits: CleanerLimits) -> Self {
        Self {
            validator: FileValidatorImpl::new(limits.clone()),
            builder: RecordBuilderImpl::with_limits(&limits),
            parser: UniversalFileParser,
            sessions: Vec::new(),
            limits,
        }
    }

    /// 从磁盘摄取一个文件，成功则创建新会话并返回其 id
    ///
    /// 管道顺序固定: 会话数上限 → 元数据校验（大小/文件名/扩展名）
    /// → 解析 → 内容校验 → 记录构建。元数据不过关的文件一个字节都不解析。
    pub fn ingest_file<P: AsRef<Path>>(&mut self, path: P) -> CleanResult<&FileSession> {
        let path = path.as_ref();

        if self.sessions.len() >= self.limits.max_files {
            return Err(CleanError::TooManyFiles {
                max: self.limits.max_files,
            });
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CleanError::UnsafeFilename(path.display().to_string()))?
            .to_string();

        let metadata = fs::metadata(path)
            .map_err(|_| CleanError::FileNotFound(path.display().to_string()))?;
        self.validator.validate_metadata(&file_name, metadata.len())?;

        let rows = self.parser.parse(path)?;
        self.ingest_rows(&file_name, rows)
    }

    /// 从已解析的二维行摄取（外部解析器入口，跳过元数据校验）
    pub fn ingest_rows(
        &mut self,
        file_name: &str,
        rows: Vec<Vec<String>>,
    ) -> CleanResult<&FileSession> {
        if self.sessions.len() >= self.limits.max_files {
            return Err(CleanError::TooManyFiles {
                max: self.limits.max_files,
            });
        }

        if let Err(e) = self.validator.validate_content(&rows) {
            warn!("文件内容校验失败: {} - {}", file_name, e);
            return Err(e);
        }

        let (records, stats) = self.builder.build_records(&rows);
        info!(
            "文件摄取完成: {} - 总行 {} / 有效 {} / 无效 {} / 重复 {} / 清洗 {} / 姓名推断 {}",
            file_name,
            stats.total,
            stats.valid,
            stats.invalid,
            stats.duplicates,
            stats.sanitized,
            stats.names_extracted
        );

        let session = FileSession::new(file_name.to_string(), records, stats);
        self.sessions.push(session);
        Ok(self.sessions.last().expect("刚插入的会话必然存在"))
    }

    /// 全部活动会话（按摄取顺序）
    pub fn sessions(&self) -> &[FileSession] {
        &self.sessions
    }

    /// 按 id 查找会话
    pub fn session(&self, session_id: &str) -> CleanResult<&FileSession> {
        self.sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or_else(|| CleanError::SessionNotFound(session_id.to_string()))
    }

    /// 按 id 查找会话（可变，用于列/记录编辑）
    pub fn session_mut(&mut self, session_id: &str) -> CleanResult<&mut FileSession> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| CleanError::SessionNotFound(session_id.to_string()))
    }

    /// 移除会话（用户关闭标签页），其余会话不受影响
    pub fn remove_session(&mut self, session_id: &str) -> CleanResult<()> {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != session_id);
        if self.sessions.len() == before {
            return Err(CleanError::SessionNotFound(session_id.to_string()));
        }
        Ok(())
    }

    /// 导出会话为 (清洗后的文件名, CSV 文本)
    pub fn export(&self, session_id: &str) -> CleanResult<(String, String)> {
        let session = self.session(session_id)?;
        let file_name = sanitize_export_filename(&session.name);
        let csv = CsvExporter::to_csv(&session.data, &session.columns);
        Ok((file_name, csv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("contacts")
            .suffix(".csv")
            .tempfile()
            .unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_ingest_file_creates_session() {
        let mut manager = SessionManager::new(CleanerLimits::default());
        let file = temp_csv("Name,Email\nJane Smith,jane@x.com\n");

        let session = manager.ingest_file(file.path()).unwrap();
        assert_eq!(session.data.len(), 1);
        assert_eq!(session.stats.valid, 1);
        assert!(session.name.ends_with(".csv"));
        assert_eq!(manager.sessions().len(), 1);
    }

    #[test]
    fn test_oversized_file_rejected_before_parse() {
        let limits = CleanerLimits {
            max_file_size_bytes: 10,
            ..CleanerLimits::default()
        };
        let mut manager = SessionManager::new(limits);
        // 故意写入格式损坏的超限内容: 若先解析会报解析错而不是大小错
        let file = temp_csv("\"broken quote,,,\nNa,me,Email oversized content\n");

        let result = manager.ingest_file(file.path());
        assert!(matches!(result, Err(CleanError::FileTooLarge { .. })));
        assert!(manager.sessions().is_empty());
    }

    #[test]
    fn test_max_files_cap() {
        let limits = CleanerLimits {
            max_files: 1,
            ..CleanerLimits::default()
        };
        let mut manager = SessionManager::new(limits);

        manager
            .ingest_rows("a.csv", vec![vec!["email".into()], vec!["a@x.com".into()]])
            .unwrap();
        let result =
            manager.ingest_rows("b.csv", vec![vec!["email".into()], vec!["b@x.com".into()]]);
        assert!(matches!(result, Err(CleanError::TooManyFiles { max: 1 })));
    }

    #[test]
    fn test_suspicious_content_rejected_without_session() {
        let mut manager = SessionManager::new(CleanerLimits::default());
        let result = manager.ingest_rows(
            "bad.csv",
            vec![
                vec!["email".into()],
                vec!["<script>alert(1)</script>".into()],
            ],
        );

        assert!(matches!(result, Err(CleanError::SuspiciousContent { .. })));
        assert!(manager.sessions().is_empty());
    }

    #[test]
    fn test_remove_session_isolated() {
        let mut manager = SessionManager::new(CleanerLimits::default());
        let id_a = manager
            .ingest_rows("a.csv", vec![vec!["email".into()], vec!["a@x.com".into()]])
            .unwrap()
            .id
            .clone();
        let id_b = manager
            .ingest_rows("b.csv", vec![vec!["email".into()], vec!["b@x.com".into()]])
            .unwrap()
            .id
            .clone();

        manager.remove_session(&id_a).unwrap();
        assert!(manager.session(&id_a).is_err());
        assert_eq!(manager.session(&id_b).unwrap().name, "b.csv");

        let result = manager.remove_session("missing");
        assert!(matches!(result, Err(CleanError::SessionNotFound(_))));
    }

    #[test]
    fn test_export_sanitizes_filename() {
        let mut manager = SessionManager::new(CleanerLimits::default());
        let id = manager
            .ingest_rows(
                "my list.csv",
                vec![
                    vec!["name".into(), "email".into()],
                    vec!["Jane".into(), "jane@x.com".into()],
                ],
            )
            .unwrap()
            .id
            .clone();

        let (file_name, csv) = manager.export(&id).unwrap();
        assert_eq!(file_name, "my_list.csv");
        assert!(csv.starts_with("Name,Email Only,First Name,Last Name,Email,Company\n"));
        assert!(csv.contains("jane@x.com"));
    }
}
