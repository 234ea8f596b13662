// ==========================================
// 邮件名单清洗工具 - 文件校验器实现
// ==========================================
// 职责: 解析前的元数据校验（大小/扩展名/文件名安全）
//       解析后的内容校验（行数上限/危险内容抽样）
// ==========================================

use crate::cleaner::cleaner_trait::FileValidator as FileValidatorTrait;
use crate::cleaner::error::{CleanError, CleanResult};
use crate::config::CleanerLimits;
use once_cell::sync::Lazy;
use regex::Regex;

/// 内容安全抽样的行数窗口
///
/// 仅检查前 100 行属于成本权衡，不是安全保证: 恶意内容可能位于
/// 窗口之外而通过校验。保留原行为，收紧窗口会改变可观察的接受/拒绝结果。
pub const SECURITY_SAMPLE_ROWS: usize = 100;

// 危险内容模式（对行的 JSON 序列化文本匹配，大小写不敏感）
static DANGEROUS_CONTENT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)<script",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?i)<iframe",
        r"(?i)<object",
        r"(?i)<embed",
        r"(?i)vbscript:",
        r"(?i)data:",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// ==========================================
// FileValidator 实现
// ==========================================
#[derive(Debug, Clone)]
pub struct FileValidator {
    limits: CleanerLimits,
}

impl FileValidator {
    pub fn new(limits: CleanerLimits) -> Self {
        Self { limits }
    }
}

impl Default for FileValidator {
    fn default() -> Self {
        Self::new(CleanerLimits::default())
    }
}

impl FileValidatorTrait for FileValidator {
    fn validate_metadata(&self, file_name: &str, size_bytes: u64) -> CleanResult<()> {
        if size_bytes > self.limits.max_file_size_bytes {
            return Err(CleanError::FileTooLarge {
                size: size_bytes,
                max: self.limits.max_file_size_bytes,
            });
        }

        // 文件名安全: 禁止 NUL 与路径穿越片段
        if file_name.contains('\0')
            || file_name.contains("..")
            || file_name.contains('/')
            || file_name.contains('\\')
        {
            return Err(CleanError::UnsafeFilename(file_name.to_string()));
        }

        if !self.limits.extension_allowed(file_name) {
            return Err(CleanError::UnsupportedFormat(file_name.to_string()));
        }

        Ok(())
    }

    fn validate_content(&self, rows: &[Vec<String>]) -> CleanResult<()> {
        // 数据行数上限（不含表头）
        let data_rows = rows.len().saturating_sub(1);
        if data_rows > self.limits.max_rows {
            return Err(CleanError::TooManyRows {
                rows: data_rows,
                max: self.limits.max_rows,
            });
        }

        // 危险内容抽样: 逐行 JSON 序列化后匹配模式表
        // 报告的行号按 1 起算（表头为第 1 行），面向用户可读
        for (idx, row) in rows.iter().take(SECURITY_SAMPLE_ROWS).enumerate() {
            let serialized = serde_json::to_string(row)
                .map_err(|e| CleanError::InternalError(e.to_string()))?;
            if DANGEROUS_CONTENT_RES
                .iter()
                .any(|re| re.is_match(&serialized))
            {
                return Err(CleanError::SuspiciousContent { row: idx + 1 });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::cleaner_trait::FileValidator as _;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_metadata_size_limit() {
        let validator = FileValidator::default();
        assert!(validator.validate_metadata("a.csv", 10 * 1024 * 1024).is_ok());
        assert!(matches!(
            validator.validate_metadata("a.csv", 10 * 1024 * 1024 + 1),
            Err(CleanError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_metadata_extension() {
        let validator = FileValidator::default();
        assert!(validator.validate_metadata("list.CSV", 100).is_ok());
        assert!(validator.validate_metadata("list.xlsx", 100).is_ok());
        assert!(matches!(
            validator.validate_metadata("list.txt", 100),
            Err(CleanError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_metadata_unsafe_filename() {
        let validator = FileValidator::default();
        for name in ["../a.csv", "a/b.csv", "a\\b.csv", "a\0.csv"] {
            assert!(
                matches!(
                    validator.validate_metadata(name, 100),
                    Err(CleanError::UnsafeFilename(_))
                ),
                "文件名: {:?}",
                name
            );
        }
    }

    #[test]
    fn test_content_row_limit() {
        let limits = CleanerLimits {
            max_rows: 2,
            ..CleanerLimits::default()
        };
        let validator = FileValidator::new(limits);

        let header = row(&["email"]);
        let ok_rows = vec![header.clone(), row(&["a@x.com"]), row(&["b@x.com"])];
        assert!(validator.validate_content(&ok_rows).is_ok());

        let too_many = vec![
            header,
            row(&["a@x.com"]),
            row(&["b@x.com"]),
            row(&["c@x.com"]),
        ];
        assert!(matches!(
            validator.validate_content(&too_many),
            Err(CleanError::TooManyRows { rows: 3, max: 2 })
        ));
    }

    #[test]
    fn test_content_dangerous_patterns() {
        let validator = FileValidator::default();
        let rows = vec![
            row(&["name", "email"]),
            row(&["<script>alert(1)</script>", "a@x.com"]),
        ];
        // 行号按 1 起算: 表头之后的第一行数据是第 2 行
        assert!(matches!(
            validator.validate_content(&rows),
            Err(CleanError::SuspiciousContent { row: 2 })
        ));

        // 表头本身命中时报第 1 行
        let rows = vec![row(&["<iframe>", "email"]), row(&["Jane", "a@x.com"])];
        assert!(matches!(
            validator.validate_content(&rows),
            Err(CleanError::SuspiciousContent { row: 1 })
        ));

        let rows = vec![row(&["name", "email"]), row(&["onclick = steal()", "a@x.com"])];
        assert!(validator.validate_content(&rows).is_err());

        let clean = vec![row(&["name", "email"]), row(&["Jane", "a@x.com"])];
        assert!(validator.validate_content(&clean).is_ok());
    }

    #[test]
    fn test_content_sampling_window() {
        // 恶意内容在抽样窗口之外时通过校验（保留的原行为）
        let validator = FileValidator::default();
        let mut rows = vec![row(&["email"])];
        for i in 0..SECURITY_SAMPLE_ROWS {
            rows.push(row(&[&format!("u{}@x.com", i)]));
        }
        rows.push(row(&["<script>late</script>"]));
        assert!(validator.validate_content(&rows).is_ok());
    }
}
