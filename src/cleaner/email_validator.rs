// ==========================================
// 邮件名单清洗工具 - 邮箱校验器实现
// ==========================================
// 职责: 候选邮箱的格式校验 + 安全校验
// 红线: 纯函数，无副作用
// ==========================================

use crate::cleaner::cleaner_trait::EmailValidator as EmailValidatorTrait;
use once_cell::sync::Lazy;
use regex::Regex;

/// 邮箱长度上限（RFC 5321 路径上限）
pub const MAX_EMAIL_LENGTH: usize = 254;

// 基础格式: 非空白非 @ 的 local-part 与域名，域名至少含一个点
static EMAIL_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// 可疑模式: 命中任意一条即拒绝（大小写不敏感）
static SUSPICIOUS_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)javascript:",
        r"(?i)<script",
        r"(?i)\bexec\b",
        r"(?i)\beval\b",
        r"(?i)<[^>]+>",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// ==========================================
// EmailValidator 实现
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidatorTrait for EmailValidator {
    fn is_valid_email(&self, value: &str) -> bool {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }
        if normalized.len() > MAX_EMAIL_LENGTH {
            return false;
        }
        if !EMAIL_FORMAT_RE.is_match(&normalized) {
            return false;
        }
        !SUSPICIOUS_RES.iter().any(|re| re.is_match(&normalized))
    }
}
