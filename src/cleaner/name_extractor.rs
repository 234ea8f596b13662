// ==========================================
// 邮件名单清洗工具 - 姓名提取器实现
// ==========================================
// 职责: 从邮箱 local-part 启发式推断 first/last name
// 红线: 尽力而为，允许漏提; 通用邮箱别名绝不捏造姓名
// ==========================================

use crate::cleaner::cleaner_trait::NameExtractor as NameExtractorTrait;
use crate::cleaner::name_data::{COMMON_FIRST_NAMES, GENERIC_MAILBOXES};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// 尾部数字（john.doe99 → john.doe）
static TRAILING_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+$").unwrap());

// 短别名: 1-2 个字母后跟数字（jd123 之类的缩写信箱，非个人姓名）
static SHORT_ALIAS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{1,2}\d+$").unwrap());

// 分隔符优先级: 点 → 下划线 → 连字符
const SEPARATORS: &[char] = &['.', '_', '-'];

// ==========================================
// ExtractedName - 提取结果
// ==========================================
// 提取失败时三个字段均为空串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedName {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl ExtractedName {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
    }
}

// ==========================================
// NameExtractor 实现
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct NameExtractor;

impl NameExtractorTrait for NameExtractor {
    fn extract_from_email(&self, email: &str) -> ExtractedName {
        // 1. 取 local-part
        let local = match email.trim().to_lowercase().split('@').next() {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => return ExtractedName::default(),
        };

        // 2. 剥离尾部数字
        let cleaned = TRAILING_DIGITS_RE.replace(&local, "").into_owned();
        if cleaned.is_empty() {
            return ExtractedName::default();
        }

        // 3. 机构信箱/短别名 → 非个人姓名，放弃
        //    短别名模式在剥离数字之前的原始 local-part 上测试
        if GENERIC_MAILBOXES.contains(&cleaned.as_str()) || SHORT_ALIAS_RE.is_match(&local) {
            return ExtractedName::default();
        }

        // 4. 按第一个出现的分隔符拆分（优先级: . _ -）
        let parts: Vec<String> = match SEPARATORS.iter().find(|sep| cleaned.contains(**sep)) {
            Some(sep) => cleaned.split(*sep).map(|s| s.to_string()).collect(),
            // 5. 无分隔符: 尝试常见名前缀拆分，否则整体作为单一词
            None => split_by_known_first_name(&cleaned),
        };

        // 6. 丢弃长度 ≤ 1 的部分（无法使用的缩写）
        let parts: Vec<String> = parts.into_iter().filter(|p| p.len() > 1).collect();

        // 7. 无可用部分 → 空结果
        if parts.is_empty() {
            return ExtractedName::default();
        }

        // 8. 逐部分首字母大写并组装
        let parts: Vec<String> = parts.iter().map(|p| capitalize(p)).collect();
        let first_name = parts[0].clone();
        let last_name = parts[1..].join(" ");
        let full_name = parts.join(" ");

        ExtractedName {
            first_name,
            last_name,
            full_name,
        }
    }
}

/// 无分隔符 local-part 的常见名前缀拆分
///
/// 按名字长度降序匹配（最长优先），避免短名吞掉长名前缀;
/// 仅当剩余部分非空时才拆分
fn split_by_known_first_name(cleaned: &str) -> Vec<String> {
    let mut candidates: Vec<&str> = COMMON_FIRST_NAMES.to_vec();
    candidates.sort_unstable_by_key(|n| std::cmp::Reverse(n.len()));

    for name in candidates {
        if cleaned.len() > name.len() && cleaned.starts_with(name) {
            return vec![name.to_string(), cleaned[name.len()..].to_string()];
        }
    }
    vec![cleaned.to_string()]
}

/// 首字母大写，其余小写
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
