// ==========================================
// 邮件名单清洗工具 - 记录构建器实现
// ==========================================
// 职责: 核心管道 —— 二维原始行 → 规范联系人记录 + 统计
// 红线: 姓名回退优先级固定为 组合 name 拆分 → 邮箱启发式，不得反转
// ==========================================

use crate::cleaner::cleaner_trait::{
    EmailValidator, FieldSanitizer, NameExtractor, RecordBuilder as RecordBuilderTrait,
};
use crate::cleaner::email_validator::EmailValidator as EmailValidatorImpl;
use crate::cleaner::name_extractor::NameExtractor as NameExtractorImpl;
use crate::cleaner::sanitizer::FieldSanitizer as FieldSanitizerImpl;
use crate::config::CleanerLimits;
use crate::domain::{ContactRecord, ProcessingStats};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

// ===== 候选字段的表头别名（小写，精确匹配）=====
const EMAIL_ALIASES: &[&str] = &["email", "e-mail", "email address", "mail"];
const FIRST_NAME_ALIASES: &[&str] = &["first name", "firstname", "first", "fname"];
const LAST_NAME_ALIASES: &[&str] = &["last name", "lastname", "last", "lname", "surname"];
const FULL_NAME_ALIASES: &[&str] = &["name", "full name", "fullname", "contact name"];
const COMPANY_ALIASES: &[&str] = &["company", "company name", "organization", "business"];

// ==========================================
// RecordBuilder 实现
// ==========================================
// 组件按 trait 接口注入（清洗器/邮箱校验器/姓名提取器）
pub struct RecordBuilder {
    sanitizer: Box<dyn FieldSanitizer>,
    email_validator: Box<dyn EmailValidator>,
    name_extractor: Box<dyn NameExtractor>,
}

impl RecordBuilder {
    pub fn new(
        sanitizer: Box<dyn FieldSanitizer>,
        email_validator: Box<dyn EmailValidator>,
        name_extractor: Box<dyn NameExtractor>,
    ) -> Self {
        Self {
            sanitizer,
            email_validator,
            name_extractor,
        }
    }

    /// 按默认组件构建（限额仅影响清洗器的截断长度）
    pub fn with_limits(limits: &CleanerLimits) -> Self {
        Self::new(
            Box::new(FieldSanitizerImpl::new(limits.max_cell_length)),
            Box::new(EmailValidatorImpl),
            Box::new(NameExtractorImpl),
        )
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::with_limits(&CleanerLimits::default())
    }
}

impl RecordBuilderTrait for RecordBuilder {
    fn build_records(&self, rows: &[Vec<String>]) -> (Vec<ContactRecord>, ProcessingStats) {
        let mut stats = ProcessingStats::default();

        // 空文件或仅表头 → 空结果，统计全零
        if rows.is_empty() {
            return (Vec::new(), stats);
        }

        // 表头: 小写 + trim，派生一次
        let headers: Vec<String> = rows[0]
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        stats.total = rows.len() - 1;

        let mut records = Vec::new();
        let mut seen_emails: HashSet<String> = HashSet::new();

        for row in &rows[1..] {
            // 1. 表头映射 + 逐单元格清洗
            let mut row_data: HashMap<&str, String> = HashMap::new();
            for (idx, header) in headers.iter().enumerate() {
                let raw = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                let cleaned = self.sanitizer.sanitize(raw);
                if cleaned != raw {
                    stats.sanitized += 1;
                }
                row_data.insert(header.as_str(), cleaned);
            }

            // 2. 别名定位候选字段
            let email_raw = find_by_alias(&row_data, &headers, EMAIL_ALIASES)
                .or_else(|| find_email_fallback(&row_data, &headers));

            // 3. 无邮箱 → 整行丢弃（全空白行也在此处落地）
            let email_raw = match email_raw {
                Some(e) => e,
                None => continue,
            };

            // 4. 规范化 + 校验
            let email = email_raw.trim().to_lowercase();
            if !self.email_validator.is_valid_email(&email) {
                stats.invalid += 1;
                continue;
            }

            // 5. 本文件内去重（先见者保留）
            if !seen_emails.insert(email.clone()) {
                stats.duplicates += 1;
                continue;
            }

            let mut first_name =
                find_by_alias(&row_data, &headers, FIRST_NAME_ALIASES).unwrap_or_default();
            let mut last_name =
                find_by_alias(&row_data, &headers, LAST_NAME_ALIASES).unwrap_or_default();
            let mut full_name =
                find_by_alias(&row_data, &headers, FULL_NAME_ALIASES).unwrap_or_default();
            let company = find_by_alias(&row_data, &headers, COMPANY_ALIASES).unwrap_or_default();

            // 6. 组合 name 拆分（first/last 均缺失时）
            if !full_name.is_empty() && first_name.is_empty() && last_name.is_empty() {
                let mut tokens = full_name.split_whitespace();
                first_name = tokens.next().unwrap_or("").to_string();
                last_name = tokens.collect::<Vec<_>>().join(" ");
            }

            // 7. 仍无任何姓名 → 邮箱启发式回退
            if first_name.is_empty() && last_name.is_empty() && full_name.is_empty() {
                let extracted = self.name_extractor.extract_from_email(&email);
                if !extracted.is_empty() {
                    first_name = extracted.first_name;
                    last_name = extracted.last_name;
                    full_name = extracted.full_name;
                    stats.names_extracted += 1;
                }
            }

            // 显示姓名: 组合 name 优先，否则由 first/last 拼接
            let name = if full_name.is_empty() {
                format!("{} {}", first_name, last_name).trim().to_string()
            } else {
                full_name
            };

            // 8. 产出记录，文本字段二次清洗防御
            //    email 不再过公式前缀防护，否则以 '-' 开头的合法邮箱
            //    会被前缀破坏，违反"email 恒通过校验器"不变量
            records.push(ContactRecord {
                id: Uuid::new_v4().to_string(),
                name: self.sanitizer.sanitize(&name),
                email,
                first_name: self.sanitizer.sanitize(&first_name),
                last_name: self.sanitizer.sanitize(&last_name),
                company: self.sanitizer.sanitize(&company),
                extra: HashMap::new(),
            });
        }

        stats.valid = records.len();
        (records, stats)
    }
}

/// 按别名表定位候选字段（取第一个存在且非空的别名列）
fn find_by_alias(
    row_data: &HashMap<&str, String>,
    headers: &[String],
    aliases: &[&str],
) -> Option<String> {
    for alias in aliases {
        if headers.iter().any(|h| h == alias) {
            if let Some(value) = row_data.get(alias) {
                if !value.is_empty() {
                    return Some(value.clone());
                }
            }
        }
    }
    None
}

/// 邮箱回退扫描: 无邮箱表头时，按表头顺序取第一个含 '@' 的值
fn find_email_fallback(row_data: &HashMap<&str, String>, headers: &[String]) -> Option<String> {
    for header in headers {
        if let Some(value) = row_data.get(header.as_str()) {
            if value.contains('@') {
                return Some(value.clone());
            }
        }
    }
    None
}
