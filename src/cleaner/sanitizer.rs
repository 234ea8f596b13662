// ==========================================
// 邮件名单清洗工具 - 字段清洗器实现
// ==========================================
// 职责: 单元格级清洗 —— NUL 去除 / 公式注入防护 / 截断 / HTML 剥离
// 顺序固定: trim → 去 NUL → 公式前缀 → 截断 → 剥离危险标签
// ==========================================

use crate::cleaner::cleaner_trait::FieldSanitizer as FieldSanitizerTrait;
use crate::config::limits::DEFAULT_MAX_CELL_LENGTH;
use once_cell::sync::Lazy;
use regex::Regex;

// 公式注入触发字符（被电子表格软件解释为公式的起始字符）
const FORMULA_PREFIXES: &[char] = &['=', '+', '-', '@', '\t', '\r'];

// 危险标签剥离规则（大小写不敏感，体部非贪婪、可跨行）
static SCRIPT_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static IFRAME_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<iframe\b[^>]*>.*?</iframe>").unwrap());
static OBJECT_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<object\b[^>]*>.*?</object>").unwrap());
static EMBED_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<embed\b[^>]*>").unwrap());

// ==========================================
// FieldSanitizer 实现
// ==========================================
#[derive(Debug, Clone)]
pub struct FieldSanitizer {
    /// 单元格截断长度（字符数）
    max_cell_length: usize,
}

impl Default for FieldSanitizer {
    fn default() -> Self {
        Self {
            max_cell_length: DEFAULT_MAX_CELL_LENGTH,
        }
    }
}

impl FieldSanitizer {
    pub fn new(max_cell_length: usize) -> Self {
        Self { max_cell_length }
    }
}

impl FieldSanitizerTrait for FieldSanitizer {
    fn sanitize(&self, value: &str) -> String {
        // 1. trim + 去除内嵌 NUL
        let mut result: String = value.trim().replace('\0', "");

        // 2. 公式注入防护: 以触发字符开头时前缀单引号
        if result
            .chars()
            .next()
            .is_some_and(|c| FORMULA_PREFIXES.contains(&c))
        {
            result.insert(0, '\'');
        }

        // 3. 截断（在前缀之后执行，按字符数）
        if result.chars().count() > self.max_cell_length {
            result = result.chars().take(self.max_cell_length).collect();
        }

        // 4. 剥离危险 HTML 片段
        let result = SCRIPT_BLOCK_RE.replace_all(&result, "");
        let result = IFRAME_BLOCK_RE.replace_all(&result, "");
        let result = OBJECT_BLOCK_RE.replace_all(&result, "");
        let result = EMBED_TAG_RE.replace_all(&result, "");

        result.into_owned()
    }
}
