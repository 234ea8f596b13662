// ==========================================
// 邮件名单清洗工具 - 清洗管道 Trait
// ==========================================
// 职责: 定义提取与清洗管道各阶段的接口（不包含实现）
// 红线: 全部为同步纯操作; 不持有跨文件可变状态
// ==========================================

use crate::cleaner::error::CleanResult;
use crate::cleaner::name_extractor::ExtractedName;
use crate::domain::{ContactRecord, ProcessingStats};
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件 → 二维原始行（表头在第 0 行）
// 实现者: CsvFileParser, ExcelFileParser
// 注意: 不丢弃全空白行（空行统一由记录构建器的"无邮箱"步骤丢弃）
pub trait FileParser: Send + Sync {
    /// 解析文件为二维原始行
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<Vec<String>>): 行列表，第 0 行为表头
    /// - Err: 文件读取错误、格式错误
    fn parse_to_rows(&self, file_path: &Path) -> CleanResult<Vec<Vec<String>>>;
}

// ==========================================
// FieldSanitizer Trait
// ==========================================
// 用途: 单元格级清洗（公式注入防护/HTML 剥离/截断/NUL 去除）
// 实现者: FieldSanitizerImpl
pub trait FieldSanitizer: Send + Sync {
    /// 清洗单个原始单元格值
    ///
    /// 纯函数; 对不含危险 HTML 片段的输入满足幂等性
    fn sanitize(&self, value: &str) -> String;
}

// ==========================================
// EmailValidator Trait
// ==========================================
// 用途: 候选邮箱的格式 + 安全校验
// 实现者: EmailValidatorImpl
pub trait EmailValidator: Send + Sync {
    /// 校验候选邮箱
    ///
    /// # 返回
    /// - true: 小写 trim 后通过格式与安全检查
    /// - false: 空值、格式非法、命中可疑模式或超长
    fn is_valid_email(&self, value: &str) -> bool;
}

// ==========================================
// FileValidator Trait
// ==========================================
// 用途: 解析前的元数据校验 + 解析后的内容校验
// 实现者: FileValidatorImpl
pub trait FileValidator: Send + Sync {
    /// 前置校验（解析之前，仅依赖文件名与声明大小）
    ///
    /// # 拒绝条件
    /// - 字节数超过 max_file_size_bytes
    /// - 扩展名不在允许列表
    /// - 文件名含 NUL / ".." / "/" / "\"
    fn validate_metadata(&self, file_name: &str, size_bytes: u64) -> CleanResult<()>;

    /// 内容校验（解析之后）
    ///
    /// # 拒绝条件
    /// - 数据行数超过 max_rows
    /// - 前 100 行抽样中出现危险内容模式
    fn validate_content(&self, rows: &[Vec<String>]) -> CleanResult<()>;
}

// ==========================================
// NameExtractor Trait
// ==========================================
// 用途: 从邮箱 local-part 启发式推断姓名
// 实现者: NameExtractorImpl
pub trait NameExtractor: Send + Sync {
    /// 从邮箱提取姓名
    ///
    /// # 返回
    /// - ExtractedName: 提取失败时三个字段均为空串
    ///
    /// 尽力而为的启发式; 宁可空手而归，绝不为通用邮箱别名捏造姓名
    fn extract_from_email(&self, email: &str) -> ExtractedName;
}

// ==========================================
// RecordBuilder Trait
// ==========================================
// 用途: 核心管道 —— 二维原始行 → 规范联系人记录 + 统计
// 实现者: RecordBuilderImpl
pub trait RecordBuilder: Send + Sync {
    /// 构建联系人记录
    ///
    /// # 参数
    /// - rows: 二维原始行，第 0 行为表头
    ///
    /// # 返回
    /// - (records, stats): 去重后的记录集与一次性统计
    ///
    /// # 管道步骤（逐行）
    /// 1. 表头映射 + 逐单元格清洗（计入 stats.sanitized）
    /// 2. 别名定位候选字段（email/first/last/name/company）
    /// 3. 无邮箱 → 整行丢弃
    /// 4. 规范化后校验失败 → stats.invalid，丢弃
    /// 5. 本文件内重复 → stats.duplicates，丢弃（先见者保留）
    /// 6. 组合 name 拆分 first/last
    /// 7. 仍无姓名 → 邮箱启发式（stats.names_extracted）
    /// 8. 产出记录（字段二次清洗防御）
    fn build_records(&self, rows: &[Vec<String>]) -> (Vec<ContactRecord>, ProcessingStats);
}
