// ==========================================
// 邮件名单清洗工具 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 产出: 二维原始行（表头在第 0 行）
// 注意: 不丢弃空白行，空行由记录构建器的"无邮箱"步骤统一丢弃
// ==========================================

use crate::cleaner::cleaner_trait::FileParser;
use crate::cleaner::error::{CleanError, CleanResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvFileParser;

impl FileParser for CsvFileParser {
    fn parse_to_rows(&self, file_path: &Path) -> CleanResult<Vec<Vec<String>>> {
        if !file_path.exists() {
            return Err(CleanError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头作为第 0 行原样保留
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelFileParser;

impl FileParser for ExcelFileParser {
    fn parse_to_rows(&self, file_path: &Path) -> CleanResult<Vec<Vec<String>>> {
        if !file_path.exists() {
            return Err(CleanError::FileNotFound(file_path.display().to_string()));
        }

        // xlsx 与 xls 统一交给 calamine 自动识别
        let mut workbook =
            open_workbook_auto(file_path).map_err(|e| CleanError::ExcelParseError(e.to_string()))?;

        // 只读第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| CleanError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| CleanError::ExcelParseError(e.to_string()))?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        Ok(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> CleanResult<Vec<Vec<String>>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvFileParser.parse_to_rows(path),
            "xlsx" | "xls" => ExcelFileParser.parse_to_rows(path),
            _ => Err(CleanError::UnsupportedFormat(ext)),
        }
    }
}
