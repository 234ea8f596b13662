// ==========================================
// 邮件名单清洗工具 - 命令行入口
// ==========================================
// 用法: email-list-cleaner <输入文件> [输出文件]
// 流程: 摄取（校验+解析+清洗+去重）→ 打印统计 → 导出 CSV
// ==========================================

use email_list_cleaner::{i18n, logging, CleanerLimits, SessionManager};
use std::path::PathBuf;
use std::process;

fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", email_list_cleaner::APP_NAME);
    tracing::info!("系统版本: {}", email_list_cleaner::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("用法: {} <输入文件> [输出文件]", args[0]);
        eprintln!("支持格式: .csv / .xlsx / .xls");
        process::exit(2);
    }

    let input = PathBuf::from(&args[1]);
    let output = args.get(2).map(PathBuf::from);

    if let Err(e) = run(&input, output) {
        tracing::error!("处理失败: {}", e);
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn run(
    input: &std::path::Path,
    output: Option<PathBuf>,
) -> email_list_cleaner::CleanResult<()> {
    let mut manager = SessionManager::new(CleanerLimits::default());

    let session_id = manager.ingest_file(input)?.id.clone();
    let session = manager.session(&session_id)?;

    // 打印处理统计（跟随当前 locale）
    let stats = &session.stats;
    println!(
        "{}",
        i18n::t_with_args(
            "stats.summary",
            &[
                ("total", &stats.total.to_string()),
                ("valid", &stats.valid.to_string()),
                ("invalid", &stats.invalid.to_string()),
                ("duplicates", &stats.duplicates.to_string()),
                ("sanitized", &stats.sanitized.to_string()),
                ("names", &stats.names_extracted.to_string()),
            ],
        )
    );

    let (default_name, csv) = manager.export(&session_id)?;
    let output_path = output.unwrap_or_else(|| PathBuf::from(default_name));
    std::fs::write(&output_path, csv)?;

    tracing::info!("导出完成: {}", output_path.display());
    println!("{} -> {}", i18n::t("common.done"), output_path.display());
    Ok(())
}
