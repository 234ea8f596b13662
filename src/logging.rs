// ==========================================
// 邮件名单清洗工具 - 日志系统
// ==========================================
// 工具: tracing + tracing-subscriber
// 级别由 RUST_LOG 环境变量控制，默认 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统（进程入口调用一次）
///
/// # 环境变量
/// - RUST_LOG: 过滤器，如 RUST_LOG=debug 或 RUST_LOG=email_list_cleaner=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 测试环境的日志初始化
///
/// debug 级别 + 测试捕获写入器; 可重复调用（后续调用为空操作）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
