/// 日志工具模块
///
/// 提供日志初始化、运行日志文件与格式化辅助函数
use std::fs;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志（RUST_LOG 可覆盖，默认 info）
///
/// 重复调用不报错，方便在多个测试里各自初始化
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化运行日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
///
/// # 返回
/// 返回是否成功初始化
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n测验答题日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `course_id`: 目标课程ID
pub fn log_startup(course_id: u32) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 在线测验答题模式");
    info!("📚 目标课程: {}", course_id);
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
///
/// # 参数
/// - `quiz_title`: 测验标题
/// - `total`: 题目总数
pub fn log_quiz_ready(quiz_title: &str, total: usize) {
    info!("✓ 测验就绪: {}", quiz_title);
    info!("📋 共 {} 道题，答完当前题方可前进\n", total);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
