//! 日志工具模块
//!
//! 提供 tracing 初始化和运行日志的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::WorkflowState;

/// 初始化 tracing 日志
///
/// 日志级别通过 `RUST_LOG` 环境变量控制，默认 `info`。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化运行日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n关键词工作流运行日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(base_url: &str, extractor_model: &str, max_retries: u32) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文献关键词提取工作流");
    info!("🌐 API 端点: {}", base_url);
    info!("🤖 提取模型: {}", extractor_model);
    info!("🔁 修正上限: {}", max_retries);
    info!("{}", "=".repeat(60));
}

/// 将一次工作流的终态追加到运行日志文件（JSON 行）
///
/// # 参数
/// - `log_file_path`: 日志文件路径
/// - `state`: 工作流终态
pub fn append_run_record(log_file_path: &str, state: &WorkflowState) -> Result<()> {
    let record = serde_json::to_string(state)?;
    let line = format!(
        "[{}] {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        record
    );

    use std::io::Write;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("这是一段很长的中文文本内容", 5), "这是一段很...");
    }
}
