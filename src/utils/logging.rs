/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::outcome::ProcessOutcome;

/// 初始化日志订阅器
///
/// 日志级别由 RUST_LOG 控制，默认 info
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `api_base_url`: 处理服务地址
pub fn log_startup(api_base_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文档处理客户端");
    info!("🌐 服务地址: {}", api_base_url);
    info!(
        "⏱ 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 打印处理结果
///
/// # 参数
/// - `outcome`: 处理服务返回的结果描述
pub fn log_outcome(outcome: &ProcessOutcome) {
    info!("{}", "─".repeat(60));
    info!("📊 处理结果");
    info!("原始大小: {}", format_file_size(outcome.original_size));
    info!(
        "处理后大小: {}",
        format_file_size(outcome.effective_compressed_size())
    );
    info!("压缩率: {:.1}%", outcome.reduction_percent());
    if outcome.used_original {
        info!("💡 服务未找到压缩收益，已原样返回输入文件");
    }
    if let Some(name) = &outcome.file_name {
        info!("建议文件名: {}", name);
    }
    info!("下载地址: {}", outcome.url);
    info!("{}", "─".repeat(60));
}

/// 格式化文件大小用于显示
///
/// # 参数
/// - `bytes`: 字节数
///
/// # 返回
/// 返回 1024 进制、最多两位小数的可读大小
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let i = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let i = i.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(i as i32);

    let mut text = format!("{:.2}", value);
    // 去掉无意义的尾随零
    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{} {}", text, UNITS[i])
}
