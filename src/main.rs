use anyhow::Result;
use chhotipdf_client::app::{App, RunOptions};
use chhotipdf_client::config::Config;
use chhotipdf_client::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 解析命令行参数（跳过程序名）
    let options = RunOptions::parse(std::env::args().skip(1))?;

    // 初始化并运行应用
    App::initialize(config)?.run(options).await?;

    Ok(())
}
