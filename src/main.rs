use anyhow::Result;
use take_quiz_submit::app::App;
use take_quiz_submit::config::Config;
use take_quiz_submit::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
