use delivery_server::{
    Config, Server, ServerState, init_logging, print_banner, setup_environment,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env
    setup_environment();

    // 2. 加载配置
    let config = Config::from_env()?;

    // 3. 日志 (控制台 + work_dir/logs 滚动文件)
    init_logging(&config)?;

    print_banner();

    tracing::info!("Delivery Server starting...");

    // 4. 初始化服务器状态 (数据库、JWT)
    let state = ServerState::initialize(&config).await?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
