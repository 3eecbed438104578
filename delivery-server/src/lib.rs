//! Delivery Server - 外卖平台 REST 后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 文档存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **HTTP API** (`api`): 餐厅、分类、菜品、用户、订单接口
//!
//! # 模块结构
//!
//! ```text
//! delivery-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT、密码哈希、认证中间件
//! ├── db/            # SurrealDB 连接与仓储层
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装与请求日志
//! └── utils/         # 日志、输入校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 `.env` (如果存在)
pub fn setup_environment() {
    dotenv::dotenv().ok();
}

/// 按 `LOG_LEVEL` / `LOG_JSON` / `LOG_DIR` 初始化日志
///
/// `LOG_DIR` 未设置时写入 `<work_dir>/logs`
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL").ok();
    let json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok());
    let log_dir = std::env::var("LOG_DIR")
        .ok()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| config.logs_dir());

    init_logger_with_file(log_level.as_deref(), json, Some(log_dir.as_path()))
}

pub fn print_banner() {
    println!(
        r#"
    ____       ___
   / __ \___  / (_)   _____  _______  __
  / / / / _ \/ / / | / / _ \/ ___/ / / /
 / /_/ /  __/ / /| |/ /  __/ /  / /_/ /
/_____/\___/_/_/ |___/\___/_/   \__, /
                               /____/
    "#
    );
}
