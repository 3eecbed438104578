use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DB_NAMESPACE | delivery | SurrealDB namespace |
/// | DB_DATABASE | marketplace | SurrealDB database |
/// | ENVIRONMENT | development | 运行环境 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// JWT 相关变量见 [`JwtConfig`]。日志变量 (`LOG_LEVEL`, `LOG_JSON`, `LOG_DIR`)
/// 由 [`crate::init_logging`] 在配置加载后读取, `LOG_DIR` 默认为 `<WORK_DIR>/logs`。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/delivery HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_database: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// JWT 密钥无效 (或生产环境缺失) 时返回错误
    pub fn from_env() -> Result<Self> {
        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "delivery".into()),
            db_database: std::env::var("DB_DATABASE").unwrap_or_else(|_| "marketplace".into()),
            jwt,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        })
    }

    /// 使用自定义工作目录和 JWT 配置构造
    ///
    /// 常用于测试场景，不读取 JWT 环境变量
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16, jwt: JwtConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port,
            db_namespace: "delivery".into(),
            db_database: "marketplace".into(),
            jwt,
            environment: "test".into(),
            shutdown_timeout_ms: 1000,
        }
    }

    /// 数据库目录: `<work_dir>/database`
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录: `<work_dir>/logs`
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_jwt() -> JwtConfig {
        JwtConfig::with_secret("0123456789abcdef0123456789abcdef")
    }

    #[test]
    fn overrides_set_work_dir_layout() {
        let config = Config::with_overrides("/tmp/delivery", 8080, test_jwt());
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_dir(), PathBuf::from("/tmp/delivery/database"));
        assert_eq!(config.logs_dir(), PathBuf::from("/tmp/delivery/logs"));
        assert_eq!(config.environment, "test");
    }

    #[test]
    fn ensure_work_dir_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let work_dir = tmp.path().join("work");
        let config = Config::with_overrides(work_dir.to_string_lossy(), 0, test_jwt());
        config.ensure_work_dir_structure().unwrap();
        assert!(config.database_dir().is_dir());
        assert!(config.logs_dir().is_dir());
    }
}
