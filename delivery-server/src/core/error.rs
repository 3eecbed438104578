use thiserror::Error;

/// 服务器启动/运行错误
///
/// 请求级错误使用 [`crate::AppError`]；这里只覆盖进程生命周期内的失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器生命周期 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
