use reqwest::StatusCode;

/// 访问管理服务器 REST 接口时的错误
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("failed to connect to admin server: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("admin server returned status: {0}")]
    Status(StatusCode),

    #[error("failed to read server runtimes body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse server runtimes: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 枚举进程表时的错误
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("process enumeration is not supported on this platform")]
    Unsupported,

    #[error("process table is empty")]
    EmptyProcessTable,

    #[error("process enumeration task failed: {0}")]
    Join(String),
}
