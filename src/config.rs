use std::fmt;

/// 校验后的 exporter 配置，启动时构建一次，之后只读
#[derive(Clone)]
pub struct ExporterConfig {
    /// 管理服务器基础地址（已去掉末尾的 `/`）
    pub admin_url: String,
    pub username: String,
    pub password: String,
    /// 被监控的 server 名称，例如 `AdminServer`
    pub server_name: String,
    pub address: String,
    pub port: u16,
}

impl ExporterConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

// 密码不进日志
impl fmt::Debug for ExporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExporterConfig")
            .field("admin_url", &self.admin_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("server_name", &self.server_name)
            .field("address", &self.address)
            .field("port", &self.port)
            .finish()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required flag --{0}")]
    MissingFlag(&'static str),
}

/// 必填参数不能为空（空白也算空）
pub fn require(flag: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingFlag(flag));
    }
    Ok(value.to_string())
}
