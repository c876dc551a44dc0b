use std::time::Duration;

use reqwest::{Response, StatusCode};

use crate::error::AdminError;
use crate::models::ServerRuntimes;
use crate::services::auth::authenticated_client;

pub const SERVER_RUNTIMES_PATH: &str = "/management/weblogic/latest/domainRuntime/serverRuntimes";

/// 单次请求超时
pub const ADMIN_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 管理服务器 REST 客户端
pub struct AdminClient {
    http: reqwest::Client,
    runtimes_url: String,
}

impl AdminClient {
    pub fn new(admin_url: &str, username: &str, password: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http: authenticated_client(username, password, ADMIN_REQUEST_TIMEOUT)?,
            runtimes_url: format!("{}{}", admin_url.trim_end_matches('/'), SERVER_RUNTIMES_PATH),
        })
    }

    pub fn runtimes_url(&self) -> &str {
        &self.runtimes_url
    }

    /// GET serverRuntimes，只有 200 才算管理服务器 up
    ///
    /// 返回的响应体尚未读取，交给 [`decode_runtimes`] 解析。
    pub async fn server_runtimes(&self) -> Result<Response, AdminError> {
        let response = self
            .http
            .get(&self.runtimes_url)
            .send()
            .await
            .map_err(AdminError::Transport)?;

        if response.status() != StatusCode::OK {
            return Err(AdminError::Status(response.status()));
        }

        Ok(response)
    }
}

pub async fn decode_runtimes(response: Response) -> Result<ServerRuntimes, AdminError> {
    let body = response.bytes().await.map_err(AdminError::Body)?;
    Ok(serde_json::from_slice(&body)?)
}
