use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION};

/// `Basic <base64(username:password)>`
pub fn basic_auth_value(username: &str, password: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let encoded = STANDARD.encode(format!("{}:{}", username, password));
    let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))?;
    value.set_sensitive(true);
    Ok(value)
}

/// 构建对每个请求都附带 Basic 认证头的 HTTP 客户端
///
/// 不做重试，也不定制 TLS；传输层错误原样返回给调用方。
pub fn authenticated_client(
    username: &str,
    password: &str,
    timeout: Duration,
) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, basic_auth_value(username, password)?);

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_value() {
        let value = basic_auth_value("weblogic", "welcome1").unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic d2VibG9naWM6d2VsY29tZTE=");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_empty_password_still_encodes() {
        let value = basic_auth_value("admin", "").unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic YWRtaW46");
    }

    #[test]
    fn test_client_builds() {
        assert!(authenticated_client("weblogic", "welcome1", Duration::from_secs(10)).is_ok());
    }
}
