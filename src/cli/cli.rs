use std::ffi::OsString;

use clap::Parser;

use crate::config::{require, ConfigError, ExporterConfig};

pub const USAGE: &str = "Usage: weblogic-exporter -admin-url <URL> -username <user> -password <pass> -server-name <name> [-port <port>]";

/// 兼容单横线写法的长参数（`-admin-url`），均需要一个值
const LONG_FLAGS: &[&str] = &["admin-url", "username", "password", "server-name", "port", "address"];

/// WebLogic Exporter - 管理服务器与进程参数监控 exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 管理服务器地址（例如 http://localhost:7001）
    #[arg(long, env = "WEBLOGIC_ADMIN_URL", default_value = "")]
    pub admin_url: String,

    /// 管理服务器用户名
    #[arg(long, env = "WEBLOGIC_USERNAME", default_value = "")]
    pub username: String,

    /// 管理服务器密码
    #[arg(long, env = "WEBLOGIC_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// 要监控的 server 名称（例如 AdminServer）
    #[arg(long, env = "WEBLOGIC_SERVER_NAME", default_value = "")]
    pub server_name: String,

    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 9255)]
    pub port: u16,

    /// 监听地址
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,
}

impl CommandArgs {
    /// 解析命令行，`-admin-url` 与 `--admin-url` 等价
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn into_config(self) -> Result<ExporterConfig, ConfigError> {
        let admin_url = require("admin-url", &self.admin_url)?;
        let username = require("username", &self.username)?;
        let password = require("password", &self.password)?;
        let server_name = require("server-name", &self.server_name)?;

        Ok(ExporterConfig {
            admin_url,
            username,
            password,
            server_name,
            address: self.address,
            port: self.port,
        })
    }
}

/// 把单横线长参数改写成双横线，参数值原样保留
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expects_value = false;

    for arg in args.into_iter().map(Into::into) {
        if expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            let rest = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            LONG_FLAGS.contains(&name).then(|| (format!("-{}", s), !rest.contains('=')))
        });

        match rewritten {
            Some((flag, needs_value)) => {
                expects_value = needs_value;
                out.push(OsString::from(flag));
            }
            None => {
                // 双横线写法同样要跳过它的值，避免把 `-port` 之类的值当成参数
                if let Some(rest) = arg.to_str().and_then(|s| s.strip_prefix("--")) {
                    expects_value = LONG_FLAGS.contains(&rest);
                }
                out.push(arg);
            }
        }
    }

    out
}
