use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::error::InspectError;
use crate::metrics::ScrapeMetrics;
use crate::models::{marker_token, ProcessDescriptor};
use crate::services::admin_client::{decode_runtimes, AdminClient};
use crate::services::process_inspector::{matching_processes, ProcessSource, SystemProcessSource};

/// 一次 scrape 停在哪个终态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// 管理服务器不可达或非 200，只有 admin_up=0
    AdminDown,
    /// 响应体无法解析，只有 admin_up=1
    PayloadRejected,
    /// 进程表读取失败，admin/server 样本已输出
    ProcessTableUnavailable,
    Complete {
        server_found: bool,
        matched_processes: usize,
    },
}

/// 按需采集目标 server 状态和进程参数
///
/// 配置在启动时确定，之后只读；并发的 scrape 之间没有共享的可变状态。
pub struct ServerCollector {
    server_name: String,
    marker: String,
    admin: AdminClient,
    processes: Arc<dyn ProcessSource>,
}

impl ServerCollector {
    pub fn new(server_name: &str, admin: AdminClient, processes: Arc<dyn ProcessSource>) -> Self {
        Self {
            server_name: server_name.to_string(),
            marker: marker_token(server_name),
            admin,
            processes,
        }
    }

    pub fn from_config(config: &ExporterConfig) -> anyhow::Result<Self> {
        let admin = AdminClient::new(&config.admin_url, &config.username, &config.password)?;
        Ok(Self::new(&config.server_name, admin, Arc::new(SystemProcessSource)))
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub async fn collect(&self, metrics: &ScrapeMetrics) -> ScrapeOutcome {
        let response = match self.admin.server_runtimes().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Admin server unavailable at {}: {}", self.admin.runtimes_url(), e);
                metrics.admin_up.set(0.0);
                return ScrapeOutcome::AdminDown;
            }
        };

        metrics.admin_up.set(1.0);

        let runtimes = match decode_runtimes(response).await {
            Ok(runtimes) => runtimes,
            Err(e) => {
                log::error!("{}", e);
                return ScrapeOutcome::PayloadRejected;
            }
        };

        let server_found = match runtimes.find(&self.server_name) {
            Some(server) => {
                let value = if server.is_running() { 1.0 } else { 0.0 };
                metrics
                    .server_up
                    .with_label_values(&[server.name.as_str()])
                    .set(value);
                true
            }
            None => {
                log::info!("Server {} not found in domain", self.server_name);
                false
            }
        };

        let processes = match self.list_processes().await {
            Ok(processes) => processes,
            Err(e) => {
                log::error!("Failed to retrieve processes: {}", e);
                return ScrapeOutcome::ProcessTableUnavailable;
            }
        };

        let mut matched_processes = 0;
        for process in matching_processes(&processes, &self.marker) {
            let pid = process.pid.to_string();
            for (index, arg) in process.arguments.iter().enumerate() {
                metrics
                    .process_arg
                    .with_label_values(&[
                        self.server_name.as_str(),
                        pid.as_str(),
                        index.to_string().as_str(),
                        arg.as_str(),
                    ])
                    .set(1.0);
            }
            matched_processes += 1;
        }

        log::debug!(
            "Scrape for {} complete: server_found={}, matched_processes={}",
            self.server_name,
            server_found,
            matched_processes
        );

        ScrapeOutcome::Complete {
            server_found,
            matched_processes,
        }
    }

    // 枚举进程表是阻塞调用，放到 blocking 线程池
    async fn list_processes(&self) -> Result<Vec<ProcessDescriptor>, InspectError> {
        let source = self.processes.clone();
        tokio::task::spawn_blocking(move || source.processes())
            .await
            .map_err(|e| InspectError::Join(e.to_string()))?
    }
}
