use crate::config::ExporterConfig;
use crate::services::ServerCollector;
use std::sync::Arc;

/// 启动后只读，scrape 之间不共享可变状态，因此不需要锁
pub type AppState = Arc<ServerCollector>;

pub fn new_state(config: &ExporterConfig) -> anyhow::Result<AppState> {
    Ok(Arc::new(ServerCollector::from_config(config)?))
}
