use prometheus::proto::MetricFamily;
use prometheus::{
    Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder,
    register_gauge_vec_with_registry, register_gauge_with_registry,
};

/// 单次 scrape 的指标集合
///
/// 每次 scrape 新建一个 Registry，上一次的样本不会残留。
/// `process_arg` 每个命令行参数一条时间序列，基数 = 参数个数 × 匹配进程数，
/// 目标拓扑下只有一个进程、几十个参数。
pub struct ScrapeMetrics {
    registry: Registry,

    pub admin_up: Gauge,
    pub server_up: GaugeVec,
    pub process_arg: GaugeVec,
}

impl ScrapeMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let admin_up = register_gauge_with_registry!(
            Opts::new(
                "weblogic_admin_server_up",
                "Whether the WebLogic admin server is up (1 = up, 0 = down)"
            ),
            registry
        )?;

        let server_up = register_gauge_vec_with_registry!(
            Opts::new(
                "weblogic_server_up",
                "Whether the specified WebLogic server is up (1 = RUNNING, 0 = otherwise)"
            ),
            &["server_name"],
            registry
        )?;

        let process_arg = register_gauge_vec_with_registry!(
            Opts::new("process_arg", "Command-line arguments of the WebLogic process"),
            &["server_name", "pid", "index", "value"],
            registry
        )?;

        Ok(Self {
            registry,
            admin_up,
            server_up,
            process_arg,
        })
    }

    /// 没有样本的指标族会被 Registry 剔除
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn render(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
