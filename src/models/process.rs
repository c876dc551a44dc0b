/// 进程表中的一个进程（每次 scrape 现取，不缓存）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    pub pid: u32,
    /// 完整命令行参数，顺序与 argv 一致
    pub arguments: Vec<String>,
}

impl ProcessDescriptor {
    /// 参数中是否有与 `token` 完全相同的一项
    pub fn has_argument(&self, token: &str) -> bool {
        self.arguments.iter().any(|arg| arg == token)
    }
}

/// 用于识别目标 server 进程的命令行参数
pub fn marker_token(server_name: &str) -> String {
    format!("-Dweblogic.Name={}", server_name)
}
