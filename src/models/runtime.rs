use serde::Deserialize;

/// 表示运行中的 server 状态
pub const RUNNING_STATE: &str = "RUNNING";

/// serverRuntimes 接口返回的单个 server
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerRuntime {
    pub name: String,
    pub state: String,
}

impl ServerRuntime {
    pub fn is_running(&self) -> bool {
        self.state == RUNNING_STATE
    }
}

/// `{"body": {"items": [...]}}` 响应外壳
///
/// 字段缺失或类型不符时反序列化直接失败，不会得到空列表。
#[derive(Debug, Deserialize)]
pub struct ServerRuntimes {
    pub body: RuntimeItems,
}

#[derive(Debug, Deserialize)]
pub struct RuntimeItems {
    pub items: Vec<ServerRuntime>,
}

impl ServerRuntimes {
    /// 按名称查找，第一个匹配的为准
    pub fn find(&self, name: &str) -> Option<&ServerRuntime> {
        self.body.items.iter().find(|server| server.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "body": {
            "items": [
                {"name": "AdminServer", "state": "RUNNING", "healthState": {"state": "ok"}},
                {"name": "ManagedServer1", "state": "SHUTDOWN"},
                {"name": "AdminServer", "state": "SHUTDOWN"}
            ]
        },
        "links": []
    }"#;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let runtimes: ServerRuntimes = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(runtimes.body.items.len(), 3);
        assert_eq!(runtimes.body.items[1].state, "SHUTDOWN");
    }

    #[test]
    fn test_first_match_wins() {
        let runtimes: ServerRuntimes = serde_json::from_str(PAYLOAD).unwrap();
        let admin = runtimes.find("AdminServer").unwrap();
        assert!(admin.is_running());
        assert!(!runtimes.find("ManagedServer1").unwrap().is_running());
        assert!(runtimes.find("ManagedServer2").is_none());
    }

    #[test]
    fn test_state_must_match_exactly() {
        let server = ServerRuntime { name: "s".into(), state: "running".into() };
        assert!(!server.is_running());
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        assert!(serde_json::from_str::<ServerRuntimes>(r#"{"items": []}"#).is_err());
        assert!(serde_json::from_str::<ServerRuntimes>(r#"{"body": {}}"#).is_err());
        assert!(serde_json::from_str::<ServerRuntimes>(r#"{"body": {"items": [{"name": "x"}]}}"#).is_err());
        assert!(serde_json::from_str::<ServerRuntimes>("<html>login</html>").is_err());
    }
}
