pub mod admin_client;
pub mod auth;
pub mod collector;
pub mod process_inspector;

pub use collector::ServerCollector;
