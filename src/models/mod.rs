pub mod process;
pub mod runtime;

pub use process::{marker_token, ProcessDescriptor};
pub use runtime::ServerRuntimes;
