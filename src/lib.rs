pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::ClientConfig;
pub use core::client::{cast_vote, get_poll_results, handle_response, PollyClient};
pub use domain::ports::{ConfigProvider, PollApi};
pub use utils::error::{PollyError, Result};
