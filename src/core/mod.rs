pub mod client;

pub use crate::domain::model::VoteRequest;
pub use crate::domain::ports::{ConfigProvider, PollApi};
pub use crate::utils::error::Result;
