use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn token(&self) -> Option<&str>;
}

/// Operations exposed by the Polly API.
#[async_trait]
pub trait PollApi: Send + Sync {
    async fn cast_vote(&self, poll_id: u64, option_id: u64, token: &str) -> Result<Value>;
    async fn get_poll_results(&self, poll_id: u64, token: &str) -> Result<Value>;
}
