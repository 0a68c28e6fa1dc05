use serde::{Deserialize, Serialize};

/// Body of `POST /polls/{poll_id}/vote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub option_id: u64,
}

impl VoteRequest {
    pub fn new(option_id: u64) -> Self {
        Self { option_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_request_wire_shape() {
        let body = serde_json::to_value(VoteRequest::new(3)).unwrap();
        assert_eq!(body, serde_json::json!({"option_id": 3}));
    }
}
