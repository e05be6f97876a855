use serde::{Deserialize, Serialize};

/// Body of `GET /hello/dto`, echoed back from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponseDto {
    pub name: String,
    pub amount: i32,
}

impl HelloResponseDto {
    pub fn new(name: impl Into<String>, amount: i32) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
