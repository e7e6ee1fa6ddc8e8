use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response confirming a state-changing API request
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The confirmation message
    pub message: String,
}
