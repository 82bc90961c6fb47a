use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request succeeds without returning a resource
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The success message
    pub msg: String,
}
