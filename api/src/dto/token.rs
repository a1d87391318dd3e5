use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendTokenRequest {
    /// Where to send the token; opaque, typically a phone number such as "21999999999"
    #[validate(length(min = 1, max = 32))]
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendTokenResponse {
    /// Confirmation returned by the SMS transport
    pub confirmation: String,
}
