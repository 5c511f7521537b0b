use serde::{Deserialize, Serialize};

/// Uniform JSON envelope returned by every endpoint, success or failure.
/// Absent fields are omitted from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> Response<T> {
    pub fn with_data(count: usize, message: &str, data: T) -> Self {
        Self {
            count: Some(count),
            message: Some(message.to_string()),
            data: Some(data),
            errors: None,
        }
    }

    /// Success without a payload: empty result sets and soft deletes.
    pub fn empty(message: &str) -> Self {
        Self {
            count: None,
            message: Some(message.to_string()),
            data: None,
            errors: None,
        }
    }

    pub fn failure(message: &str, errors: Vec<String>) -> Self {
        Self {
            count: None,
            message: Some(message.to_string()),
            data: None,
            errors: Some(errors),
        }
    }
}
