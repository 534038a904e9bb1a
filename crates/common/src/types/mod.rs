use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform response envelope shared by every endpoint.
///
/// `data` is `None` on errors and on write operations that return no body;
/// it serializes as JSON `null` in both cases.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self { status: "success", message: message.into(), data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: "error", message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiResponse;

    #[test]
    fn success_envelope_shape() {
        let env = ApiResponse::success("all fairs", Some(vec![1, 2]));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "all fairs");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn error_envelope_has_null_data() {
        let env: ApiResponse<()> = ApiResponse::error("Failed to create artisan");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json["data"].is_null());
    }
}
