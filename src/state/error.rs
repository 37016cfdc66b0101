//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Product not found in the catalog
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::ProductNotFound {
            id: "casque-audio-pro".to_string(),
        };
        assert!(error.to_string().contains("Product not found"));
        assert!(error.to_string().contains("casque-audio-pro"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("State error"));
        assert!(error.to_string().contains("Generic error"));
    }
}
