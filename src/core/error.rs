use super::color::Color;

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("both seats are configured with color {0}")]
    DuplicateColor(Color),

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_color_display() {
        let err = ConfigError::DuplicateColor(Color::Red);
        assert_eq!(err.to_string(), "both seats are configured with color red");
    }

    #[test]
    fn test_validation_display() {
        let err = ConfigError::Validation("score_bound must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: score_bound must be > 0"
        );
    }
}
