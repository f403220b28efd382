use crate::utils::error::{Result, RewriteError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}

/// The generated header must not overwrite its own source.
pub fn validate_distinct_paths(input: Option<&str>, output: Option<&str>) -> Result<()> {
    if let (Some(input), Some(output)) = (input, output) {
        if Path::new(input) == Path::new(output) {
            return Err(RewriteError::ConfigError {
                message: format!("input and output both name '{}'", input),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "nodes.h").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "nodes\0.h").is_err());
    }

    #[test]
    fn test_validate_optional_path() {
        assert!(validate_optional_path("output", None).is_ok());
        assert!(validate_optional_path("output", Some("out/nodes.h")).is_ok());
        assert!(validate_optional_path("output", Some("")).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths(None, None).is_ok());
        assert!(validate_distinct_paths(Some("nodes.h"), None).is_ok());
        assert!(validate_distinct_paths(Some("nodes.h"), Some("nodes-gen.h")).is_ok());

        let err = validate_distinct_paths(Some("nodes.h"), Some("nodes.h")).unwrap_err();
        assert!(matches!(err, RewriteError::ConfigError { .. }));
    }
}
