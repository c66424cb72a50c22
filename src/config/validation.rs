use crate::constants::limits::{MAX_NETS, MAX_PEOPLE};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Default people must be within 0..=MAX_PEOPLE
/// - Default nets must be within 1..=MAX_NETS
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
/// - If bracket file is provided, it cannot be empty
pub fn validate_config(
    default_people: i64,
    default_nets: i64,
    log_file_path: &Option<String>,
    bracket_file: &Option<String>,
) -> Result<(), AppError> {
    if !(0..=MAX_PEOPLE).contains(&default_people) {
        return Err(AppError::config_error(format!(
            "Default number of people must be between 0 and {MAX_PEOPLE}, got {default_people}"
        )));
    }

    if !(1..=MAX_NETS).contains(&default_nets) {
        return Err(AppError::config_error(format!(
            "Default net count must be between 1 and {MAX_NETS}, got {default_nets}"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(bracket_path) = bracket_file
        && bracket_path.trim().is_empty()
    {
        return Err(AppError::config_error("Bracket file path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(13, 2, &None, &None).is_ok());
        assert!(validate_config(0, 1, &None, &None).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_people() {
        assert!(validate_config(-1, 2, &None, &None).is_err());
        assert!(validate_config(MAX_PEOPLE + 1, 2, &None, &None).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_nets() {
        let err = validate_config(13, 0, &None, &None).unwrap_err();
        assert!(err.to_string().contains("net count"));
        assert!(validate_config(13, MAX_NETS + 1, &None, &None).is_err());
    }

    #[test]
    fn test_rejects_empty_paths() {
        assert!(validate_config(13, 2, &Some(String::new()), &None).is_err());
        assert!(validate_config(13, 2, &None, &Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_creates_missing_log_directory() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("app.log");
        let log_path_str = log_path.to_string_lossy().to_string();

        validate_config(13, 2, &Some(log_path_str), &None).unwrap();
        assert!(temp_dir.path().join("nested").exists());
    }
}
