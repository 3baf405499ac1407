use crate::utils::error::{DdError, Result};

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DdError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Empty strings count as missing, matching how `-from ""` behaves on the command line.
pub fn validate_required_field<'a>(field_name: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DdError::MissingConfigError {
            field: field_name.to_string(),
        }),
    }
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| DdError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "should be not negative".to_string(),
    })
}
