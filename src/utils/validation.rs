use crate::utils::error::{PollerError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PollerError::InvalidConfig {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PollerError::InvalidConfig {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PollerError::InvalidConfig {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 區間 `[start, end)` 至少要有一個元素
pub fn validate_non_empty_range(field_name: &str, start: u32, end: u32) -> Result<()> {
    if start >= end {
        return Err(PollerError::InvalidConfig {
            field: field_name.to_string(),
            value: format!("{}..{}", start, end),
            reason: format!("Range must contain at least one value (start {} >= end {})", start, end),
        });
    }
    Ok(())
}
