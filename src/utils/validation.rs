use crate::core::zoned::{parse_start_time, parse_time_zone};
use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_time_zone(field_name: &str, zone: &str) -> Result<()> {
    validate_non_empty_string(field_name, zone)?;

    parse_time_zone(zone)
        .map(|_| ())
        .map_err(|_| CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: zone.to_string(),
            reason: "Not an IANA time zone identifier (e.g. Asia/Tokyo)".to_string(),
        })
}

/// 開始日時在沒有偏移量時會用 host 時區解讀，所以驗證時也需要它
pub fn validate_start_time(field_name: &str, value: &str, host_zone: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    match parse_start_time(value, host_zone) {
        Ok(_) => Ok(()),
        Err(CalcError::FormatError { reason, .. }) => Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason,
        }),
        Err(e) => Err(e),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
