use crate::*;

pub(crate) fn validate_name(kind: &str, name: &str, max_len: u32) -> Result<(), MarketplaceError> {
    if name.is_empty() {
        return Err(MarketplaceError::InvalidInput(format!(
            "{} name cannot be empty",
            kind
        )));
    }
    if name.len() > max_len as usize {
        return Err(MarketplaceError::InvalidInput(format!(
            "{} name exceeds max length of {} bytes",
            kind, max_len
        )));
    }
    Ok(())
}

pub(crate) fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), MarketplaceError> {
    if value.len() > max_len {
        return Err(MarketplaceError::InvalidInput(format!(
            "{} exceeds max length of {} bytes",
            field, max_len
        )));
    }
    Ok(())
}

pub(crate) fn validate_sale_duration(duration_ns: u64, max_ns: u64) -> Result<(), MarketplaceError> {
    if duration_ns == 0 {
        return Err(MarketplaceError::InvalidInput(
            "Expiration duration must be greater than zero".into(),
        ));
    }
    if duration_ns > max_ns {
        return Err(MarketplaceError::InvalidInput(format!(
            "Expiration duration exceeds max of {} ns",
            max_ns
        )));
    }
    Ok(())
}

pub(crate) fn checked_deadline(start: u64, duration_ns: u64) -> Result<u64, MarketplaceError> {
    start
        .checked_add(duration_ns)
        .ok_or_else(|| MarketplaceError::overflow("deadline"))
}
