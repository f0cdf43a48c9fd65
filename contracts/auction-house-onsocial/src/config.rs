use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketConfig {
    pub settlement_window_ns: u64,
    pub max_sale_duration_ns: u64,
    pub max_name_len: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            settlement_window_ns: DEFAULT_SETTLEMENT_WINDOW_NS,
            max_sale_duration_ns: DEFAULT_MAX_SALE_DURATION_NS,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl MarketConfig {
    pub fn validate(&self) -> Result<(), MarketplaceError> {
        if self.settlement_window_ns < MIN_SETTLEMENT_WINDOW_NS {
            return Err(MarketplaceError::InvalidInput(format!(
                "settlement_window_ns must be >= {MIN_SETTLEMENT_WINDOW_NS}"
            )));
        }
        if self.max_sale_duration_ns == 0 {
            return Err(MarketplaceError::InvalidInput(
                "max_sale_duration_ns must be greater than zero".into(),
            ));
        }
        if self.max_name_len == 0 || self.max_name_len > MAX_NAME_LEN_CEILING {
            return Err(MarketplaceError::InvalidInput(format!(
                "max_name_len must be 1..={MAX_NAME_LEN_CEILING}"
            )));
        }
        Ok(())
    }

    pub fn validate_patch(&self, patch: &MarketConfigUpdate) -> Result<(), MarketplaceError> {
        let mut patched = self.clone();
        patched.apply_patch(patch);
        patched.validate()
    }

    pub fn apply_patch(&mut self, patch: &MarketConfigUpdate) {
        if let Some(v) = patch.settlement_window_ns {
            self.settlement_window_ns = v;
        }
        if let Some(v) = patch.max_sale_duration_ns {
            self.max_sale_duration_ns = v;
        }
        if let Some(v) = patch.max_name_len {
            self.max_name_len = v;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct MarketConfigUpdate {
    pub settlement_window_ns: Option<u64>,
    pub max_sale_duration_ns: Option<u64>,
    pub max_name_len: Option<u32>,
}
