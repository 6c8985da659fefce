use crate::ValidationError;

pub const MIN_LOOKBACK_DAYS: u16 = 1;
pub const MAX_LOOKBACK_DAYS: u16 = 365;

/// Configuration the core consumes. Validated at construction so the fetch
/// and render paths never see out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub width: usize,
    pub lookback_days: u16,
    pub hide_index: bool,
}

impl RunConfig {
    pub fn new(width: usize, lookback_days: u16, hide_index: bool) -> Result<Self, ValidationError> {
        if width == 0 {
            return Err(ValidationError::InvalidWidth);
        }
        if !(MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&lookback_days) {
            return Err(ValidationError::InvalidLookback {
                value: lookback_days,
                min: MIN_LOOKBACK_DAYS,
                max: MAX_LOOKBACK_DAYS,
            });
        }

        Ok(Self {
            width,
            lookback_days,
            hide_index,
        })
    }
}
