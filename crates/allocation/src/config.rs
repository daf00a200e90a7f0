use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, Result};

/// Estimated duration given to a listing when nothing more specific is known
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 30;

/// Configuration for grouping and re-listing behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Estimated minutes for listings whose source carries none
    pub default_estimated_minutes: u32,

    /// Stamp offences and applications split into a next hearing with the
    /// seeding hearing supplied by the caller
    pub stamp_seeding_hearing: bool,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            default_estimated_minutes: DEFAULT_ESTIMATED_MINUTES,
            stamp_seeding_hearing: true,
        }
    }
}

impl AllocationConfig {
    /// Parse and validate a TOML document; missing keys take defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    #[must_use]
    pub const fn with_default_estimated_minutes(mut self, minutes: u32) -> Self {
        self.default_estimated_minutes = minutes;
        self
    }

    #[must_use]
    pub const fn with_seeding_stamp(mut self, stamp: bool) -> Self {
        self.stamp_seeding_hearing = stamp;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_estimated_minutes == 0 {
            return Err(AllocationError::invalid_config(
                "default_estimated_minutes must be > 0",
            ));
        }

        Ok(())
    }
}
