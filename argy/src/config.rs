//! Resolver configuration.
//!
//! ```
//! let config = argy::ResolverConfig::from_toml_str("max_slots = 8")?;
//! assert_eq!(config.max_slots, 8);
//! assert!(config.pad_to_stack);
//! # Ok::<(), argy::ArgyError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ArgyError, Result};
use crate::resolver::PresenceMask;

/// Configuration for overload resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Longest stack a resolver will enumerate. Resolution visits `2^N`
    /// presence masks, so longer stacks fail with `TooManySlots`.
    pub max_slots: usize,

    /// Pad resolved vectors with `undefined` so they hold one value per
    /// declared slot.
    pub pad_to_stack: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_slots: 16,
            pad_to_stack: true,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_slots == 0 || self.max_slots > PresenceMask::MAX_SLOTS {
            return Err(ArgyError::Config {
                message: format!(
                    "max_slots must be between 1 and {}, got {}",
                    PresenceMask::MAX_SLOTS,
                    self.max_slots
                ),
            });
        }
        Ok(())
    }

    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    pub fn with_padding(mut self, pad_to_stack: bool) -> Self {
        self.pad_to_stack = pad_to_stack;
        self
    }
}
