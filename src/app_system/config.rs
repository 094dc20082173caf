use std::env;
use tracing::warn;

pub const BUFFER_ENV: &str = "BAKERY_BOARD_BUFFER";
pub const ID_PREFIX_ENV: &str = "BAKERY_BOARD_ID_PREFIX";

/// Startup settings for the board system.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Capacity of the command channel in front of the board actor.
    pub buffer_size: usize,
    /// Order ids are `<prefix>_<n>`.
    pub id_prefix: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            id_prefix: "order".to_string(),
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by `BAKERY_BOARD_BUFFER` and `BAKERY_BOARD_ID_PREFIX`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Invalid or empty values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(key = BUFFER_ENV, value = %raw, "Ignoring invalid buffer size"),
            }
        }
        if let Some(raw) = lookup(ID_PREFIX_ENV) {
            let prefix = raw.trim();
            if prefix.is_empty() {
                warn!(key = ID_PREFIX_ENV, "Ignoring empty id prefix");
            } else {
                config.id_prefix = prefix.to_string();
            }
        }
        config
    }
}
