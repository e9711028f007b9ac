//! Demo data seeding configuration.

use serde::{Deserialize, Serialize};

/// Controls the startup seeding of demo identities and characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to seed on startup.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
