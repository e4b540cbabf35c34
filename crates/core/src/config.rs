//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants (memory image size, reset PC, step limit).
//! 2. **Structures:** Hierarchical config for general simulation and memory settings.
//! 3. **Loading:** JSON files via [`Config::load`], or `Config::default()` as the CLI baseline.

use std::fs;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Size of the memory image in bytes (1 MiB).
    ///
    /// Program text loads at address zero and data lives in the same flat
    /// image, so this bounds both. Accesses beyond it fault.
    pub const MEMORY_BYTES: u64 = 1024 * 1024;

    /// Reset value of the program counter.
    ///
    /// The image loads at address zero, so execution starts at the first
    /// loaded word.
    pub const RESET_PC: u64 = 0;

    /// Executed-instruction bound.
    ///
    /// Zero disables the bound; the run then continues until the halt
    /// sentinel or a fault.
    pub const MAX_STEPS: u64 = 0;
}

/// Root configuration structure containing all simulator settings.
///
/// Every field and section carries a default, so partial JSON files work and
/// `Config::default()` describes a complete machine.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rv64sim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.trace_instructions, false);
/// assert_eq!(config.memory.size_bytes, 1024 * 1024);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rv64sim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_steps": 10000
///     },
///     "memory": {
///         "size_bytes": 65536
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.general.max_steps, 10000);
/// assert_eq!(config.memory.size_bytes, 65536);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory image configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// Missing fields and sections fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigRead`] when the file cannot be read and
    /// [`SimError::ConfigParse`] when its contents are not valid JSON for
    /// this schema.
    pub fn load(path: &str) -> Result<Self, SimError> {
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SimError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Mirror the per-fetch trace line to stdout
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to address zero, where the image loads)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,

    /// Executed-instruction bound; zero means unlimited
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u64 {
        defaults::RESET_PC
    }

    /// Returns the default executed-instruction bound.
    fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::RESET_PC,
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Memory image configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Capacity of the flat memory image in bytes
    #[serde(default = "MemoryConfig::default_size_bytes")]
    pub size_bytes: u64,
}

impl MemoryConfig {
    /// Returns the default memory image size in bytes.
    fn default_size_bytes() -> u64 {
        defaults::MEMORY_BYTES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::MEMORY_BYTES,
        }
    }
}
