//! Configuration for dialdex
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a ContactStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path to the append-only log file. Created if absent, never truncated.
    pub log_path: PathBuf,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// Sync strategy: how often to fsync the log
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// Scan the existing log on open and rebuild both indexes from it.
    /// With this off, records written in earlier runs stay in the file but
    /// are unreachable through search until rewritten.
    pub rebuild_on_open: bool,
}

/// Log sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every append (safest, slowest)
    EveryWrite,

    /// fsync only on close (fastest, loses the tail on a crash)
    OnClose,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./address_book.dat"),
            sync_strategy: SyncStrategy::OnClose,
            rebuild_on_open: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the log file path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set whether indexes are rebuilt from the log on open
    pub fn rebuild_on_open(mut self, rebuild: bool) -> Self {
        self.config.rebuild_on_open = rebuild;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
