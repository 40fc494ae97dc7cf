//! # dialdex
//!
//! A persistent contact store with:
//! - Append-only binary log for durability
//! - Two in-memory trie indexes (phone number, full name)
//! - Exact-match lookup returning the most recently written record
//! - Single-writer/multi-reader concurrency model
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI / Front End                          │
//! │              (add / search / close only)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   ContactStore                               │
//! │            (Single Writer / Multi Reader)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Append Log  │          │ Trie Index  │
//!   │  (writer /  │          │ (phone/name)│
//!   │   readers)  │          └─────────────┘
//!   └──────┬──────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │ Record Codec│
//!   │  (Contact)  │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod log;
pub mod index;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DexError, Result};
pub use config::Config;
pub use record::Contact;
pub use store::ContactStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dialdex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
