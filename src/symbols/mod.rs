//! Symbol version layer
//!
//! Builds the version-indexed symbol database from per-version listings and
//! classifies symbols against a target library version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Listings   │────▶│  Database   │◀────│   Checker   │
//! │(per version)│     │(name→range) │     │ (classify)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Range    │
//!                                         │ (version cmp)│
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`version`]: `Version` and the documented `VersionSeries`
//! - [`range`]: `VersionRange` and its classification rule
//! - [`database`]: Listings and the two-pass database construction
//! - [`checker`]: Symbol classification against a target version

pub mod checker;
pub mod database;
pub mod range;
pub mod version;

pub use checker::{Classification, SymbolCheck, SymbolLookup, check_symbol, check_symbols};
pub use database::{SymbolDatabase, SymbolListings, SymbolRecord, VersionListing};
pub use range::{RangeStatus, VersionRange};
pub use version::{ParseVersionError, Version, VersionSeries};
