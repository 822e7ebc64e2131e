//! Reference document layer
//!
//! Fetches the per-release API reference documents, caches them on disk and
//! turns them into the symbol listings the database is built from.
//!
//! - [`fetcher`]: `DocumentFetcher` trait and the document kinds
//! - [`http`]: Fetcher for the published reference over HTTP
//! - [`cache`]: SQLite document cache and the caching fetcher
//! - [`listing`]: Scraping symbol names out of index documents
//! - [`loader`]: Walking the version series and collecting listings
//! - [`error`]: Error types for fetch and cache operations

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod listing;
pub mod loader;

pub use cache::{CachingFetcher, DocumentCache};
pub use error::{CacheError, FetchError};
pub use fetcher::{DocumentFetcher, DocumentKind};
pub use http::HttpFetcher;
pub use loader::{LoadedListings, load_listings};
