//! Loading per-version listings from a document fetcher

use futures::future::join_all;
use tracing::{info, warn};

use crate::docs::error::FetchError;
use crate::docs::fetcher::{DocumentFetcher, DocumentKind};
use crate::docs::listing::build_version_listing;
use crate::symbols::database::{SymbolDatabase, SymbolListings, VersionListing};
use crate::symbols::version::{Version, VersionSeries};

/// Listings for the prefix of a series whose documents could be obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedListings {
    /// Versions that were loaded, always a prefix of the requested series
    pub series: VersionSeries,
    pub listings: SymbolListings,
}

impl LoadedListings {
    pub fn into_database(self) -> SymbolDatabase {
        SymbolDatabase::build(&self.series, &self.listings)
    }
}

/// Fetch the three documents of one release concurrently
async fn fetch_version_listing(
    fetcher: &dyn DocumentFetcher,
    version: Version,
    class_prefix: &str,
) -> Result<VersionListing, FetchError> {
    let futures = DocumentKind::ALL
        .into_iter()
        .map(|kind| fetcher.fetch(version, kind));

    let mut documents = join_all(futures)
        .await
        .into_iter()
        .collect::<Result<Vec<String>, FetchError>>()?
        .into_iter();

    let (Some(symbols), Some(deprecated), Some(objects)) =
        (documents.next(), documents.next(), documents.next())
    else {
        return Err(FetchError::InvalidResponse(format!(
            "Incomplete document set for {}",
            version
        )));
    };

    Ok(build_version_listing(
        &symbols,
        &deprecated,
        &objects,
        class_prefix,
    ))
}

/// Load listings for `series`, oldest first.
///
/// Loading stops at the first version whose documents cannot all be fetched;
/// the returned series ends at the last version that loaded. Errors are logged
/// and never returned.
pub async fn load_listings(
    fetcher: &dyn DocumentFetcher,
    series: &VersionSeries,
    class_prefix: &str,
) -> LoadedListings {
    let mut listings = SymbolListings::new();
    let mut last_loaded = None;

    for version in series.iter() {
        match fetch_version_listing(fetcher, version, class_prefix).await {
            Ok(listing) => {
                info!(
                    "Loaded GTK {}: {} available, {} deprecated",
                    version,
                    listing.available.len(),
                    listing.deprecated.len()
                );
                listings.insert(version, listing);
                last_loaded = Some(version);
            }
            Err(e) => {
                warn!(
                    "Failed to get API documents for GTK {}: {}. Using releases up to {}.",
                    version,
                    e,
                    last_loaded.map_or_else(|| "none".to_string(), |v| v.to_string())
                );
                break;
            }
        }
    }

    let series = match last_loaded {
        Some(last) => series.truncated_at(last),
        None => VersionSeries::empty(),
    };

    LoadedListings { series, listings }
}
