#[allow(dead_code)]
mod helper;

use tempfile::TempDir;

use gtk_symbol_check::config::CheckConfig;
use gtk_symbol_check::docs::cache::{CachingFetcher, DocumentCache};
use gtk_symbol_check::docs::fetcher::DocumentKind;
use gtk_symbol_check::runner::build_database;
use gtk_symbol_check::symbols::{Version, VersionRange};

use helper::fetcher::{StaticFetcher, symbol_index};

fn small_config() -> CheckConfig {
    let mut config = CheckConfig::default();
    config.docs.max_minor = 2;
    config
}

fn reference() -> StaticFetcher {
    StaticFetcher::new()
        .with_releases([Version::new(3, 0), Version::new(3, 2)])
        .with_document(
            Version::new(3, 2),
            DocumentKind::SymbolIndex,
            &symbol_index(&["gtk_grid_new"]),
        )
}

#[tokio::test]
async fn cached_documents_rebuild_database_offline() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("documents.db");

    let online = CachingFetcher::new(reference(), DocumentCache::new(&db_path).unwrap(), false);
    let first = build_database(&online, &small_config()).await;
    assert_eq!(
        online.cache().cached_versions().unwrap(),
        vec![Version::new(3, 0), Version::new(3, 2)]
    );
    drop(online);

    let offline = CachingFetcher::new(
        StaticFetcher::new(),
        DocumentCache::new(&db_path).unwrap(),
        true,
    );
    let second = build_database(&offline, &small_config()).await;

    assert_eq!(first, second);
    assert_eq!(
        second.get("gtk_grid_new").unwrap().range,
        VersionRange::new(Version::new(3, 2), Version::new(3, 2))
    );
}

#[tokio::test]
async fn offline_without_cache_builds_empty_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("documents.db");

    let offline = CachingFetcher::new(reference(), DocumentCache::new(&db_path).unwrap(), true);
    let db = build_database(&offline, &small_config()).await;

    assert!(db.is_empty());
}

#[tokio::test]
async fn cached_documents_are_not_fetched_again() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("documents.db");
    let cache = DocumentCache::new(&db_path).unwrap();
    for kind in DocumentKind::ALL {
        cache.put(Version::new(3, 0), kind, "").unwrap();
    }

    let mut config = small_config();
    config.docs.max_minor = 4;

    let fetcher = CachingFetcher::new(reference(), cache, false);
    let db = build_database(&fetcher, &config).await;

    // 3.2 is fetched, 3.4 is tried once per document and missing
    assert_eq!(fetcher.inner().request_count(), 6);
    assert_eq!(
        fetcher.cache().cached_versions().unwrap(),
        vec![Version::new(3, 0), Version::new(3, 2)]
    );
    assert_eq!(
        db.get("gtk_grid_new").unwrap().range,
        VersionRange::new(Version::new(3, 2), Version::new(3, 2))
    );
}
