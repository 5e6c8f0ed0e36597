//! Integration tests for the pxfmcatalog browse contract

use pxfmcatalog::{
    BrowsePolicy, FOLDER_ALL_STATIONS, FOLDER_FAVORITES, ROOT_ID, StaticCatalogSource,
};
use pxfmsource::{BrowseTreeSource, ClientIdentity, LayoutHint, NodeKind};

fn test_client() -> ClientIdentity {
    ClientIdentity::new("com.example.auto", 10042)
}

#[tokio::test]
async fn test_same_root_for_every_caller() {
    let source = StaticCatalogSource::new();

    let first = source.resolve_root(&test_client()).await;
    let second = source
        .resolve_root(&ClientIdentity::new("com.other.assistant", 99))
        .await;

    assert_eq!(first, second);
    assert_eq!(first.id, ROOT_ID);
    assert_eq!(first.title, "PXFM");
    assert_eq!(first.kind, NodeKind::Root);
}

#[tokio::test]
async fn test_root_children_are_favorites_then_all_stations() {
    let source = StaticCatalogSource::new();
    let folders = source.list_children(ROOT_ID).await;

    assert_eq!(folders.len(), 2);

    assert_eq!(folders[0].id, FOLDER_FAVORITES);
    assert_eq!(folders[0].title, "Favorites");
    assert_eq!(folders[0].subtitle.as_deref(), Some("Your favorite stations"));
    assert_eq!(folders[0].kind, NodeKind::Folder);
    assert!(folders[0].is_browsable());

    assert_eq!(folders[1].id, FOLDER_ALL_STATIONS);
    assert_eq!(folders[1].title, "All Stations");
    assert_eq!(folders[1].subtitle.as_deref(), Some("Listen to all stations"));
    assert_eq!(folders[1].layout_hint, Some(LayoutHint::Grid));
}

#[tokio::test]
async fn test_all_stations_sequence() {
    let source = StaticCatalogSource::new();
    let stations = source.list_children(FOLDER_ALL_STATIONS).await;

    assert_eq!(stations.len(), 6);

    let ids: Vec<&str> = stations.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);

    assert_eq!(stations[0].title, "Kral FM");
    assert_eq!(stations[0].subtitle.as_deref(), Some("Arabesk"));
    assert_eq!(stations[5].title, "Number 1");
    assert_eq!(stations[5].subtitle.as_deref(), Some("Hit"));

    for station in &stations {
        assert_eq!(station.kind, NodeKind::Station);
        assert!(station.is_playable());
        assert!(!station.is_browsable());
    }
}

#[tokio::test]
async fn test_favorites_mirror_station_one() {
    let source = StaticCatalogSource::new();

    let favorites = source.list_children(FOLDER_FAVORITES).await;
    let all = source.list_children(FOLDER_ALL_STATIONS).await;

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0], all[0]);
    assert_eq!(favorites[0].title, "Kral FM");
}

#[tokio::test]
async fn test_unknown_ids_resolve_empty() {
    let source = StaticCatalogSource::new();

    assert!(source.list_children("no_such_folder").await.is_empty());
    assert!(source.list_children("").await.is_empty());
    assert!(source.list_children("7").await.is_empty());

    // Station leaves have no children either
    assert!(source.list_children("1").await.is_empty());
}

#[tokio::test]
async fn test_listing_is_stable_across_calls() {
    let source = StaticCatalogSource::new();

    let first = source.list_children(FOLDER_ALL_STATIONS).await;
    let second = source.list_children(FOLDER_ALL_STATIONS).await;
    assert_eq!(first, second);

    let root_first = source.list_children(ROOT_ID).await;
    let root_second = source.list_children(ROOT_ID).await;
    assert_eq!(root_first, root_second);
}

#[tokio::test]
async fn test_degenerate_variant_serves_only_root() {
    let source = StaticCatalogSource::with_policy(BrowsePolicy {
        attach_root_hints: false,
        serve_folder_children: false,
        ..Default::default()
    });

    let root = source.resolve_root(&test_client()).await;
    assert_eq!(root.layout_hint, None);

    assert_eq!(source.list_children(ROOT_ID).await.len(), 2);
    assert!(source.list_children(FOLDER_ALL_STATIONS).await.is_empty());
    assert!(source.list_children(FOLDER_FAVORITES).await.is_empty());
}
