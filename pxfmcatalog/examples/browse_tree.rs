//! Example: Walk the PXFM browse tree
//!
//! Run with: cargo run -p pxfmcatalog --example browse_tree

use pxfmcatalog::StaticCatalogSource;
use pxfmsource::{BrowseTreeSource, ClientIdentity};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let source = StaticCatalogSource::new();
    println!("Walking the \"{}\" browse tree...\n", source.name());

    let client = ClientIdentity::new("com.example.car", 1000);
    let root = source.resolve_root(&client).await;

    let root_hint = match root.layout_hint {
        Some(hint) => format!(" (hint: {:?})", hint),
        None => String::new(),
    };
    println!("Root: {} [{}]{}", root.title, root.id, root_hint);

    for folder in source.list_children(&root.id).await {
        let folder_hint = match folder.layout_hint {
            Some(hint) => format!(" (hint: {:?})", hint),
            None => String::new(),
        };
        let stations = source.list_children(&folder.id).await;

        println!("\n=== {} ({} stations){} ===", folder.title, stations.len(), folder_hint);
        for station in stations {
            println!(
                "  {} ({})",
                station.title,
                station.subtitle.as_deref().unwrap_or("-")
            );
        }
    }

    // Unknown ids degrade to empty lists instead of errors
    let missing = source.list_children("no_such_folder").await;
    println!("\nChildren of unknown id: {}", missing.len());
}
