mod app;

use app::MindDeckApp;
use minddeck_app::store::{LocalCache, RemoteApi, Store};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cache_path =
        std::env::var("MINDDECK_CACHE").unwrap_or_else(|_| "minddeck.sqlite3".to_string());
    let api_base =
        std::env::var("MINDDECK_API").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let cache = LocalCache::open(&cache_path).expect("Failed to open local cache");
    let remote = match RemoteApi::new(&api_base) {
        Ok(remote) => Some(remote),
        Err(e) => {
            log::warn!("remote client unavailable, running offline: {e}");
            None
        }
    };
    let store = Store::new(cache, remote);

    let collection = store.load();
    log::info!(
        "Loaded {} decks ({} cards) from {}",
        collection.decks.len(),
        collection.card_count(),
        api_base
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MindDeck",
        options,
        Box::new(|_cc| Ok(Box::new(MindDeckApp::new(store, collection)))),
    )
}
