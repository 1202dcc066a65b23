pub mod card;
pub mod collection;
pub mod deck;

pub use card::Card;
pub use collection::Collection;
pub use deck::Deck;

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates a fresh collection-unique identifier.
///
/// Ids are millisecond timestamps, bumped past the previously issued id
/// when two calls land in the same millisecond.
pub fn fresh_id() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = if now > prev { now } else { prev + 1 };
        match LAST_ID.compare_exchange(prev, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(observed) => prev = observed,
        }
    }
}
