pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod ops;
pub mod server;
pub mod store;

pub use error::{ImportError, OpError, StoreError};
pub use models::{Card, Collection, Deck};
pub use ops::{PendingUndo, UndoAction};
pub use store::{LocalCache, RemoteApi, Store};
