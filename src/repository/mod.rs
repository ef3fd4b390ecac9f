//! Repository Layer
//!
//! Data access abstractions and implementations.

mod card_store;
mod db;
mod memory_store;
mod pin_repo;
mod profile_repo;
mod sqlite_store;
mod traits;


pub use card_store::{normalize, to_record, CardCollection, CardStore};
pub use db::{init_db, DbState};
pub use memory_store::InMemoryKvStore;
pub use pin_repo::{PinCheck, PinRepository, PIN_KEY};
pub use profile_repo::{profile_from_record, ProfileRepository, PROFILE_KEY};
pub use sqlite_store::SqliteKvStore;
pub use traits::KeyValueStore;
