pub mod files;
pub mod migration;
pub mod store;

pub use files::{atomic_write, ensure_tally_dir, init_local_tally};
pub use migration::migrate_legacy;
pub use store::{MalformedState, Store};
