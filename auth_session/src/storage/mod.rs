mod config;
mod errors;
mod memory;
mod redis;
mod types;

pub use config::mirror_store_from_env;
pub use errors::StorageError;
pub use types::{InMemoryMirrorStore, MirrorData, MirrorStore};
