pub mod app_config;
pub mod file_store;
pub mod kv;
pub mod seed;
pub mod ticket_store;

pub use app_config::AppConfig;
pub use file_store::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use ticket_store::{Collection, TicketStore};

/// Storage-layer failures. Absent keys are not errors; reads of missing
/// collections yield empty data instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data for '{collection}' is corrupt: {source}")]
    Corrupt {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode '{collection}': {source}")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
