//! marquee-core: Movie records, nominations, search state, configuration, and logging.

pub mod build_info;
pub mod config;
pub mod debounce;
pub mod error;
pub mod logging;
pub mod movie;
pub mod nominations;
pub mod paths;
pub mod search;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use movie::Movie;
pub use nominations::{AddOutcome, NominationStore, NOMINATION_LIMIT};
pub use search::{SearchController, SearchProvider, SearchRequest};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
