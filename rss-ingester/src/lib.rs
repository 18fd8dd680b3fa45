pub mod checkpoint;
pub mod fetcher;
pub mod filter;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod projector;
pub mod traits;
pub mod types;

pub use checkpoint::CheckpointStore;
pub use fetcher::Fetcher;
pub use filter::{select_new_entries, Selection};
pub use parser::FeedParser;
pub use pipeline::{Ingester, RunStatus};
pub use traits::FeedSource;
pub use types::*;
