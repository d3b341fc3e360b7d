pub mod client;
pub mod error;
pub mod types;

mod parse_helpers;

pub use client::SearchClient;
pub use error::ClientError;
pub use types::{Badge, Product, SearchEnvelope, SearchResults};
