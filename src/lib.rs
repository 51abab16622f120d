pub mod collate;
pub mod config;
pub mod country;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod genre;
pub mod pipeline;
pub mod render;
pub mod vector;

pub use collate::{collate, Collation, Rankings, VectorOrdering};
pub use country::Country;
pub use error::Error;
pub use genre::Genre;
pub use vector::Vector;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, Error>;
