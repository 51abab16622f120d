use thiserror::Error;

use crate::extract::ExtractionError;
use crate::vector::Vector;

/// Everything that can abort a header generation run.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failures and non-success HTTP statuses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Console or output file failures.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A fetched page did not have the expected shape.
    #[error("Failed to extract {page}: {source}")]
    Extraction {
        page: String,
        #[source]
        source: ExtractionError,
    },

    /// The reference vector produced no genres.
    #[error("No genres ranked by {0}")]
    EmptyRankings(Vector),

    /// The reference vector lists the same genre name twice.
    #[error("Genre `{0}` appears more than once in the reference rankings")]
    DuplicateGenre(String),

    /// Indexes are emitted as `uint16_t`.
    #[error("{0} genres do not fit in 16-bit indexes")]
    TooManyGenres(usize),

    /// A later vector ranks a genre the reference vector does not have.
    #[error("Genre `{genre}` ranked by {vector} is not in the reference rankings")]
    UnknownGenre { genre: String, vector: Vector },

    /// A later vector ranks a different number of genres than the reference.
    #[error("{vector} ranks {found} genres, expected {expected}")]
    RankingSizeMismatch {
        vector: Vector,
        expected: usize,
        found: usize,
    },

    /// Rankings were captured for a vector that was never requested.
    #[error("Vector {0} was not requested")]
    UnregisteredVector(Vector),

    /// Invalid command line combination.
    #[error("Configuration error: {0}")]
    Config(String),
}
