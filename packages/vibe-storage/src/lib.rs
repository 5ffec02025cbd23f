pub mod cursor;
pub mod db;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Text served in place of an entry when the corpus has nothing to offer.
pub const NO_RESPONSES: &str = "No responses available";
