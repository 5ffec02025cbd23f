pub mod responses;

mod error;

pub use error::{Error as ServiceError, Result as ServiceResult};
pub use responses::TextResponse;

use vibe_storage::db::Db;

pub struct VibeService {
	pub db: Db,
}
impl VibeService {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
