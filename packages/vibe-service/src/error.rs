pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<vibe_storage::Error> for Error {
	fn from(err: vibe_storage::Error) -> Self {
		match err {
			vibe_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			vibe_storage::Error::InvalidArgument(message) => Self::Storage { message },
		}
	}
}
