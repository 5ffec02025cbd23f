use std::sync::Arc;

use axum::http::HeaderValue;
use color_eyre::eyre;

use vibe_service::VibeService;
use vibe_storage::{db::Db, seed::SeedOutcome};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<VibeService>,
	pub cors_origins: CorsOrigins,
}

#[derive(Clone, Debug)]
pub enum CorsOrigins {
	/// Any origin, echoed back so credentialed requests stay valid.
	Any,
	/// Exactly these origins; empty admits none.
	List(Arc<[HeaderValue]>),
}
impl AppState {
	pub async fn new(config: &vibe_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		match db.ensure_schema().await? {
			SeedOutcome::Seeded(count) => {
				tracing::info!(count, "Database initialized with seed responses.")
			},
			SeedOutcome::Existing(count) => {
				tracing::info!(count, "Database already contains responses.")
			},
		}

		Self::with_db(config, db)
	}

	pub fn with_db(config: &vibe_config::Config, db: Db) -> color_eyre::Result<Self> {
		let cors_origins = if config.service.allows_any_origin() {
			CorsOrigins::Any
		} else {
			let origins = config
				.service
				.allowed_origins()
				.iter()
				.map(|origin| {
					HeaderValue::from_str(origin)
						.map_err(|err| eyre::eyre!("Invalid CORS origin {origin:?}: {err}."))
				})
				.collect::<color_eyre::Result<Vec<_>>>()?;

			CorsOrigins::List(origins.into())
		};

		Ok(Self { service: Arc::new(VibeService::new(db)), cors_origins })
	}
}
