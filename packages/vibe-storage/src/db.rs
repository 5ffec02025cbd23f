use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
	Result, schema,
	seed::{self, SeedOutcome},
};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Db {
	pub pool: PgPool,
}
impl Db {
	pub async fn connect(cfg: &vibe_config::Postgres) -> Result<Self> {
		let pool = pool_options(cfg).connect(&cfg.dsn).await?;

		Ok(Self { pool })
	}

	/// Builds the pool without opening a connection; the first query connects.
	pub fn connect_lazy(cfg: &vibe_config::Postgres) -> Result<Self> {
		let pool = pool_options(cfg).connect_lazy(&cfg.dsn)?;

		Ok(Self { pool })
	}

	/// Creates missing tables and seeds the corpus when it is empty.
	///
	/// Safe to run on every start, including from several processes at once.
	pub async fn ensure_schema(&self) -> Result<SeedOutcome> {
		let sql = schema::render_schema();
		let lock_id: i64 = 5_173_000;
		// Transaction-level lock: released on commit or rollback, whichever ends `tx`.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)").bind(lock_id).execute(&mut *tx).await?;

		for statement in sql.split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		let outcome = seed::seed_if_empty(&mut *tx).await?;

		tx.commit().await?;

		Ok(outcome)
	}
}

fn pool_options(cfg: &vibe_config::Postgres) -> PgPoolOptions {
	PgPoolOptions::new().max_connections(cfg.pool_max_conns).acquire_timeout(ACQUIRE_TIMEOUT)
}
