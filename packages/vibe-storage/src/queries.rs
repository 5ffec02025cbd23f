use sqlx::PgExecutor;

use crate::{NO_RESPONSES, Result, db::Db, models::ResponseEntry};

pub async fn count<'e, E>(executor: E) -> Result<i64>
where
	E: PgExecutor<'e>,
{
	let total: i64 = sqlx::query_scalar("SELECT count(*) FROM responses").fetch_one(executor).await?;

	Ok(total)
}

/// Returns one entry chosen uniformly at random, or [`NO_RESPONSES`] for an empty corpus.
pub async fn random_entry(db: &Db) -> Result<String> {
	let text: Option<String> =
		sqlx::query_scalar("SELECT text FROM responses ORDER BY random() LIMIT 1")
			.fetch_optional(&db.pool)
			.await?;

	Ok(text.unwrap_or_else(|| NO_RESPONSES.to_string()))
}

/// Text at the zero-based `offset` in ascending `id` order.
///
/// Offsets outside the corpus yield `None`.
pub async fn entry_at_offset<'e, E>(executor: E, offset: i64) -> Result<Option<String>>
where
	E: PgExecutor<'e>,
{
	if offset < 0 {
		return Ok(None);
	}

	let text = sqlx::query_scalar("SELECT text FROM responses ORDER BY id LIMIT 1 OFFSET $1")
		.bind(offset)
		.fetch_optional(executor)
		.await?;

	Ok(text)
}

pub async fn list_entries(db: &Db) -> Result<Vec<ResponseEntry>> {
	let entries = sqlx::query_as::<_, ResponseEntry>(
		"SELECT id, text, created_at FROM responses ORDER BY id",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(entries)
}
