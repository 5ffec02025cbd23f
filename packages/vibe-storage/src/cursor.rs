//! Persisted round-robin position over the corpus.
//!
//! The cursor is a single row in `response_counter`. Every advance runs in one transaction that
//! holds the row lock from the read of `current_index` until the new value commits, so concurrent
//! callers each observe a distinct index and no step is lost.

use crate::{Error, NO_RESPONSES, Result, db::Db, models::ResponseCounter, queries};

pub const CURSOR_ID: i32 = 1;

/// Index that follows `current` in a corpus of `total` entries, wrapping to zero.
///
/// Returns `None` when the corpus is empty.
pub fn next_index(current: i64, total: i64) -> Option<i64> {
	if total <= 0 {
		return None;
	}

	Some((current.rem_euclid(total) + 1) % total)
}

/// Returns the entry at the persisted index and moves the index one step forward.
///
/// An empty corpus yields [`NO_RESPONSES`] and leaves the index untouched. An index that no
/// longer addresses an entry (the corpus shrank) also yields [`NO_RESPONSES`], but still advances.
pub async fn advance_and_fetch(db: &Db) -> Result<String> {
	let mut tx = db.pool.begin().await?;

	sqlx::query(
		"\
INSERT INTO response_counter (id, current_index)
VALUES ($1, 0)
ON CONFLICT (id) DO NOTHING",
	)
	.bind(CURSOR_ID)
	.execute(&mut *tx)
	.await?;

	let current: i64 = sqlx::query_scalar(
		"SELECT current_index FROM response_counter WHERE id = $1 FOR UPDATE",
	)
	.bind(CURSOR_ID)
	.fetch_one(&mut *tx)
	.await?;
	let total = queries::count(&mut *tx).await?;
	let Some(next) = next_index(current, total) else {
		tx.commit().await?;

		return Ok(NO_RESPONSES.to_string());
	};
	let text = queries::entry_at_offset(&mut *tx, current)
		.await?
		.unwrap_or_else(|| NO_RESPONSES.to_string());

	sqlx::query("UPDATE response_counter SET current_index = $1 WHERE id = $2")
		.bind(next)
		.bind(CURSOR_ID)
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(text)
}

pub async fn read_counter(db: &Db) -> Result<Option<ResponseCounter>> {
	let counter = sqlx::query_as::<_, ResponseCounter>(
		"SELECT id, current_index FROM response_counter WHERE id = $1",
	)
	.bind(CURSOR_ID)
	.fetch_optional(&db.pool)
	.await?;

	Ok(counter)
}

/// Persisted index, or `None` before the first rotation created the row.
pub async fn current_index(db: &Db) -> Result<Option<i64>> {
	Ok(read_counter(db).await?.map(|counter| counter.current_index))
}

pub async fn set_index(db: &Db, index: i64) -> Result<()> {
	if index < 0 {
		return Err(Error::InvalidArgument(format!(
			"current_index must be zero or greater, got {index}."
		)));
	}

	sqlx::query(
		"\
INSERT INTO response_counter (id, current_index)
VALUES ($1, $2)
ON CONFLICT (id) DO UPDATE SET current_index = EXCLUDED.current_index",
	)
	.bind(CURSOR_ID)
	.bind(index)
	.execute(&db.pool)
	.await?;

	Ok(())
}
