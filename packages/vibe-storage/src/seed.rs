use sqlx::{PgConnection, QueryBuilder};

use crate::{Result, queries};

/// Initial corpus, inserted in order so ascending `id` follows this listing.
pub const SEED_RESPONSES: [&str; 8] = [
	"The automation journey begins with a single script.",
	"Testing is not just finding bugs, it's ensuring quality.",
	"CI/CD pipelines turn code into reliable software.",
	"Docker containers make deployment predictable.",
	"Playwright enables bulletproof end-to-end testing.",
	"Every commit should be potentially shippable.",
	"Automation frees developers to solve harder problems.",
	"Quality gates prevent bad code from reaching production.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
	/// The table was empty and this many rows were inserted.
	Seeded(u64),
	/// The table already held this many rows; nothing was inserted.
	Existing(i64),
}

pub(crate) async fn seed_if_empty(conn: &mut PgConnection) -> Result<SeedOutcome> {
	let existing = queries::count(&mut *conn).await?;

	if existing > 0 {
		return Ok(SeedOutcome::Existing(existing));
	}

	let mut builder = QueryBuilder::new("INSERT INTO responses (text) ");

	builder.push_values(SEED_RESPONSES, |mut row, text| {
		row.push_bind(text);
	});

	let result = builder.build().execute(&mut *conn).await?;

	Ok(SeedOutcome::Seeded(result.rows_affected()))
}
