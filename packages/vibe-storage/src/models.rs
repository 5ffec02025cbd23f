use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ResponseEntry {
	pub id: i64,
	pub text: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct ResponseCounter {
	pub id: i32,
	pub current_index: i64,
}
