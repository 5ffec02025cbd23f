use serde::Deserialize;

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";
/// Origin list entry that admits every origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	/// Comma-separated list of origins allowed to make cross-origin requests. `*` admits any
	/// origin; an empty list admits none.
	#[serde(default = "default_cors_origins")]
	pub cors_origins: String,
}
impl Service {
	pub fn allowed_origins(&self) -> Vec<String> {
		parse_origins(&self.cors_origins)
	}

	pub fn allows_any_origin(&self) -> bool {
		self.allowed_origins().iter().any(|origin| origin == ANY_ORIGIN)
	}
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Splits a comma-separated origin list, trimming each item and dropping empty ones.
pub fn parse_origins(raw: &str) -> Vec<String> {
	raw.split(',').map(str::trim).filter(|origin| !origin.is_empty()).map(String::from).collect()
}

fn default_cors_origins() -> String {
	DEFAULT_CORS_ORIGINS.to_string()
}
