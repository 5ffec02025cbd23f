mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	ANY_ORIGIN, Config, DEFAULT_CORS_ORIGINS, Postgres, Service, Storage, parse_origins,
};

use std::{env, fs, path::Path};

/// Environment variable that replaces `service.cors_origins` when set.
pub const CORS_ORIGINS_ENV: &str = "CORS_ORIGINS";

pub fn load(path: &Path) -> Result<Config> {
	load_with_cors_override(path, env::var(CORS_ORIGINS_ENV).ok())
}

pub fn load_with_cors_override(path: &Path, cors_origins: Option<String>) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	if let Some(origins) = cors_origins {
		cfg.service.cors_origins = origins;
	}

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.cors_origins = cfg.service.allowed_origins().join(",");

	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
