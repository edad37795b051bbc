/// Startup configuration, read once from the environment and passed down
/// explicitly. Nothing in here is process-global.
#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub bind_addr: String,
	pub log_spec: String,
}

impl Config {
	pub fn from_env() -> Self {
		Config {
			database_url: std::env::var("DATABASE_URL")
				.unwrap_or_else(|_| "sqlite:books.db?mode=rwc".to_string()),
			bind_addr: std::env::var("BIND_ADDR")
				.unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
			log_spec: std::env::var("RUST_LOG")
				.unwrap_or_else(|_| "info".to_string()),
		}
	}
}
