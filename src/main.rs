// book catalogue

use log::info;
use sqlx::sqlite::SqlitePoolOptions;

use bookshelf::config::Config;
use bookshelf::routes;
use bookshelf::sql::BookStore;

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();
	let cfg = Config::from_env();

	// RUST_LOG wins over the config default
	let _logger = flexi_logger::Logger::try_with_env_or_str(&cfg.log_spec)
		.expect("bad log spec")
		.start()
		.expect("can't start logger");

	// set up connection pool
	let pool = SqlitePoolOptions::new()
		.max_connections(5)
		.acquire_timeout(std::time::Duration::from_secs(3))
		.connect(&cfg.database_url)
		.await
		.expect("can't connect to database");

	let store = BookStore::new(pool);
	store.init_schema().await.expect("can't apply table schema");

	let app = routes::router(store);

	info!("serving on {}", cfg.bind_addr);
	let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
		.await
		.expect("can't bind listen address");
	axum::serve(listener, app).await.expect("server failed");
}
