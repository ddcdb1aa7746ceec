use std::sync::Arc;

use webpay_gateway::infrastructure::config::settings::Config;
use webpay_gateway::{init_logging, run};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(Config::load().map_err(std::io::Error::other)?);
	init_logging(config.debug);
	run(config).await
}
