use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use log::info;

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod get_transaction_handler;
		pub mod process_webpay_handler;
		pub mod request_gate;
		pub mod routes;
		pub mod schema;
		pub mod transaction_status_handler;
	}
}

pub mod domain {
	pub mod payment_gateway;
	pub mod transaction;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod gateway {
		pub mod webpay_client;
	}
}

pub mod use_cases {
	pub mod commit_transaction;
	pub mod create_transaction;
	pub mod dto;
	pub mod get_transaction_status;
}

use crate::adapters::web::request_gate::RequestGate;
use crate::adapters::web::routes::TransactionServices;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateway::webpay_client::WebpayClient;

pub const BIND_ADDRESS: (&str, u16) = ("0.0.0.0", 5000);

/// Installs the global logger. `RUST_LOG` takes precedence over the
/// configured debug flag.
pub fn init_logging(debug: bool) {
	let default_level = if debug { "debug" } else { "info" };
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or(default_level),
	)
	.init();
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let gateway = WebpayClient::from_config(&config).map_err(std::io::Error::other)?;
	let services =
		TransactionServices::new(RequestGate::new(config.api_secret.as_str()), gateway);

	info!(
		"Using {:?} payment provider at {}",
		config.environment,
		config.provider_base_url()
	);
	info!("Starting Actix-Web server on {}:{}...", BIND_ADDRESS.0, BIND_ADDRESS.1);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.configure(|cfg| services.configure(cfg))
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(BIND_ADDRESS)?
	.run()
	.await
}
