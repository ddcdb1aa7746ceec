use std::sync::Arc;

use webpay_gateway::infrastructure::config::settings::{Config, Environment};

#[actix_web::test]
async fn test_run_bind_error() {
	// Another process may already hold the port, which makes `run` fail all the same.
	let listener = std::net::TcpListener::bind(webpay_gateway::BIND_ADDRESS).ok();
	let config = Arc::new(Config {
		environment:      Environment::Integration,
		commerce_code:    "597055555532".to_string(),
		api_key:          "key".to_string(),
		api_secret:       "api_secret".to_string(),
		debug:            false,
		timeout_secs:     30,
		base_url:         None,
		server_keepalive: 75,
	});

	assert!(webpay_gateway::run(config).await.is_err());
	drop(listener);
}
