use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::payment_gateway::{GatewayError, PaymentGateway};
use crate::domain::transaction::{
	NewTransaction, TransactionHandle, TransactionRecord,
};
use crate::infrastructure::config::settings::Config;

pub const TRANSACTIONS_PATH: &str =
	"/rswebpaytransaction/api/webpay/v1.2/transactions";

const API_KEY_ID_HEADER: &str = "Tbk-Api-Key-Id";
const API_KEY_SECRET_HEADER: &str = "Tbk-Api-Key-Secret";
const INVALID_TOKEN: &str = "Invalid transaction token";

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
	error_message: Option<String>,
}

/// Webpay Plus REST client. One type serves every environment; only the
/// base URL and the commerce credentials change.
#[derive(Clone)]
pub struct WebpayClient {
	http_client:   Client,
	base_url:      String,
	commerce_code: String,
	api_key:       String,
}

impl WebpayClient {
	pub fn new(
		base_url: impl Into<String>,
		commerce_code: impl Into<String>,
		api_key: impl Into<String>,
		timeout: Duration,
	) -> Result<Self, reqwest::Error> {
		let http_client = Client::builder().timeout(timeout).build()?;

		Ok(Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			commerce_code: commerce_code.into(),
			api_key: api_key.into(),
		})
	}

	pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
		Self::new(
			config.provider_base_url(),
			config.commerce_code.as_str(),
			config.api_key.as_str(),
			Duration::from_secs(config.timeout_secs),
		)
	}

	/// The token, when given, is appended as a single percent-encoded path
	/// segment so it cannot address anything but its own transaction.
	fn request(
		&self,
		method: Method,
		token: Option<&str>,
	) -> Result<RequestBuilder, GatewayError> {
		let mut url = Url::parse(&format!("{}{TRANSACTIONS_PATH}", self.base_url))
			.map_err(GatewayError::transport)?;
		if let Some(token) = token {
			url.path_segments_mut()
				.map_err(|_| {
					GatewayError::transport(format!(
						"base URL {} cannot carry a path",
						self.base_url
					))
				})?
				.push(token);
		}

		Ok(self
			.http_client
			.request(method, url)
			.header(API_KEY_ID_HEADER, &self.commerce_code)
			.header(API_KEY_SECRET_HEADER, &self.api_key)
			.header(CONTENT_TYPE, "application/json"))
	}

	async fn send<T, F>(
		&self,
		request: RequestBuilder,
		rejected: F,
	) -> Result<T, GatewayError>
	where
		T: DeserializeOwned,
		F: FnOnce(String) -> GatewayError,
	{
		let response = request.send().await.map_err(GatewayError::transport)?;
		let status = response.status();

		if status.is_success() {
			return response.json::<T>().await.map_err(GatewayError::transport);
		}

		let message = match response.json::<ProviderErrorBody>().await {
			Ok(ProviderErrorBody {
				error_message: Some(message),
			}) => message,
			_ => format!("Payment provider answered with status {status}"),
		};
		debug!("Provider rejected request with status {status}: {message}");
		Err(rejected(message))
	}
}

/// Empty and dot-segment tokens would resolve to the collection itself.
fn is_valid_token(token: &str) -> bool {
	!matches!(token, "" | "." | "..")
}

#[async_trait]
impl PaymentGateway for WebpayClient {
	async fn create(
		&self,
		transaction: NewTransaction,
	) -> Result<TransactionHandle, GatewayError> {
		let request = self.request(Method::POST, None)?.json(&transaction);
		self.send(request, |message| GatewayError::CreateRejected { message })
			.await
	}

	async fn commit(&self, token: &str) -> Result<TransactionRecord, GatewayError> {
		if !is_valid_token(token) {
			return Err(GatewayError::CommitRejected {
				message: INVALID_TOKEN.to_string(),
			});
		}
		let request = self.request(Method::PUT, Some(token))?;
		let record: TransactionRecord = self
			.send(request, |message| GatewayError::CommitRejected { message })
			.await?;
		Ok(record.into_commit_record())
	}

	async fn status(&self, token: &str) -> Result<TransactionRecord, GatewayError> {
		if !is_valid_token(token) {
			return Err(GatewayError::StatusRejected {
				message: INVALID_TOKEN.to_string(),
			});
		}
		let request = self.request(Method::GET, Some(token))?;
		let record: TransactionRecord = self
			.send(request, |message| GatewayError::StatusRejected { message })
			.await?;
		Ok(record.into_status_record())
	}
}
