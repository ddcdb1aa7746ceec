use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::adapters::web::errors::ApiError;

const API_SECRET_FIELD: &str = "api_secret";

/// Admits a request body only when it is JSON carrying the shared secret.
///
/// Every rejection is a plain 403: an unparseable body, a missing or wrong
/// secret, and a body lacking the operation's fields look the same to the
/// caller.
#[derive(Clone)]
pub struct RequestGate {
	api_secret: String,
}

impl RequestGate {
	pub fn new(api_secret: impl Into<String>) -> Self {
		Self {
			api_secret: api_secret.into(),
		}
	}

	pub fn admit<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, ApiError> {
		let payload: Value = serde_json::from_slice(body).map_err(|e| {
			warn!("Rejected request with unparseable body: {e}");
			ApiError::Forbidden
		})?;

		match payload.get(API_SECRET_FIELD).and_then(Value::as_str) {
			Some(secret) if secret == self.api_secret => {}
			Some(_) => {
				warn!("Rejected request with invalid api_secret");
				return Err(ApiError::Forbidden);
			}
			None => {
				warn!("Rejected request without api_secret");
				return Err(ApiError::Forbidden);
			}
		}

		serde_json::from_value(payload).map_err(|e| {
			warn!("Rejected authorized request with invalid fields: {e}");
			ApiError::Forbidden
		})
	}
}
