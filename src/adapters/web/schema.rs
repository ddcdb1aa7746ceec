use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Callers send identifiers and amounts either as JSON strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
	Text(String),
	Number(serde_json::Number),
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreateTransactionRequest {
	#[serde(deserialize_with = "loose_string")]
	pub order_number:   String,
	#[serde(deserialize_with = "positive_amount")]
	pub total_incl_tax: f64,
	pub notify_url:     String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenRequest {
	#[serde(deserialize_with = "non_empty_token")]
	pub token: String,
}

fn non_empty_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let token = String::deserialize(deserializer)?;
	if token.trim().is_empty() {
		return Err(D::Error::custom("token can't be empty"));
	}
	Ok(token)
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Loose::deserialize(deserializer)? {
		Loose::Text(text) => text,
		Loose::Number(number) => number.to_string(),
	})
}

fn positive_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	let amount = match Loose::deserialize(deserializer)? {
		Loose::Text(text) => text.trim().parse::<f64>().map_err(|_| {
			D::Error::custom(format!("amount '{text}' is not a number"))
		})?,
		Loose::Number(number) => number
			.as_f64()
			.ok_or_else(|| D::Error::custom("amount is not representable"))?,
	};

	if amount.is_finite() && amount > 0.0 {
		Ok(amount)
	} else {
		Err(D::Error::custom(format!("amount {amount} must be positive")))
	}
}
