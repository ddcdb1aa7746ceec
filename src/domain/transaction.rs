use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body of a transaction creation call.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewTransaction {
	pub buy_order:  String,
	pub session_id: String,
	pub amount:     f64,
	pub return_url: String,
}

/// Handle returned by the provider for a freshly created transaction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransactionHandle {
	pub token: String,
	pub url:   String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CardDetail {
	#[serde(default)]
	pub card_number: Option<String>,
}

/// Balance fields only reported by a status query.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BalanceDetail {
	#[serde(default)]
	pub installments_amount: Option<Number>,
	#[serde(default)]
	pub balance:             Option<Number>,
}

/// Transaction as reported by a commit or a status query.
///
/// Amounts keep the provider's JSON number type, so integer CLP amounts stay
/// integers. Every field is always serialized, `null` when the provider did not
/// report it. `balance` is `None` for commit records, which leaves
/// `installments_amount` and `balance` out of the JSON entirely.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TransactionRecord {
	#[serde(default)]
	pub vci:                 Option<String>,
	#[serde(default)]
	pub amount:              Option<Number>,
	#[serde(default)]
	pub status:              Option<String>,
	#[serde(default)]
	pub buy_order:           Option<String>,
	#[serde(default)]
	pub session_id:          Option<String>,
	#[serde(default)]
	pub card_detail:         Option<CardDetail>,
	#[serde(default)]
	pub accounting_date:     Option<String>,
	#[serde(default)]
	pub transaction_date:    Option<String>,
	#[serde(default)]
	pub authorization_code:  Option<String>,
	#[serde(default)]
	pub payment_type_code:   Option<String>,
	#[serde(default)]
	pub response_code:       Option<i64>,
	#[serde(default)]
	pub installments_number: Option<i64>,
	#[serde(flatten)]
	pub balance:             Option<BalanceDetail>,
}

impl TransactionRecord {
	pub fn into_commit_record(mut self) -> Self {
		self.balance = None;
		self
	}

	pub fn into_status_record(mut self) -> Self {
		self.balance.get_or_insert_with(BalanceDetail::default);
		self
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;

	fn provider_body() -> Value {
		json!({
			"vci": "TSY",
			"amount": 100.0,
			"status": "AUTHORIZED",
			"buy_order": "EOL-00001",
			"session_id": "EOL-00001",
			"card_detail": {"card_number": "6623"},
			"accounting_date": "0601",
			"transaction_date": "2021-06-02T00:00:00.000Z",
			"authorization_code": "1213",
			"payment_type_code": "VN",
			"response_code": 0,
			"installments_number": 0
		})
	}

	#[test]
	fn test_commit_record_omits_balance_fields() {
		let record: TransactionRecord =
			serde_json::from_value(provider_body()).unwrap();

		let body = serde_json::to_value(record.into_commit_record()).unwrap();
		let fields = body.as_object().unwrap();

		assert_eq!(fields.len(), 12);
		assert!(!fields.contains_key("installments_amount"));
		assert!(!fields.contains_key("balance"));
		assert_eq!(body, provider_body());
	}

	#[test]
	fn test_status_record_reports_missing_fields_as_null() {
		let record: TransactionRecord = serde_json::from_value(json!({
			"status": "INITIALIZED",
			"amount": 100.0
		}))
		.unwrap();

		let body = serde_json::to_value(record.into_status_record()).unwrap();
		let fields = body.as_object().unwrap();

		assert_eq!(fields.len(), 14);
		assert_eq!(fields["status"], "INITIALIZED");
		assert_eq!(fields["authorization_code"], Value::Null);
		assert_eq!(fields["card_detail"], Value::Null);
		assert_eq!(fields["installments_amount"], Value::Null);
		assert_eq!(fields["balance"], Value::Null);
	}

	#[test]
	fn test_status_record_keeps_reported_balance() {
		let mut body = provider_body();
		body["amount"] = json!(1000);
		body["balance"] = json!(40);
		let record: TransactionRecord = serde_json::from_value(body).unwrap();

		let record = record.into_status_record();

		assert_eq!(
			record.balance,
			Some(BalanceDetail {
				installments_amount: None,
				balance:             Some(Number::from(40)),
			})
		);
		let body = serde_json::to_string(&record).unwrap();
		assert!(body.contains(r#""amount":1000,"#), "{body}");
		assert!(body.ends_with(r#""installments_amount":null,"balance":40}"#), "{body}");
	}
}
