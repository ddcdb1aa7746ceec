use serde_json::{Value, json};
use webpay_gateway::domain::transaction::TransactionRecord;

/// Status record as Webpay reports a transaction still waiting for payment.
pub fn status_body() -> Value {
	json!({
		"vci": "TSY",
		"amount": 100.0,
		"status": "INITIALIZED",
		"buy_order": "EOL-00001",
		"session_id": "EOL-00001",
		"card_detail": {"card_number": "XXXX"},
		"accounting_date": "0601",
		"transaction_date": "2021-06-02T00:00:00.000Z",
		"authorization_code": null,
		"payment_type_code": "VD",
		"response_code": null,
		"installments_number": 0,
		"installments_amount": null,
		"balance": null
	})
}

/// Commit record: authorized, without the balance fields.
pub fn commit_body() -> Value {
	let mut body = status_body();
	let fields = body.as_object_mut().unwrap();
	fields.insert("status".to_string(), json!("AUTHORIZED"));
	fields.remove("installments_amount");
	fields.remove("balance");
	body
}

pub fn status_record() -> TransactionRecord {
	serde_json::from_value::<TransactionRecord>(status_body())
		.unwrap()
		.into_status_record()
}

pub fn commit_record() -> TransactionRecord {
	serde_json::from_value::<TransactionRecord>(commit_body())
		.unwrap()
		.into_commit_record()
}
