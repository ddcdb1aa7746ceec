use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionRecord;

/// Response code reported when the provider refused to disclose the
/// transaction.
pub const FAILED_RESPONSE_CODE: i64 = -1;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CreateTransactionCommand {
	pub order_number: String,
	pub amount:       f64,
	pub return_url:   String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FailureRecord {
	pub response_code: i64,
	pub reason:        String,
}

impl FailureRecord {
	pub fn new(reason: impl Into<String>) -> Self {
		Self {
			response_code: FAILED_RESPONSE_CODE,
			reason:        reason.into(),
		}
	}
}

/// What a commit or status query tells the caller: either the provider's
/// record or a failure marker. Both serialize as a flat JSON object.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TransactionOutcome {
	Record(TransactionRecord),
	Failure(FailureRecord),
}
