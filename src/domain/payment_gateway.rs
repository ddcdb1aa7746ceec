use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::transaction::{
	NewTransaction, TransactionHandle, TransactionRecord,
};

/// Failure of a call against the payment provider.
///
/// The `*Rejected` variants mean the provider answered and refused the
/// operation; `Transport` means no usable answer came back at all.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum GatewayError {
	#[display("{message}")]
	CreateRejected { message: String },
	#[display("{message}")]
	CommitRejected { message: String },
	#[display("{message}")]
	StatusRejected { message: String },
	#[display("Payment provider unreachable: {message}")]
	Transport { message: String },
}

impl GatewayError {
	pub fn transport(error: impl std::fmt::Display) -> Self {
		GatewayError::Transport {
			message: error.to_string(),
		}
	}
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn create(
		&self,
		transaction: NewTransaction,
	) -> Result<TransactionHandle, GatewayError>;

	async fn commit(&self, token: &str) -> Result<TransactionRecord, GatewayError>;

	async fn status(&self, token: &str) -> Result<TransactionRecord, GatewayError>;
}
