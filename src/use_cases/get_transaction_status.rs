use log::warn;

use crate::domain::payment_gateway::{GatewayError, PaymentGateway};
use crate::use_cases::dto::{FailureRecord, TransactionOutcome};

#[derive(Clone)]
pub struct GetTransactionStatusUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> GetTransactionStatusUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	/// A provider refusal becomes a failure outcome; only transport errors
	/// are returned as `Err`.
	pub async fn execute(
		&self,
		token: &str,
	) -> Result<TransactionOutcome, GatewayError> {
		match self.gateway.status(token).await {
			Ok(record) => Ok(TransactionOutcome::Record(record)),
			Err(GatewayError::StatusRejected { message }) => {
				warn!("Status query rejected by provider: {message}");
				Ok(TransactionOutcome::Failure(FailureRecord::new(message)))
			}
			Err(e) => Err(e),
		}
	}
}
