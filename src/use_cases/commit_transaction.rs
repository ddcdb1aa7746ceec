use log::warn;

use crate::domain::payment_gateway::{GatewayError, PaymentGateway};
use crate::use_cases::dto::TransactionOutcome;
use crate::use_cases::get_transaction_status::GetTransactionStatusUseCase;

#[derive(Clone)]
pub struct CommitTransactionUseCase<G: PaymentGateway + Clone> {
	gateway: G,
	status:  GetTransactionStatusUseCase<G>,
}

impl<G: PaymentGateway + Clone> CommitTransactionUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self {
			status: GetTransactionStatusUseCase::new(gateway.clone()),
			gateway,
		}
	}

	/// Acknowledges the transaction. When the provider refuses the commit the
	/// current status is reported instead.
	pub async fn execute(
		&self,
		token: &str,
	) -> Result<TransactionOutcome, GatewayError> {
		match self.gateway.commit(token).await {
			Ok(record) => Ok(TransactionOutcome::Record(record)),
			Err(GatewayError::CommitRejected { message }) => {
				warn!("Commit rejected by provider ({message}), querying status");
				self.status.execute(token).await
			}
			Err(e) => Err(e),
		}
	}
}
