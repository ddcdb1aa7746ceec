use crate::domain::payment_gateway::{GatewayError, PaymentGateway};
use crate::domain::transaction::{NewTransaction, TransactionHandle};
use crate::use_cases::dto::CreateTransactionCommand;

#[derive(Clone)]
pub struct CreateTransactionUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> CreateTransactionUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	/// The order number doubles as the provider session id.
	pub async fn execute(
		&self,
		command: CreateTransactionCommand,
	) -> Result<TransactionHandle, GatewayError> {
		let transaction = NewTransaction {
			buy_order:  command.order_number.clone(),
			session_id: command.order_number,
			amount:     command.amount,
			return_url: command.return_url,
		};

		self.gateway.create(transaction).await
	}
}
