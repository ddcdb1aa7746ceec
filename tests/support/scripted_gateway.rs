use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use webpay_gateway::domain::payment_gateway::{GatewayError, PaymentGateway};
use webpay_gateway::domain::transaction::{
	NewTransaction, TransactionHandle, TransactionRecord,
};

/// In-memory provider answering every call with a preset result and
/// recording what it was asked.
#[derive(Clone)]
pub struct ScriptedGateway {
	create: Result<TransactionHandle, GatewayError>,
	commit: Result<TransactionRecord, GatewayError>,
	status: Result<TransactionRecord, GatewayError>,
	calls:  Arc<Mutex<Vec<String>>>,
	orders: Arc<Mutex<Vec<NewTransaction>>>,
}

fn unscripted() -> GatewayError {
	GatewayError::transport("call was not scripted")
}

impl ScriptedGateway {
	pub fn new() -> Self {
		Self {
			create: Err(unscripted()),
			commit: Err(unscripted()),
			status: Err(unscripted()),
			calls:  Arc::new(Mutex::new(Vec::new())),
			orders: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn with_create(mut self, result: Result<TransactionHandle, GatewayError>) -> Self {
		self.create = result;
		self
	}

	pub fn with_commit(mut self, result: Result<TransactionRecord, GatewayError>) -> Self {
		self.commit = result;
		self
	}

	pub fn with_status(mut self, result: Result<TransactionRecord, GatewayError>) -> Self {
		self.status = result;
		self
	}

	/// Calls in order, as `operation:argument`.
	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}

	pub fn orders(&self) -> Vec<NewTransaction> {
		self.orders.lock().unwrap().clone()
	}

	fn record(&self, call: String) {
		self.calls.lock().unwrap().push(call);
	}
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
	async fn create(
		&self,
		transaction: NewTransaction,
	) -> Result<TransactionHandle, GatewayError> {
		self.record(format!("create:{}", transaction.buy_order));
		self.orders.lock().unwrap().push(transaction);
		self.create.clone()
	}

	async fn commit(&self, token: &str) -> Result<TransactionRecord, GatewayError> {
		self.record(format!("commit:{token}"));
		self.commit.clone()
	}

	async fn status(&self, token: &str) -> Result<TransactionRecord, GatewayError> {
		self.record(format!("status:{token}"));
		self.status.clone()
	}
}
