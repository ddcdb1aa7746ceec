use actix_web::web;

use crate::adapters::web::get_transaction_handler::get_transaction;
use crate::adapters::web::process_webpay_handler::process_webpay;
use crate::adapters::web::request_gate::RequestGate;
use crate::adapters::web::transaction_status_handler::transaction_status;
use crate::domain::payment_gateway::PaymentGateway;
use crate::use_cases::commit_transaction::CommitTransactionUseCase;
use crate::use_cases::create_transaction::CreateTransactionUseCase;
use crate::use_cases::get_transaction_status::GetTransactionStatusUseCase;

/// Shared state behind the three transaction endpoints.
#[derive(Clone)]
pub struct TransactionServices<G: PaymentGateway + Clone> {
	gate:   web::Data<RequestGate>,
	create: web::Data<CreateTransactionUseCase<G>>,
	commit: web::Data<CommitTransactionUseCase<G>>,
	status: web::Data<GetTransactionStatusUseCase<G>>,
}

impl<G: PaymentGateway + Clone> TransactionServices<G> {
	pub fn new(gate: RequestGate, gateway: G) -> Self {
		Self {
			gate:   web::Data::new(gate),
			create: web::Data::new(CreateTransactionUseCase::new(gateway.clone())),
			commit: web::Data::new(CommitTransactionUseCase::new(gateway.clone())),
			status: web::Data::new(GetTransactionStatusUseCase::new(gateway)),
		}
	}

	pub fn configure(&self, cfg: &mut web::ServiceConfig) {
		cfg.app_data(self.gate.clone())
			.app_data(self.create.clone())
			.app_data(self.commit.clone())
			.app_data(self.status.clone())
			.service(
				web::resource("/process-webpay")
					.route(web::post().to(process_webpay::<G>)),
			)
			.service(
				web::resource("/get-transaction")
					.route(web::post().to(get_transaction::<G>)),
			)
			.service(
				web::resource("/transaction-status")
					.route(web::post().to(transaction_status::<G>)),
			);
	}
}
