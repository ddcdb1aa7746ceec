use actix_web::{HttpResponse, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::request_gate::RequestGate;
use crate::adapters::web::schema::TokenRequest;
use crate::domain::payment_gateway::PaymentGateway;
use crate::use_cases::commit_transaction::CommitTransactionUseCase;

pub async fn get_transaction<G: PaymentGateway + Clone>(
	body: web::Bytes,
	gate: web::Data<RequestGate>,
	commit_transaction_use_case: web::Data<CommitTransactionUseCase<G>>,
) -> Result<HttpResponse, ApiError> {
	let request: TokenRequest = gate.admit(&body)?;

	match commit_transaction_use_case.execute(&request.token).await {
		Ok(outcome) => {
			info!("Commit handled for transaction {}", request.token);
			Ok(HttpResponse::Ok().json(outcome))
		}
		Err(e) => {
			error!("Could not commit transaction {}: {e}", request.token);
			Err(e.into())
		}
	}
}
