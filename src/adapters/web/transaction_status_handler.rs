use actix_web::{HttpResponse, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::request_gate::RequestGate;
use crate::adapters::web::schema::TokenRequest;
use crate::domain::payment_gateway::PaymentGateway;
use crate::use_cases::get_transaction_status::GetTransactionStatusUseCase;

pub async fn transaction_status<G: PaymentGateway>(
	body: web::Bytes,
	gate: web::Data<RequestGate>,
	get_transaction_status_use_case: web::Data<GetTransactionStatusUseCase<G>>,
) -> Result<HttpResponse, ApiError> {
	let request: TokenRequest = gate.admit(&body)?;

	match get_transaction_status_use_case.execute(&request.token).await {
		Ok(outcome) => {
			info!("Status reported for transaction {}", request.token);
			Ok(HttpResponse::Ok().json(outcome))
		}
		Err(e) => {
			error!("Could not query transaction {}: {e}", request.token);
			Err(e.into())
		}
	}
}
