use actix_web::{HttpResponse, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::request_gate::RequestGate;
use crate::adapters::web::schema::CreateTransactionRequest;
use crate::domain::payment_gateway::PaymentGateway;
use crate::use_cases::create_transaction::CreateTransactionUseCase;
use crate::use_cases::dto::CreateTransactionCommand;

pub async fn process_webpay<G: PaymentGateway>(
	body: web::Bytes,
	gate: web::Data<RequestGate>,
	create_transaction_use_case: web::Data<CreateTransactionUseCase<G>>,
) -> Result<HttpResponse, ApiError> {
	let request: CreateTransactionRequest = gate.admit(&body)?;
	let order_number = request.order_number.clone();

	let command = CreateTransactionCommand {
		order_number: request.order_number,
		amount:       request.total_incl_tax,
		return_url:   request.notify_url,
	};

	match create_transaction_use_case.execute(command).await {
		Ok(handle) => {
			info!("Transaction created for order {order_number}");
			Ok(HttpResponse::Ok().json(handle))
		}
		Err(e) => {
			error!("Could not create transaction for order {order_number}: {e}");
			Err(e.into())
		}
	}
}
