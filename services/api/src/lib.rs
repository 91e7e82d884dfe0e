mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use campus_hub::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
