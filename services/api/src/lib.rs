mod check;
mod cli;
mod infra;
mod routes;
mod server;

use recruiting_mock::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
