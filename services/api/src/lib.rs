mod cli;
mod demo;
mod infra;
mod render;
mod routes;
mod server;
mod terminal;

use life_batteries::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
