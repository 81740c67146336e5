use anyhow::Result;
use calgate::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
