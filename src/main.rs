use clap::Parser;
use shipform::config::Arguments;
use shipform::{Server, SubmitAddress, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), shipform::Error> {
    let args = Arguments::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .init();
    info!("running shipform with validated arguments:\n{args}");

    let action = SubmitAddress::new(args.submit_delay);
    info!(delay = ?action.delay(), "submissions are delayed before processing");

    Server::bind(args.bind_address).await?.serve(app(action)).await
}
