//! Sheethook webhook receiver - AWS Lambda Runtime

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use sheethook_app::create_app;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time()
        .init();

    info!("Initializing Sheethook webhook Lambda");

    let app = create_app().layer(TraceLayer::new_for_http());

    info!("Sheethook webhook Lambda ready to serve requests");

    run(app).await
}
