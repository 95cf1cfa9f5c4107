//! AWS Lambda function echoing routing metadata.
//!
//! Answers behind an Application Load Balancer, API Gateway, or a function
//! URL, shaping the response for whichever front door invoked it.

use lambda_runtime::{service_fn, Error};
use tracing::info;

use edge_echo_lambda::{handler, init_tracing, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(&LoggingConfig::from_env());

    info!("starting edge-echo Lambda");

    lambda_runtime::run(service_fn(handler)).await
}
