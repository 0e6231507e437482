//! Lambda entry point serving one student operation per function.
//!
//! The operation is chosen at cold start from `--handler` or
//! `STUDENT_HANDLER`. The repository client is built once and reused for
//! every warm invocation.

use clap::Parser;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use studentinfo::{
    config::Config,
    lambda::{dispatch, HandlerKind},
    logging,
    state::build_repository,
    students::StudentHandlers,
};

#[derive(Parser, Debug)]
#[command(name = "student_lambda")]
#[command(version, about = "Student record handler for AWS Lambda", long_about = None)]
struct Cli {
    /// Operation served by this function: create, get, update or delete
    #[arg(long, env = "STUDENT_HANDLER")]
    handler: HandlerKind,
}

async fn handle_event(
    handlers: &StudentHandlers,
    kind: HandlerKind,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let request_id = event.context.request_id.clone();
    tracing::debug!(%request_id, handler = %kind, "invocation received");

    Ok(dispatch(handlers, kind, event.payload).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_json();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::info!(handler = %cli.handler, "using {}", config.target_display());

    let handlers = StudentHandlers::new(build_repository(&config).await?);
    let handlers = &handlers;
    let kind = cli.handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_event(handlers, kind, event).await
    }))
    .await
}
