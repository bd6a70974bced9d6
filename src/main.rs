use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use completion_cli::{
    ApiKey, CompletionClient, CompletionProvider, CompletionRequest, CompletionsConfig, LlmError,
    load_env_file,
};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = match startup(None, &ApiKey::Default, CompletionClient::new) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    run(&client, &CompletionRequest::default(), &mut stdout).await;
    stdout.flush().ok();
    ExitCode::SUCCESS
}

/// Load the env file and API key, then hand the config to `connect`.
///
/// `connect` is only called once configuration has loaded.
fn startup<P, F>(env_file: Option<&Path>, api_key: &ApiKey, connect: F) -> Result<P, LlmError>
where
    F: FnOnce(CompletionsConfig) -> Result<P, LlmError>,
{
    load_env_file(env_file)?;
    let api_key = api_key.resolve()?;
    connect(CompletionsConfig::new(api_key))
}

#[derive(Debug, PartialEq)]
enum RunOutcome {
    Printed,
    NoChoices,
    ClientError,
    RemoteError,
}

/// One request, no retry. Failures are printed, not turned into an exit code.
async fn run(
    provider: &impl CompletionProvider,
    request: &CompletionRequest,
    out: &mut impl Write,
) -> RunOutcome {
    let response = match provider.fetch_completion(request).await {
        Ok(response) => response,
        Err(e) => {
            writeln!(out, "{e}").ok();
            return RunOutcome::ClientError;
        }
    };

    let outcome = match (response.api_error(), response.first_text()) {
        (Some(api_error), _) => {
            warn!(
                status = ?response.http_status,
                error_type = %api_error.r#type,
                "Completion API error: {}",
                api_error.message
            );
            RunOutcome::RemoteError
        }
        (None, Some(_)) => RunOutcome::Printed,
        (None, None) => RunOutcome::NoChoices,
    };

    if let Some(text) = response.first_text() {
        write!(out, "{text}").ok();
    }
    outcome
}
