//! judge-submit - Terminal submission view
//!
//! Usage: `judge-submit <problem-id> <language|auto> [<file>]`
//!
//! Without a file, the solution is read from stdin as typed code. `auto`
//! picks the language from the file's extension.
//!
//! Exit status: 0 when every test case passed, 1 when some failed or the
//! submission could not be graded, 2 for usage or validation errors.

use std::process::ExitCode;

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use judge_client::{
    config::CONFIG,
    models::{accepted_file_types, LanguageOption, UploadedFile, LANGUAGE_OPTIONS},
    utils::is_accepted_file_name,
    ClientError, ClientState, SubmissionController, SubmitAttempt,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (problem_id, language, file) = match args.as_slice() {
        [problem_id, language] => (problem_id, language, None),
        [problem_id, language, file] => (problem_id, language, Some(file)),
        _ => {
            let names: Vec<_> = LANGUAGE_OPTIONS
                .iter()
                .map(|lang| format!("{} ({})", lang.name, lang.id))
                .collect();
            eprintln!("usage: judge-submit <problem-id> <language|auto> [<file>]");
            eprintln!("languages: {}", names.join(", "));
            return Ok(ExitCode::from(2));
        }
    };

    let language = match (language.as_str(), file) {
        ("auto", Some(path)) => LanguageOption::for_file_name(path),
        ("auto", None) => None,
        (name, _) => LanguageOption::parse(name),
    }
    .ok_or_else(|| ClientError::UnsupportedLanguage(language.clone()))?;

    let state = ClientState::new(CONFIG.clone())?;
    let controller = SubmissionController::new(problem_id.as_str(), state.grading_backend());
    controller.select_language(Some(language));

    match file {
        Some(path) => {
            if !is_accepted_file_name(path) {
                tracing::warn!(
                    file = %path,
                    accepted = %accepted_file_types(),
                    "File type is not one the judge usually accepts"
                );
            }
            let upload = UploadedFile::from_path(path)
                .await
                .with_context(|| format!("Failed to read {path}"))?;
            controller.set_uploaded_file(Some(upload));
        }
        None => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .context("Failed to read solution from stdin")?;
            controller.set_typed_code(code);
        }
    }

    tracing::info!("Submitting to {}", CONFIG.api.base_url);

    match controller.submit().await {
        SubmitAttempt::Finished(Ok(outcome)) => {
            if let Some(rendered) = controller.rendered_outcome() {
                print!("{rendered}");
            }
            if outcome.all_passed() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        SubmitAttempt::Finished(Err(err)) => {
            eprintln!("{err}");
            if err.is_local() {
                Ok(ExitCode::from(2))
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        SubmitAttempt::Ignored | SubmitAttempt::Discarded => Ok(ExitCode::FAILURE),
    }
}
