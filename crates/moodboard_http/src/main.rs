use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match moodboard_http::run_from_env().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Logging may not be up yet.
            eprintln!("moodboard: {err}");
            ExitCode::FAILURE
        }
    }
}
