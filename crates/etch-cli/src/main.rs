use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = etch_cli::build_cli().get_matches();
    etch_cli::init_tracing(matches.get_count("verbose"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match etch_cli::run(&matches, &mut out).and_then(|()| out.flush().map_err(Into::into)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
