use std::process::ExitCode;

fn main() -> ExitCode {
    match up_cli::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            up_cli::ui::output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
