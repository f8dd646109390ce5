use std::process::ExitCode;

mod cli;
mod ui;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(format!("{e:#}"));
            if let Some(hint) = cli::hint_for(&e) {
                ui::warning(hint);
            }
            ExitCode::FAILURE
        }
    }
}
