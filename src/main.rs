use std::process::ExitCode;

fn main() -> ExitCode {
    match checkers_ui::driver::run_stdio() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
