mod cli;

use colored::Colorize;
use gcovr_action::GcovrError;

fn main() {
    // gcovr failures exit with gcovr's own code.
    if let Err(err) = cli::run() {
        eprintln!("{}", format!("error: {err:#}").red());
        let code = match err.downcast_ref::<GcovrError>() {
            Some(GcovrError::ExecutionFailure { code: Some(c), .. }) if *c != 0 => *c,
            _ => 1,
        };
        std::process::exit(code);
    }
}
