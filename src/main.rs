//! pyinit's main application entry point.

use pyinit::{cli::get_args, error::default_error_handler, logger::init_logger, runner::run};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
