// src/main.rs

use branchgate::{cli, logging, run};

fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("branchgate error: {err:?}");
        std::process::exit(1);
    }

    match run(args) {
        // Dry run: nothing evaluated.
        Ok(None) => {}
        Ok(Some(true)) => println!("build"),
        Ok(Some(false)) => {
            println!("skip");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("branchgate error: {err:?}");
            std::process::exit(1);
        }
    }
}
