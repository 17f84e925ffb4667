use clap::Parser;
use std::process::ExitCode;
use tiang_app::cli::{self, Cli};
use tiang_app::logging::{init_logging, resolve_level};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(resolve_level(cli.verbose), cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    match cli::run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!(target: "CLI", "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
