use clap::Parser;
use colored::Colorize;

use ipv4_aggregate::cli::{Cli, InputConfig};
use ipv4_aggregate::output::print_networks;

/// Initialize log4rs from `log4rs.yml`, falling back to a plain stderr
/// appender when the file is not around (e.g. the binary runs outside the
/// repository).
fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        use log4rs::append::console::{ConsoleAppender, Target};
        use log4rs::config::{Appender, Config, Root};

        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(
                Root::builder()
                    .appender("stderr")
                    .build(log::LevelFilter::Warn),
            )
            .expect("default logging config is valid");
        let _ = log4rs::init_config(config);
    }
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    log::info!("#Start main()");

    let run = InputConfig::try_from(Cli::parse())
        .and_then(|config| ipv4_aggregate::run(&config));

    let result = match run {
        Ok(result) => result,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "Error:".red());
            std::process::exit(1);
        }
    };

    if let Err(e) = print_networks(&result) {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}
