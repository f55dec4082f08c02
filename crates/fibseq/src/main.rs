//! FibSeq — Interactive Fibonacci sequence generator.

use fibseq_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Logs go to stderr so stdout carries only sequence text
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if let Err(e) = app::run(&config) {
        eprintln!("Error: {e:#}");
        std::process::exit(errors::exit_code(&e));
    }
}
