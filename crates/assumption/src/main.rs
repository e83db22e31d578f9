use std::process;

use assumption::cli::{build_cli, handlers};

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    if let Err(err) = handlers::dispatch(&matches) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err:#}");
        }

        let code = err
            .downcast_ref::<assumption_core::Error>()
            .map_or(1, assumption_core::Error::exit_code);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
