use principal_auth::{cli, Error};

fn main() {
    // Install global collector configured based on PRINCIPAL_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("PRINCIPAL_LOG"))
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_thread_ids(true)
        .init();

    if let Err(err) = cli::parse().run() {
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &Error) -> i32 {
    eprintln!("{}", err);
    if err.is_input_error() {
        2
    } else {
        1
    }
}
