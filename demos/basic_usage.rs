// ============================================================================
// Basic Usage Example
// ============================================================================

use simple_calculator::demo;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = demo::run() {
        eprintln!("failed to write calculator report: {}", err);
        std::process::exit(1);
    }
}
