use severity_notify::settings::DemoConfig;

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    // The provided listeners contain their own failures, so this only reports
    // errors from listeners added later.
    if let Err(e) = severity_notify::demo::run(&DemoConfig::default()) {
        eprintln!("{}", e);
    }
}

/// Log to stderr so stdout only carries notification lines. The level is
/// fixed; the binary reads no environment variables.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("error"))
        .with_writer(std::io::stderr)
        .try_init();
}
