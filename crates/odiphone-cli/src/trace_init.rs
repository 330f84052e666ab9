#[cfg(feature = "trace")]
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("odiphone_core=debug,odiphone_cli=debug")
                }),
        )
        .init();
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
