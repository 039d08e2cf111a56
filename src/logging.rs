use tracing_subscriber::filter::EnvFilter;

/// Target of the events emitted by the account model.
static LIB_NAME: &str = "bank_manager";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn set_up() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{LIB_NAME}=info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(true)
        .init();
}
