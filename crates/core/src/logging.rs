use tracing_subscriber::EnvFilter;

/// Initializes tracing output for tests and ad-hoc binaries.
///
/// Honors `RUST_LOG`; defaults to `info` for this crate so each façade
/// operation leaves a step trail in the test output. Safe to call from
/// every test, repeat calls are ignored.
pub fn init() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bookshop=debug"));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.try_init();
}
