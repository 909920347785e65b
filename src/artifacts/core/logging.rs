use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `tokdiff=debug`
pub const LOG_ENV: &str = "TOKDIFF_LOG";

static INIT_ONCE: Once = Once::new();

/// Level used when `TOKDIFF_LOG` is not set, one step per `-v`
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "tokdiff=warn",
        1 => "tokdiff=info",
        2 => "tokdiff=debug",
        _ => "tokdiff=trace",
    }
}

/// Install the stderr subscriber; later calls are no-ops
pub fn init(verbosity: u8, ansi: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(false)
            .try_init();
    });
}
