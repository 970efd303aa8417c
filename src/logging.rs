//! Structured logging via `tracing`.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub(crate) const FALLBACK_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, then `configured`, then `info`.
fn make_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Swaps the filter of the installed subscriber.
pub struct FilterHandle(reload::Handle<EnvFilter, Registry>);

impl FilterHandle {
    /// Applies `configured` to the running subscriber. `RUST_LOG` still wins.
    pub fn set_filter(&self, configured: &str) {
        if let Err(e) = self.0.reload(make_filter(configured)) {
            tracing::warn!("failed to apply log filter {configured:?}: {e}");
        }
    }
}

/// Installs the global subscriber.
///
/// Returns `None` if a subscriber was already installed, in which case
/// nothing changes.
#[cfg(not(target_family = "wasm"))]
pub fn init(configured: &str) -> Option<FilterHandle> {
    let (filter, handle) = reload::Layer::new(make_filter(configured));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .ok()
        .map(|()| FilterHandle(handle))
}

/// Installs the global subscriber, writing to the browser console.
///
/// Returns `None` if a subscriber was already installed.
#[cfg(target_family = "wasm")]
pub fn init(configured: &str) -> Option<FilterHandle> {
    let (filter, handle) = reload::Layer::new(make_filter(configured));
    let console_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(|| console::ConsoleWriter::default());

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .ok()
        .map(|()| FilterHandle(handle))
}

#[cfg(target_family = "wasm")]
mod console {
    use std::io::{self, Write};

    /// Buffers one formatted event and logs it when dropped.
    #[derive(Default)]
    pub(super) struct ConsoleWriter(Vec<u8>);

    impl Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.0);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&line.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_falls_back() {
        let filter = make_filter("this is [not a filter");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_init_twice() {
        let first = init("debug");
        let second = init("info");
        assert!(first.is_none() || second.is_none());
        assert!(tracing::dispatcher::has_been_set());
        if let Some(handle) = first.or(second) {
            handle.set_filter("solar_system_sim=trace");
            handle.set_filter("this is [not a filter");
        }
        tracing::info!("logging initialized twice without panicking");
    }
}
