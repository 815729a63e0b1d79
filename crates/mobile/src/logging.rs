use std::sync::Once;

use tracing_subscriber::{
    filter::FilterFn, fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Routes `tracing` output from this library to logcat on Android and to
/// stderr elsewhere. Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = FilterFn::new(|metadata| {
            metadata
                .module_path()
                .unwrap_or_default()
                .starts_with("treasure_hunt")
        });

        #[cfg(target_os = "android")]
        let layer = {
            use tracing_logcat::{LogcatMakeWriter, LogcatTag};

            let tag = LogcatTag::Fixed("TreasureHunt-Rust".to_owned());
            let writer = match LogcatMakeWriter::new(tag) {
                Ok(writer) => writer,
                Err(error) => {
                    eprintln!("failed to initialize logcat writer: {error}");
                    return;
                }
            };
            tracing_subscriber::fmt::layer()
                .event_format(Format::default().with_level(false).without_time())
                .with_writer(writer)
                .with_ansi(false)
        };

        #[cfg(not(target_os = "android"))]
        let layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().without_time())
            .with_writer(std::io::stderr);

        // Another subscriber may already be installed by the embedding app.
        let _ = tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init();
    })
}
