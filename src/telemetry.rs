//! Log line formatting

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    registry::LookupSpan,
    Layer,
};

/// `<timestamp> <LEVEL> <message>` lines, no colours and no target
pub fn log_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    W: for<'writer> MakeWriter<'writer> + 'static,
{
    fmt::layer().with_writer(writer).with_ansi(false).with_target(false)
}
