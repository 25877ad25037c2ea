//! Tracing with OpenTelemetry spans exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → OtlpFileExporter → rotating file
//! ```
//!
//! Every exported batch becomes one line of OTLP JSON in
//! `<data_dir>/linkhub-otlp.json`. The file is rotated by size and a few
//! numbered generations are kept. The level comes from the `trace_level`
//! plugin option and defaults to `info`.

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::init_tracing;
pub use rotating::RotatingFile;
