//! OpenTelemetry-based observability with file-based trace export.
//!
//! Every operation in the crate logs through `tracing` macros and spans. When
//! the host opts in with [`init_tracing`], those spans flow through
//! `tracing-opentelemetry` into a file exporter:
//!
//! ```text
//! tracing spans → OpenTelemetryLayer → TracerProvider → OtlpFileExporter → docnav-otlp.json
//! ```
//!
//! The trace file lives in the data directory and rotates at 10 MiB, keeping
//! three numbered backups (`docnav-otlp.json.1` is the newest).
//!
//! Filter resolution: `RUST_LOG`, then `Config::trace_level`, then `"info"`.
//!
//! # Modules
//!
//! - `init`: subscriber installation
//! - `exporter`: OTLP JSON span exporter and tracer provider
//! - `rotation`: size-rotated line file

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, TRACE_FILE};
