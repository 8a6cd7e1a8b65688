//! Observability setup for lchat: tracing subscriber initialization and
//! shared span attribute names.

pub mod genai_attrs;
pub mod tracing_setup;
