// Library target exists for the criterion benches and the integration
// tests. The binary entry point is main.rs; this file re-declares the
// module tree so harnesses can import types via `vocadr::app::*` /
// `vocadr::vocab::*`. Most code is only exercised through the binary, so
// suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by benches and tests/
pub mod api;
pub mod app;
pub mod config;
pub mod ui;
pub mod vocab;

// Private: binary-only plumbing, compiled here so it stays checked
mod event;
