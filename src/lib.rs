//! Traceview - a terminal viewer for recorded telemetry sessions
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod chart;
pub mod cli;
pub mod grouping;
pub mod logging;
pub mod models;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod websocket;
