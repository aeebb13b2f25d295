//! Library side of the `stockbook` command-line entry point.
//!
//! The binary only wires observability and the default ledger file; the
//! scripted sequence lives in [`demo`] so it can be exercised in tests.

pub mod demo;
