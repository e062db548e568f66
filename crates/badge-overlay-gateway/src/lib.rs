//! badge-overlay gateway library entry.
//!
//! Wires config, upstream access, role assets and card composition into an
//! axum router. It is consumed by the binary (`main.rs`), by hosts embedding
//! the routes directly (`embed`), and by integration tests.

pub mod app_state;
pub mod assets;
pub mod cards;
pub mod config;
pub mod embed;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod upstream;
