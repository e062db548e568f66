//! badge-overlay core: transport-agnostic card composition.
//!
//! This crate holds the request-scoped logic shared by every card endpoint:
//! parameter resolution, SVG fragment extraction and document composition,
//! plus the error surface used by the gateway. It carries no transport or
//! runtime dependencies so it can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `OverlayError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod card;
pub mod compose;
pub mod error;
pub mod fragment;
pub mod params;

/// Shared result type.
pub use error::{Result, OverlayError};

pub use card::Card;
pub use compose::{compose, Composition};
pub use fragment::extract_inner_fragment;
pub use params::CardParams;
