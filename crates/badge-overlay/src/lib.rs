//! Top-level facade crate for badge-overlay.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use badge_overlay_core::*;
}

pub mod gateway {
    pub use badge_overlay_gateway::*;
}
