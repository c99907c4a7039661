//! Foundational types shared across the gateway's crates.
//!
//! Kept deliberately small: this crate sits at the bottom of the dependency
//! graph, so it only carries what genuinely has no better home -- the
//! tracing bootstrap and the error taxonomy/digest utility every backend
//! shares. Backend-specific types (configs, model specs) live in the crates
//! that own them.

pub mod digest;
pub mod error;
pub mod logging;

pub use digest::{compare, digest as fingerprint};
pub use error::{GatewayError, Result};
pub use logging::init_tracing;
