//! ONNX Runtime session loading and execution-provider bridging shared by
//! the embedding and chat backends.

pub mod error;
pub mod providers_bridge;
pub mod session;

pub use error::{OnnxError, Result};
pub use session::OnnxSession;

// Re-exported so downstream crates can build `ort::Tensor`/`ort::Value`
// inputs without taking their own direct dependency on `ort`.
pub use ort;
