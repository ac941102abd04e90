//! Trait definitions for completion backends.
//!
//! The scene pipeline talks to the completion service exclusively through
//! [`SceneDriver`], so tests can substitute a mock and the provider crate
//! stays swappable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::SceneDriver;
