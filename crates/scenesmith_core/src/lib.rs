//! Core data types for the scenesmith scene generation library.
//!
//! This crate provides the foundation data types used across all scenesmith
//! interfaces: conversation messages, generation requests and responses, the
//! extracted scene document, and the in-memory session history.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod message;
mod record;
mod request;
mod role;
mod session;

pub use document::{DocumentKind, SceneDocument};
pub use message::Message;
pub use record::{SceneRecord, SceneRecordBuilder};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder, Usage,
};
pub use role::Role;
pub use session::Session;
