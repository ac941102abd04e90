//! Error types for the scenesmith library.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums define specific error conditions
//! - `*Error` structs wrap the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scenesmith_error::{ScenesmithResult, HttpError};
//!
//! fn fetch_data() -> ScenesmithResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod http;
mod model;
mod prompt;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{ScenesmithError, ScenesmithErrorKind, ScenesmithResult};
pub use http::HttpError;
pub use model::{ModelError, ModelErrorKind, ModelResult};
pub use prompt::PromptError;
