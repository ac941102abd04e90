//! Scene pipeline for scenesmith.
//!
//! Turns a free-text completion response into a loadable Three.js scene
//! document:
//!
//! ```text
//! enhance (optional) -> build request -> driver -> extract -> repair
//! ```
//!
//! Extraction is an ordered chain of best-effort strategies, not a parser;
//! repair is a fixed sequence of idempotent text-rewrite passes. Every
//! failure path still yields a renderable document (worst case: the canned
//! fallback cube).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod enhance;
mod extract;
mod pipeline;
mod prompt;
mod render;
mod repair;
mod template;

pub use enhance::{ENHANCE_INSTRUCTION, Enhancement, enhance};
pub use extract::extract;
pub use pipeline::SceneGenerator;
pub use prompt::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, SYSTEM_INSTRUCTION,
    SceneRequestBuilder,
};
pub use render::{escape_attribute, host_page, iframe_snippet};
pub use repair::repair;
pub use template::{CONTROLS_CDN_URL, THREE_CDN_URL, THREE_VERSION, fallback_scene};
