use clap::{Args, Parser, Subcommand};
use scenesmith_scene::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use std::path::PathBuf;

/// Generate standalone Three.js scene documents from text prompts.
#[derive(Debug, Parser)]
#[command(name = "scenesmith", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a scene document from a prompt
    Generate(GenerateArgs),

    /// Write the canned fallback scene without calling the API
    Fallback {
        /// Output path for the fallback document
        #[arg(short, long, default_value = "fallback.html")]
        out: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Scene description, e.g. "a lion resting under a tree"
    pub prompt: String,

    /// Rewrite the prompt into a richer description before generating
    #[arg(short, long)]
    pub enhance: bool,

    /// Output path for the generated document
    #[arg(short, long, default_value = "scene.html")]
    pub out: PathBuf,

    /// Wrap the document in the diagnostic host page (error overlay, FPS counter)
    #[arg(long)]
    pub embed: bool,

    /// Model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum output tokens
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,
}
