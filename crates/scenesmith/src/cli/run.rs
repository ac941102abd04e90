use crate::cli::GenerateArgs;
use anyhow::{Context, Result};
use scenesmith_core::Session;
use scenesmith_models::AnthropicClient;
use scenesmith_scene::{SceneGenerator, SceneRequestBuilder, fallback_scene, host_page};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Runs the full generation pipeline and writes the document to disk.
pub async fn run_generate(args: GenerateArgs) -> Result<()> {
    let client = AnthropicClient::from_env(&args.model)?
        .with_timeout(Duration::from_secs(args.timeout));

    let request_builder = SceneRequestBuilder::default()
        .with_model(&args.model)
        .with_max_tokens(args.max_tokens)
        .with_temperature(args.temperature);

    let generator = SceneGenerator::new(client)
        .with_request_builder(request_builder)
        .with_enhancement(args.enhance);

    let mut session = Session::default();
    let record = generator.generate(&args.prompt, &mut session).await?;

    let html = if args.embed {
        host_page(record.html())
    } else {
        record.html().clone()
    };
    std::fs::write(&args.out, html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    if let Some(enhanced) = record.enhanced_prompt() {
        info!(enhanced = %enhanced, "Used enhanced prompt");
    }
    if *record.truncated() {
        info!("Output looked truncated; wrote best-effort repair");
    }
    info!(path = %args.out.display(), "Scene written");
    Ok(())
}

/// Writes the canned fallback scene. No API call, no key required.
pub fn run_fallback(out: &Path) -> Result<()> {
    std::fs::write(out, fallback_scene())
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!(path = %out.display(), "Fallback scene written");
    Ok(())
}
