//! End-to-end pipeline tests against a scripted completion driver.

use async_trait::async_trait;
use scenesmith_core::{GenerateRequest, GenerateResponse, Session};
use scenesmith_error::{HttpError, ScenesmithResult};
use scenesmith_interface::SceneDriver;
use scenesmith_scene::{SceneGenerator, THREE_CDN_URL};

/// Driver returning a canned response (or a canned failure) per call.
struct ScriptedDriver {
    body: Option<String>,
    stop_reason: Option<String>,
}

impl ScriptedDriver {
    fn returning(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            stop_reason: Some("end_turn".to_string()),
        }
    }

    fn failing() -> Self {
        Self {
            body: None,
            stop_reason: None,
        }
    }

    fn truncated(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            stop_reason: Some("max_tokens".to_string()),
        }
    }
}

#[async_trait]
impl SceneDriver for ScriptedDriver {
    async fn generate(&self, _req: &GenerateRequest) -> ScenesmithResult<GenerateResponse> {
        match &self.body {
            Some(body) => {
                let mut builder = GenerateResponse::builder().outputs(vec![body.clone()]);
                if let Some(reason) = &self.stop_reason {
                    builder = builder.stop_reason(reason.clone());
                }
                Ok(builder.build().unwrap())
            }
            None => Err(HttpError::new("scripted transport failure").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

const FENCED_SCENE: &str = "Here is your scene:\n\n```html\n<!DOCTYPE html>\n<html>\n<head><title>Cube</title></head>\n<body>\n<script>\nconst scene = new THREE.Scene();\n</script>\n</body>\n</html>\n```\n\nEnjoy!";

#[tokio::test]
async fn fenced_response_yields_document_with_library_scripts() {
    let generator = SceneGenerator::new(ScriptedDriver::returning(FENCED_SCENE));
    let mut session = Session::default();

    let record = generator.generate("a red cube", &mut session).await.unwrap();

    let html = record.html();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(THREE_CDN_URL));
    assert!(html.contains("OrbitControls"));
    assert!(!html.contains("```"));
    assert!(!*record.truncated());
}

#[tokio::test]
async fn prose_response_falls_back_to_canned_scene() {
    let generator = SceneGenerator::new(ScriptedDriver::returning(
        "I'm sorry, I cannot produce a scene for that request.",
    ));
    let mut session = Session::default();

    let record = generator.generate("a red cube", &mut session).await.unwrap();

    let html = record.html();
    assert!(html.contains("THREE.BoxGeometry"));
    assert!(html.contains("requestAnimationFrame"));
    assert!(html.to_ascii_lowercase().trim_end().ends_with("</html>"));
}

#[tokio::test]
async fn driver_failure_is_terminal_and_leaves_session_untouched() {
    let generator = SceneGenerator::new(ScriptedDriver::failing());
    let mut session = Session::default();

    let result = generator.generate("a red cube", &mut session).await;

    assert!(result.is_err());
    assert!(session.is_empty());
}

#[tokio::test]
async fn successful_runs_append_to_session_in_order() {
    let generator = SceneGenerator::new(ScriptedDriver::returning(FENCED_SCENE));
    let mut session = Session::default();

    generator.generate("first scene", &mut session).await.unwrap();
    generator.generate("second scene", &mut session).await.unwrap();

    assert_eq!(session.len(), 2);
    assert_eq!(session.records()[0].prompt(), "first scene");
    assert_eq!(session.current().unwrap().prompt(), "second scene");
}

#[tokio::test]
async fn empty_prompt_is_rejected_before_any_call() {
    let generator = SceneGenerator::new(ScriptedDriver::failing());
    let mut session = Session::default();

    assert!(generator.generate("   \n", &mut session).await.is_err());
    assert!(session.is_empty());
}

#[tokio::test]
async fn max_tokens_stop_reason_marks_record_truncated() {
    let partial = "```html\n<!DOCTYPE html>\n<html>\n<head></head>\n<body>\n<script>\nconst scene = new THREE.Sce";
    let generator = SceneGenerator::new(ScriptedDriver::truncated(partial));
    let mut session = Session::default();

    let record = generator.generate("a red cube", &mut session).await.unwrap();

    assert!(*record.truncated());
    // The partial document is still repaired: the library scripts go in.
    assert!(record.html().contains(THREE_CDN_URL));
}
