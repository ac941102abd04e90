//! Request construction for scene generation.
//!
//! The system instruction and few-shot table are fixed; the only logic is a
//! word-intersection test picking which example pair to include. Selection
//! is a pure function of the prompt text and the table.

use scenesmith_core::{GenerateRequest, Message, Role};
use scenesmith_error::{BuilderError, ScenesmithResult};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default maximum output tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Fixed system instruction constraining the output shape.
pub const SYSTEM_INSTRUCTION: &str = "\
You generate 3D scenes with Three.js. Respond with a single complete HTML \
document and nothing else. Requirements: build every object from primitive \
shapes (boxes, spheres, cylinders, cones, planes, tori); never load external \
3D models or textures; include a perspective camera, a scene, a WebGL \
renderer, an animation loop driven by requestAnimationFrame, and a window \
resize handler; add OrbitControls for navigation; add at least one light. \
Reference Three.js 0.137.0 from a CDN script tag.";

/// A hardcoded few-shot pair biasing the completion's output style.
struct FewShotExample {
    keywords: &'static [&'static str],
    prompt: &'static str,
    response: &'static str,
}

/// Example 0 doubles as the default for ties and no-matches.
static EXAMPLES: [FewShotExample; 2] = [
    FewShotExample {
        keywords: &[
            "city", "building", "buildings", "street", "streets", "tower", "towers", "urban",
            "skyline", "downtown",
        ],
        prompt: "A city with tall buildings",
        response: r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>City Scene</title>
    <style>body { margin: 0; overflow: hidden; }</style>
    <script src="https://cdn.jsdelivr.net/npm/three@0.137.0/build/three.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/three@0.137.0/examples/js/controls/OrbitControls.js"></script>
</head>
<body>
    <script>
        const scene = new THREE.Scene();
        scene.background = new THREE.Color(0x87CEEB);
        const camera = new THREE.PerspectiveCamera(75, window.innerWidth / window.innerHeight, 0.1, 1000);
        camera.position.set(20, 15, 20);
        const renderer = new THREE.WebGLRenderer({ antialias: true });
        renderer.setSize(window.innerWidth, window.innerHeight);
        document.body.appendChild(renderer.domElement);
        const controls = new THREE.OrbitControls(camera, renderer.domElement);
        scene.add(new THREE.AmbientLight(0x404040, 0.6));
        const sun = new THREE.DirectionalLight(0xffffff, 1);
        sun.position.set(10, 20, 10);
        scene.add(sun);
        const ground = new THREE.Mesh(
            new THREE.PlaneGeometry(60, 60),
            new THREE.MeshPhongMaterial({ color: 0x555555 })
        );
        ground.rotation.x = -Math.PI / 2;
        scene.add(ground);
        for (let i = 0; i < 25; i++) {
            const height = 2 + Math.random() * 10;
            const building = new THREE.Mesh(
                new THREE.BoxGeometry(2, height, 2),
                new THREE.MeshPhongMaterial({ color: 0x8899aa })
            );
            building.position.set((i % 5) * 5 - 10, height / 2, Math.floor(i / 5) * 5 - 10);
            scene.add(building);
        }
        window.addEventListener('resize', () => {
            camera.aspect = window.innerWidth / window.innerHeight;
            camera.updateProjectionMatrix();
            renderer.setSize(window.innerWidth, window.innerHeight);
        });
        function animate() {
            requestAnimationFrame(animate);
            controls.update();
            renderer.render(scene, camera);
        }
        animate();
    </script>
</body>
</html>"#,
    },
    FewShotExample {
        keywords: &[
            "lion", "animal", "animals", "tree", "trees", "savanna", "nature", "creature",
            "forest", "grass",
        ],
        prompt: "A lion resting under a tree",
        response: r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Lion Under a Tree</title>
    <style>body { margin: 0; overflow: hidden; }</style>
    <script src="https://cdn.jsdelivr.net/npm/three@0.137.0/build/three.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/three@0.137.0/examples/js/controls/OrbitControls.js"></script>
</head>
<body>
    <script>
        const scene = new THREE.Scene();
        scene.background = new THREE.Color(0x87CEEB);
        const camera = new THREE.PerspectiveCamera(75, window.innerWidth / window.innerHeight, 0.1, 1000);
        camera.position.set(0, 3, 8);
        const renderer = new THREE.WebGLRenderer({ antialias: true });
        renderer.setSize(window.innerWidth, window.innerHeight);
        document.body.appendChild(renderer.domElement);
        const controls = new THREE.OrbitControls(camera, renderer.domElement);
        scene.add(new THREE.AmbientLight(0x404040, 0.7));
        const sun = new THREE.DirectionalLight(0xffffff, 1);
        sun.position.set(5, 10, 5);
        scene.add(sun);
        const ground = new THREE.Mesh(
            new THREE.PlaneGeometry(30, 30),
            new THREE.MeshPhongMaterial({ color: 0x7CFC00 })
        );
        ground.rotation.x = -Math.PI / 2;
        scene.add(ground);
        const lion = new THREE.Group();
        const body = new THREE.Mesh(
            new THREE.BoxGeometry(1.6, 0.8, 0.8),
            new THREE.MeshPhongMaterial({ color: 0xC19A6B })
        );
        lion.add(body);
        const head = new THREE.Mesh(
            new THREE.SphereGeometry(0.45, 16, 16),
            new THREE.MeshPhongMaterial({ color: 0xC19A6B })
        );
        head.position.set(1.0, 0.5, 0);
        lion.add(head);
        const mane = new THREE.Mesh(
            new THREE.TorusGeometry(0.5, 0.15, 8, 16),
            new THREE.MeshPhongMaterial({ color: 0x8B4513 })
        );
        mane.position.copy(head.position);
        lion.add(mane);
        lion.position.set(1, 0.5, 0);
        scene.add(lion);
        const trunk = new THREE.Mesh(
            new THREE.CylinderGeometry(0.2, 0.3, 2.5, 8),
            new THREE.MeshPhongMaterial({ color: 0x8B4513 })
        );
        trunk.position.set(-2, 1.25, 0);
        scene.add(trunk);
        const crown = new THREE.Mesh(
            new THREE.SphereGeometry(1.4, 16, 16),
            new THREE.MeshPhongMaterial({ color: 0x228B22 })
        );
        crown.position.set(-2, 3, 0);
        scene.add(crown);
        window.addEventListener('resize', () => {
            camera.aspect = window.innerWidth / window.innerHeight;
            camera.updateProjectionMatrix();
            renderer.setSize(window.innerWidth, window.innerHeight);
        });
        function animate() {
            requestAnimationFrame(animate);
            controls.update();
            renderer.render(scene, camera);
        }
        animate();
    </script>
</body>
</html>"#,
    },
];

/// Builds [`GenerateRequest`]s for scene generation with a fixed system
/// instruction and one few-shot example pair.
///
/// # Examples
///
/// ```
/// use scenesmith_scene::SceneRequestBuilder;
///
/// let builder = SceneRequestBuilder::default();
/// let request = builder.build("A lion sleeping under a tree").unwrap();
/// // system + example pair + user prompt
/// assert_eq!(request.messages().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SceneRequestBuilder {
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl Default for SceneRequestBuilder {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl SceneRequestBuilder {
    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the maximum output tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builds the completion request for a scene prompt.
    pub fn build(&self, prompt: &str) -> ScenesmithResult<GenerateRequest> {
        let example = select_example(prompt);
        let messages = vec![
            Message::new(Role::User, example.prompt),
            Message::new(Role::Assistant, example.response),
            Message::new(Role::User, prompt),
        ];

        GenerateRequest::builder()
            .system(SYSTEM_INSTRUCTION.to_string())
            .messages(messages)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .model(self.model.clone())
            .build()
            .map_err(|e| BuilderError::new(e.to_string()).into())
    }
}

/// Word-intersection selection over the fixed example table. Ties and
/// no-matches fall back to example 0.
fn select_example(prompt: &str) -> &'static FewShotExample {
    let lowered = prompt.to_ascii_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let mut best = &EXAMPLES[0];
    let mut best_score = 0usize;
    for example in &EXAMPLES {
        let score = example
            .keywords
            .iter()
            .filter(|k| words.contains(*k))
            .count();
        if score > best_score {
            best = example;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_deterministic() {
        let prompt = "a lion under a big tree at noon";
        let first = select_example(prompt).prompt;
        for _ in 0..5 {
            assert_eq!(select_example(prompt).prompt, first);
        }
    }

    #[test]
    fn animal_prompt_selects_lion_example() {
        let example = select_example("A lion sitting under a tree");
        assert_eq!(example.prompt, "A lion resting under a tree");
    }

    #[test]
    fn city_prompt_selects_city_example() {
        let example = select_example("downtown skyline with towers");
        assert_eq!(example.prompt, "A city with tall buildings");
    }

    #[test]
    fn unmatched_prompt_defaults_to_first_example() {
        let example = select_example("a spinning rainbow teapot");
        assert_eq!(example.prompt, "A city with tall buildings");
    }

    #[test]
    fn request_carries_system_and_few_shot_pair() {
        let request = SceneRequestBuilder::default()
            .build("a quiet harbor at dusk")
            .unwrap();

        assert!(request.system().as_deref().unwrap().contains("Three.js"));
        assert_eq!(request.messages().len(), 3);
        assert_eq!(request.messages()[0].role, Role::User);
        assert_eq!(request.messages()[1].role, Role::Assistant);
        assert_eq!(request.messages()[2].content, "a quiet harbor at dusk");
        assert_eq!(*request.max_tokens(), Some(DEFAULT_MAX_TOKENS));
    }
}
