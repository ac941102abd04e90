//! Static HTML building blocks: the pinned CDN scripts, the boilerplate
//! skeleton for bare fragments, the canned fallback scene, and the
//! procedural stand-in appended when an external model loader is removed.

/// Pinned Three.js version. All injected script tags use this version.
pub const THREE_VERSION: &str = "0.137.0";

/// Pinned core library script, on the preferred CDN host.
pub const THREE_CDN_URL: &str =
    "https://cdn.jsdelivr.net/npm/three@0.137.0/build/three.min.js";

/// Pinned OrbitControls addon script, on the preferred CDN host.
pub const CONTROLS_CDN_URL: &str =
    "https://cdn.jsdelivr.net/npm/three@0.137.0/examples/js/controls/OrbitControls.js";

/// Legacy host prefix rewritten by the repairer.
pub(crate) const LEGACY_CDN_PREFIX: &str = "unpkg.com/three@";

/// Preferred host prefix the legacy one is rewritten to.
pub(crate) const PREFERRED_CDN_PREFIX: &str = "cdn.jsdelivr.net/npm/three@";

/// Marker comment identifying the procedural stand-in, so the append step
/// stays idempotent.
pub(crate) const STAND_IN_MARKER: &str = "procedural stand-in for removed model loader";

/// Wraps a bare JavaScript (or unidentified) fragment in a complete HTML
/// document with the two pinned CDN scripts. The fragment is embedded
/// verbatim in a single script tag.
pub(crate) fn wrap_fragment(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Generated Scene</title>
    <style>
        body {{ margin: 0; overflow: hidden; }}
        canvas {{ display: block; }}
    </style>
    <script src="{three}"></script>
    <script src="{controls}"></script>
</head>
<body>
    <script>
{fragment}
    </script>
</body>
</html>
"#,
        three = THREE_CDN_URL,
        controls = CONTROLS_CDN_URL,
        fragment = fragment
    )
}

/// The canned fallback scene: a rotating cube with a visible notice text.
///
/// This is the last line of defense shown to the user when extraction fails
/// entirely, so it must always be a syntactically complete document that
/// renders something.
pub fn fallback_scene() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Fallback Scene</title>
    <style>
        body {{ margin: 0; overflow: hidden; font-family: Arial, sans-serif; }}
        canvas {{ display: block; }}
        #notice {{
            position: absolute;
            top: 10px;
            width: 100%;
            text-align: center;
            color: white;
            pointer-events: none;
            text-shadow: 1px 1px 1px black;
        }}
    </style>
    <script src="{three}"></script>
    <script src="{controls}"></script>
</head>
<body>
    <div id="notice">No scene could be extracted from the response. Showing fallback scene.</div>
    <script>
        const scene = new THREE.Scene();
        scene.background = new THREE.Color(0x222233);

        const camera = new THREE.PerspectiveCamera(75, window.innerWidth / window.innerHeight, 0.1, 1000);
        camera.position.z = 4;

        const renderer = new THREE.WebGLRenderer({{ antialias: true }});
        renderer.setSize(window.innerWidth, window.innerHeight);
        document.body.appendChild(renderer.domElement);

        const controls = new THREE.OrbitControls(camera, renderer.domElement);

        const ambientLight = new THREE.AmbientLight(0x404040, 0.8);
        scene.add(ambientLight);
        const directionalLight = new THREE.DirectionalLight(0xffffff, 1);
        directionalLight.position.set(3, 5, 3);
        scene.add(directionalLight);

        const cube = new THREE.Mesh(
            new THREE.BoxGeometry(1.5, 1.5, 1.5),
            new THREE.MeshPhongMaterial({{ color: 0x4285f4 }})
        );
        scene.add(cube);

        window.addEventListener('resize', () => {{
            camera.aspect = window.innerWidth / window.innerHeight;
            camera.updateProjectionMatrix();
            renderer.setSize(window.innerWidth, window.innerHeight);
        }});

        function animate() {{
            requestAnimationFrame(animate);
            cube.rotation.x += 0.01;
            cube.rotation.y += 0.01;
            controls.update();
            renderer.render(scene, camera);
        }}
        animate();
    </script>
</body>
</html>
"#,
        three = THREE_CDN_URL,
        controls = CONTROLS_CDN_URL
    )
}

/// Procedural substitute object appended when a model-loader invocation was
/// stripped, so the scene is not left visibly empty where the model would
/// have been.
pub(crate) fn stand_in_snippet() -> String {
    format!(
        r#"<script>
// {marker}
(function () {{
    if (typeof THREE === 'undefined' || typeof scene === 'undefined') {{ return; }}
    const standIn = new THREE.Group();
    const standInBody = new THREE.Mesh(
        new THREE.BoxGeometry(1.6, 1.0, 0.8),
        new THREE.MeshPhongMaterial({{ color: 0xb08d57 }})
    );
    standIn.add(standInBody);
    const standInHead = new THREE.Mesh(
        new THREE.SphereGeometry(0.45, 16, 16),
        new THREE.MeshPhongMaterial({{ color: 0xb08d57 }})
    );
    standInHead.position.set(1.0, 0.7, 0);
    standIn.add(standInHead);
    scene.add(standIn);
}})();
</script>
"#,
        marker = STAND_IN_MARKER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_a_complete_document() {
        let doc = fallback_scene();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("</html>"));
        assert!(doc.contains("THREE.BoxGeometry"));
        assert!(doc.contains("requestAnimationFrame"));
        assert!(doc.contains(THREE_CDN_URL));
        assert!(doc.contains(CONTROLS_CDN_URL));
    }

    #[test]
    fn wrapped_fragment_embeds_verbatim() {
        let doc = wrap_fragment("const x = 1;");
        assert!(doc.contains("const x = 1;"));
        assert!(doc.contains(THREE_CDN_URL));
        assert!(doc.contains("</html>"));
    }
}
