//! Turning an extracted document into a loadable scene page.
//!
//! Repair is a fixed pipeline of named text-rewrite passes, each of which is
//! independently idempotent: re-running `repair` on its own output is
//! byte-identical. The passes are string substitution, not URL or script
//! parsing.

use crate::template::{
    CONTROLS_CDN_URL, LEGACY_CDN_PREFIX, PREFERRED_CDN_PREFIX, STAND_IN_MARKER, THREE_CDN_URL,
    fallback_scene, stand_in_snippet, wrap_fragment,
};
use regex::Regex;
use scenesmith_core::{DocumentKind, SceneDocument};
use std::sync::OnceLock;
use tracing::debug;

/// Repair an extracted document into a complete, loadable scene page.
///
/// Pass order:
/// 1. base document selection: HTML as-is, fragments wrapped in the
///    boilerplate skeleton, the empty sentinel replaced by the fallback scene
/// 2. script injection: pinned library and controls tags before `</head>`
///    when no reference is present
/// 3. loader removal: external-model-loader invocations stripped and a
///    procedural stand-in appended
/// 4. CDN rewrite: legacy host prefix replaced with the preferred one
///
/// The result is never empty and always contains a renderable document.
///
/// # Examples
///
/// ```
/// use scenesmith_core::SceneDocument;
/// use scenesmith_scene::repair;
///
/// let page = repair(&SceneDocument::empty());
/// assert!(page.contains("<!DOCTYPE html>"));
/// assert!(page.contains("</html>"));
/// ```
pub fn repair(doc: &SceneDocument) -> String {
    let base = base_document(doc);
    let injected = inject_library_scripts(&base);
    let stripped = remove_model_loaders(&injected);
    rewrite_cdn_hosts(&stripped)
}

/// Pass 1: pick the document to patch.
fn base_document(doc: &SceneDocument) -> String {
    if doc.is_empty() {
        debug!("Extraction failed, substituting fallback scene");
        return fallback_scene();
    }
    match doc.kind {
        // Incomplete HTML (e.g. truncated output) is kept as extracted; there
        // is no re-request mechanism for truncation.
        DocumentKind::Html => doc.body.clone(),
        DocumentKind::Js | DocumentKind::Generic => {
            debug!(kind = %doc.kind, "Wrapping fragment in HTML skeleton");
            wrap_fragment(&doc.body)
        }
    }
}

/// Pass 2: inject the pinned library and controls scripts when absent.
fn inject_library_scripts(doc: &str) -> String {
    let mut out = doc.to_string();
    if !has_three_reference(&out) {
        debug!("Injecting pinned three.js script tag");
        out = insert_script(&out, THREE_CDN_URL);
    }
    if !out.contains("OrbitControls") {
        debug!("Injecting pinned OrbitControls script tag");
        out = insert_script(&out, CONTROLS_CDN_URL);
    }
    out
}

fn has_three_reference(doc: &str) -> bool {
    doc.contains("three.min.js") || doc.contains("three.module.js") || doc.contains("build/three.js")
}

/// Insert a script tag immediately before the first closing anchor found.
fn insert_script(doc: &str, src: &str) -> String {
    let tag = format!("<script src=\"{}\"></script>\n", src);
    for anchor in ["</head>", "</body>", "</html>"] {
        if let Some(pos) = doc.find(anchor) {
            return format!("{}{}{}", &doc[..pos], tag, &doc[pos..]);
        }
    }
    format!("{}\n{}", doc, tag)
}

/// Pass 3: strip external-model-loader invocations.
///
/// The system instruction forbids externally loaded models; this is the
/// cleanup for responses that ignored it. Constructor statements and the
/// associated `.load(...)` calls are removed (balanced-paren scan, so
/// multi-line callback arguments come out whole), and a procedural
/// primitive-built stand-in is appended so the scene is not left empty.
fn remove_model_loaders(doc: &str) -> String {
    if !doc.contains("GLTFLoader") {
        return doc.to_string();
    }

    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    let name_re = NAME_RE.get_or_init(|| {
        Regex::new(r"(?:const|let|var)\s+(\w+)\s*=\s*new\s+(?:THREE\.)?GLTFLoader")
            .expect("valid loader-name regex")
    });
    let names: Vec<String> = name_re
        .captures_iter(doc)
        .map(|c| c[1].to_string())
        .collect();

    static CTOR_RE: OnceLock<Regex> = OnceLock::new();
    let ctor_re = CTOR_RE.get_or_init(|| {
        Regex::new(r"(?:(?:const|let|var)\s+\w+\s*=\s*)?new\s+(?:THREE\.)?GLTFLoader")
            .expect("valid loader-constructor regex")
    });

    let mut out = remove_call_statements(doc, ctor_re);
    for name in &names {
        let load_re = Regex::new(&format!(r"\b{}\s*\.\s*load", regex::escape(name)))
            .expect("valid loader-call regex");
        out = remove_call_statements(&out, &load_re);
    }

    if out != doc && !out.contains(STAND_IN_MARKER) {
        debug!("Removed external model loader, appending procedural stand-in");
        out = append_before_close(&out, &stand_in_snippet());
    }
    out
}

/// Remove every match of `re` together with its trailing call chain
/// (`(...)`, chained `.method(...)` calls, and a trailing semicolon).
fn remove_call_statements(doc: &str, re: &Regex) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut idx = 0;
    while let Some(m) = re.find_at(doc, idx) {
        out.push_str(&doc[idx..m.start()]);
        idx = consume_call_chain(doc, m.end());
    }
    out.push_str(&doc[idx..]);
    out
}

/// Advance past `(...)` argument lists, chained `.method(...)` calls, and a
/// trailing `;`, starting at `pos`.
fn consume_call_chain(doc: &str, mut pos: usize) -> usize {
    let bytes = doc.as_bytes();
    loop {
        let open = skip_ws(doc, pos);
        if bytes.get(open) != Some(&b'(') {
            break;
        }
        match matching_paren(doc, open) {
            Some(close) => pos = close + 1,
            // Unbalanced call, likely a truncated response: drop the rest.
            None => return doc.len(),
        }
        let dot = skip_ws(doc, pos);
        if bytes.get(dot) == Some(&b'.') {
            let mut ident = dot + 1;
            while bytes
                .get(ident)
                .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
            {
                ident += 1;
            }
            let next_open = skip_ws(doc, ident);
            if bytes.get(next_open) == Some(&b'(') {
                pos = next_open;
                continue;
            }
        }
        break;
    }
    let semi = skip_ws(doc, pos);
    if doc.as_bytes().get(semi) == Some(&b';') {
        pos = semi + 1;
    }
    pos
}

fn skip_ws(doc: &str, mut pos: usize) -> usize {
    let bytes = doc.as_bytes();
    while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}

/// Find the `)` matching the `(` at `open`, skipping string literals and
/// escape sequences.
fn matching_paren(doc: &str, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut in_string: Option<char> = None;
    let mut escape_next = false;

    for (i, ch) in doc[open..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' => escape_next = true,
            '\'' | '"' | '`' => match in_string {
                Some(quote) if quote == ch => in_string = None,
                None => in_string = Some(ch),
                _ => {}
            },
            '(' if in_string.is_none() => depth += 1,
            ')' if in_string.is_none() => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

fn append_before_close(doc: &str, snippet: &str) -> String {
    for anchor in ["</body>", "</html>"] {
        if let Some(pos) = doc.find(anchor) {
            return format!("{}{}{}", &doc[..pos], snippet, &doc[pos..]);
        }
    }
    format!("{}\n{}", doc, snippet)
}

/// Pass 4: fixed substitution of the legacy CDN host prefix.
fn rewrite_cdn_hosts(doc: &str) -> String {
    if !doc.contains(LEGACY_CDN_PREFIX) {
        return doc.to_string();
    }
    debug!("Rewriting legacy CDN host to preferred host");
    doc.replace(LEGACY_CDN_PREFIX, PREFERRED_CDN_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE_DOC: &str = "<html>\n<head>\n<title>t</title>\n</head>\n<body>\n<script>\nconst scene = new THREE.Scene();\n</script>\n</body>\n</html>";

    fn html_doc(body: &str) -> SceneDocument {
        SceneDocument::new(body, DocumentKind::Html)
    }

    #[test]
    fn repair_is_idempotent() {
        let inputs = vec![
            SceneDocument::empty(),
            html_doc(BARE_DOC),
            html_doc("<html><head></head><body><script src=\"https://unpkg.com/three@0.137.0/build/three.min.js\"></script></body></html>"),
            SceneDocument::new("const scene = new THREE.Scene();", DocumentKind::Js),
            SceneDocument::new("something else entirely", DocumentKind::Generic),
        ];
        for input in inputs {
            let once = repair(&input);
            let twice = repair(&extracted(&once));
            assert_eq!(once, twice, "repair not idempotent for {:?}", input.kind);
        }
    }

    // Re-wrap repaired output the way a second pipeline run would see it.
    fn extracted(html: &str) -> SceneDocument {
        SceneDocument::new(html, DocumentKind::Html)
    }

    #[test]
    fn empty_sentinel_yields_fallback() {
        let page = repair(&SceneDocument::empty());
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("</html>"));
        assert!(page.contains("THREE.BoxGeometry"));
        assert!(page.contains("requestAnimationFrame"));
    }

    #[test]
    fn injects_exactly_one_of_each_script_before_head_close() {
        let page = repair(&html_doc(BARE_DOC));

        assert_eq!(page.matches(THREE_CDN_URL).count(), 1);
        assert_eq!(page.matches(CONTROLS_CDN_URL).count(), 1);

        let head_close = page.find("</head>").unwrap();
        assert!(page.find(THREE_CDN_URL).unwrap() < head_close);
        assert!(page.find(CONTROLS_CDN_URL).unwrap() < head_close);

        // Everything else is untouched: removing the two injected lines
        // restores the input byte-for-byte.
        let three_line = format!("<script src=\"{}\"></script>\n", THREE_CDN_URL);
        let controls_line = format!("<script src=\"{}\"></script>\n", CONTROLS_CDN_URL);
        let restored = page.replacen(&three_line, "", 1).replacen(&controls_line, "", 1);
        assert_eq!(restored, BARE_DOC);
    }

    #[test]
    fn existing_scripts_are_not_duplicated() {
        let body = format!(
            "<html><head><script src=\"{}\"></script><script src=\"{}\"></script></head><body></body></html>",
            THREE_CDN_URL, CONTROLS_CDN_URL
        );
        let page = repair(&html_doc(&body));
        assert_eq!(page.matches(THREE_CDN_URL).count(), 1);
        assert_eq!(page.matches(CONTROLS_CDN_URL).count(), 1);
    }

    #[test]
    fn fragments_are_wrapped_verbatim() {
        let page = repair(&SceneDocument::new(
            "const scene = new THREE.Scene();",
            DocumentKind::Js,
        ));
        assert!(page.contains("const scene = new THREE.Scene();"));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("</html>"));
    }

    #[test]
    fn loader_invocations_are_removed_and_substituted() {
        let body = "<html><head></head><body><script>\n\
            const scene = new THREE.Scene();\n\
            const loader = new THREE.GLTFLoader();\n\
            loader.load('lion.glb', function (gltf) {\n\
                scene.add(gltf.scene);\n\
            });\n\
            renderer.render(scene, camera);\n\
            </script></body></html>";
        let page = repair(&html_doc(body));

        assert!(!page.contains("GLTFLoader"));
        assert!(!page.contains("lion.glb"));
        // The rest of the script survives.
        assert!(page.contains("renderer.render(scene, camera);"));
        // Stand-in appended, script regions stay balanced.
        assert!(page.contains(STAND_IN_MARKER));
        assert_eq!(page.matches("<script").count(), page.matches("</script>").count());
    }

    #[test]
    fn chained_loader_call_is_removed_whole() {
        let body = "<html><head></head><body><script>\n\
            new THREE.GLTFLoader().load('model.glb', (gltf) => scene.add(gltf.scene));\n\
            </script></body></html>";
        let page = repair(&html_doc(body));
        assert!(!page.contains("GLTFLoader"));
        assert!(!page.contains("model.glb"));
    }

    #[test]
    fn legacy_cdn_hosts_are_rewritten() {
        let body = "<html><head>\
            <script src=\"https://unpkg.com/three@0.137.0/build/three.min.js\"></script>\
            <script src=\"https://unpkg.com/three@0.137.0/examples/js/controls/OrbitControls.js\"></script>\
            </head><body></body></html>";
        let page = repair(&html_doc(body));
        assert!(!page.contains("unpkg.com"));
        assert_eq!(page.matches("cdn.jsdelivr.net/npm/three@0.137.0").count(), 2);
    }
}
