//! Extracting a scene document from free-text completion responses.
//!
//! Responses usually contain the HTML inside a markdown code fence, but may
//! also inline it in prose or return bare JavaScript. Extraction is an
//! ordered chain of best-effort strategies evaluated in a fixed sequence;
//! the first match wins and total failure is the empty sentinel, never an
//! error. This is explicitly not a parser: it has no brace or quote
//! awareness and can mis-slice on pathological input.

use regex::Regex;
use scenesmith_core::{DocumentKind, SceneDocument};
use std::sync::OnceLock;
use tracing::debug;

/// Extract a scene document from a completion response.
///
/// Strategy order (first match wins):
/// 1. literal `<!DOCTYPE html> ... </html>` span
/// 2. code fence (tagged `html` or untagged) containing a full `<html>` element
/// 3. code fence tagged `javascript`/`js`
/// 4. any code fence, kind guessed from its contents
/// 5. raw `<html>`-to-`</html>` slice of the whole text
/// 6. the empty sentinel
///
/// # Examples
///
/// ```
/// use scenesmith_scene::extract;
///
/// let response = "Here you go:\n```html\n<html><head></head><body></body></html>\n```";
/// let doc = extract(response);
/// assert!(doc.body.contains("<html>"));
///
/// let doc = extract("no code here at all");
/// assert!(doc.is_empty());
/// ```
pub fn extract(response: &str) -> SceneDocument {
    let doc = full_document(response)
        .or_else(|| html_fence(response))
        .or_else(|| js_fence(response))
        .or_else(|| any_fence(response))
        .or_else(|| raw_span(response))
        .unwrap_or_else(SceneDocument::empty);

    debug!(
        kind = %doc.kind,
        length = doc.body.len(),
        empty = doc.is_empty(),
        "Extraction finished"
    );
    doc
}

/// Strategy 1: a literal doctype-to-closing-tag span, case-insensitive,
/// dot-matches-newline, returned verbatim.
fn full_document(response: &str) -> Option<SceneDocument> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?is)<!DOCTYPE\s+html\s*>.*?</html\s*>").expect("valid doctype regex")
    });
    re.find(response)
        .map(|m| SceneDocument::new(m.as_str(), DocumentKind::Html))
}

/// Strategy 2: a fence (tagged `html` or untagged) whose contents hold both
/// an opening `<html` and a closing `</html>`.
fn html_fence(response: &str) -> Option<SceneDocument> {
    fences(response)
        .into_iter()
        .find(|f| {
            (f.tag.eq_ignore_ascii_case("html") || f.tag.is_empty())
                && contains_ci(&f.body, "<html")
                && contains_ci(&f.body, "</html>")
        })
        .map(|f| SceneDocument::new(f.body, DocumentKind::Html))
}

/// Strategy 3: a fence tagged as JavaScript; the contents are a fragment,
/// not a full document.
fn js_fence(response: &str) -> Option<SceneDocument> {
    fences(response)
        .into_iter()
        .find(|f| f.tag.eq_ignore_ascii_case("javascript") || f.tag.eq_ignore_ascii_case("js"))
        .map(|f| SceneDocument::new(f.body, DocumentKind::Js))
}

/// Strategy 4: the first fence of any tag, with the kind guessed from its
/// contents. The guess defaults to generic.
fn any_fence(response: &str) -> Option<SceneDocument> {
    fences(response).into_iter().next().map(|f| {
        let kind = if contains_ci(&f.body, "<html") || contains_ci(&f.body, "<script") {
            DocumentKind::Html
        } else if f.body.contains("new THREE.") {
            DocumentKind::Js
        } else {
            DocumentKind::Generic
        };
        SceneDocument::new(f.body, kind)
    })
}

/// Strategy 5: slice the raw text from the first document opener to the
/// last `</html>`.
fn raw_span(response: &str) -> Option<SceneDocument> {
    let lower = response.to_ascii_lowercase();
    let start = lower
        .find("<!doctype html>")
        .or_else(|| lower.find("<html>"))?;
    let end = lower.rfind("</html>")? + "</html>".len();
    if end <= start {
        return None;
    }
    Some(SceneDocument::new(
        &response[start..end],
        DocumentKind::Html,
    ))
}

struct Fence {
    tag: String,
    body: String,
}

/// Scan for triple-backtick fences. A fence with no closing backticks is
/// taken to the end of the text (likely a truncated response).
fn fences(response: &str) -> Vec<Fence> {
    let mut out = Vec::new();
    let mut rest = response;
    while let Some(start) = rest.find("```") {
        let after = &rest[start + 3..];
        let Some(newline) = after.find('\n') else {
            break;
        };
        let tag = after[..newline].trim().to_string();
        let body_text = &after[newline + 1..];
        match body_text.find("```") {
            Some(end) => {
                out.push(Fence {
                    tag,
                    body: body_text[..end].trim().to_string(),
                });
                rest = &body_text[end + 3..];
            }
            None => {
                out.push(Fence {
                    tag,
                    body: body_text.trim().to_string(),
                });
                break;
            }
        }
    }
    out
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document_wins_over_fences() {
        let response = "intro\n<!DOCTYPE html>\n<html><body>x</body></html>\ntrailer\n```js\nconst a = 1;\n```";
        let doc = extract(response);
        assert_eq!(doc.kind, DocumentKind::Html);
        assert!(doc.body.starts_with("<!DOCTYPE html>"));
        assert!(doc.body.ends_with("</html>"));
    }

    #[test]
    fn tagged_html_fence_returns_block_contents() {
        let response = "Here's your scene:\n```html\n<html><head></head><body>hi</body></html>\n```\nEnjoy!";
        let doc = extract(response);
        assert_eq!(doc.kind, DocumentKind::Html);
        assert_eq!(doc.body, "<html><head></head><body>hi</body></html>");
    }

    #[test]
    fn untagged_fence_with_html_element_counts_as_html() {
        let response = "```\n<html><body></body></html>\n```";
        let doc = extract(response);
        assert_eq!(doc.kind, DocumentKind::Html);
    }

    #[test]
    fn js_fence_is_marked_as_fragment() {
        let response = "```javascript\nconst scene = new THREE.Scene();\n```";
        let doc = extract(response);
        assert_eq!(doc.kind, DocumentKind::Js);
        assert!(doc.body.contains("new THREE.Scene()"));
    }

    #[test]
    fn unknown_fence_guesses_kind_from_contents() {
        let response = "```\nconst mesh = new THREE.Mesh();\n```";
        let doc = extract(response);
        assert_eq!(doc.kind, DocumentKind::Js);

        let response = "```\njust some text\n```";
        let doc = extract(response);
        assert_eq!(doc.kind, DocumentKind::Generic);
    }

    #[test]
    fn raw_span_slices_between_markers() {
        let response = "The document is <html><body>inline</body></html> as requested.";
        let doc = extract(response);
        assert_eq!(doc.kind, DocumentKind::Html);
        assert_eq!(doc.body, "<html><body>inline</body></html>");
    }

    #[test]
    fn prose_without_code_yields_sentinel() {
        let doc = extract("I'm sorry, I can't produce a scene for that request.");
        assert!(doc.is_empty());
    }

    #[test]
    fn truncated_fence_is_taken_to_end_of_text() {
        let response = "```html\n<html><body>cut off here";
        let doc = extract(response);
        assert!(doc.body.contains("cut off here"));
    }

    #[test]
    fn extraction_is_total_on_arbitrary_input() {
        for input in ["", "```", "``` \n", "<html>", "</html><html>", "\u{0}\u{fffd}```x"] {
            let doc = extract(input);
            // Either a usable document or the sentinel, never a panic.
            if !doc.is_empty() && doc.kind == DocumentKind::Html {
                assert!(contains_ci(&doc.body, "<html"));
            }
        }
    }
}
