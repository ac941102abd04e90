//! Embedding helpers for the host renderer.
//!
//! Rendering itself happens in a browser frame outside this crate; these
//! helpers produce the strings handed to it. The repairer guarantees a
//! complete document; the helpers here add the diagnostic host page and the
//! defensive quote escaping the embedding mechanism needs.

/// Wraps a scene document in the diagnostic host page: a script error
/// overlay (so a broken generated scene shows its error instead of a blank
/// frame) and an FPS counter.
pub fn host_page(html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {{ margin: 0; overflow: hidden; font-family: Arial, sans-serif; }}
        #errorOverlay {{
            display: none;
            position: absolute;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            background-color: rgba(0,0,0,0.7);
            color: white;
            padding: 20px;
            box-sizing: border-box;
            overflow: auto;
            z-index: 1000;
        }}
        #stats {{
            position: absolute;
            bottom: 10px;
            left: 10px;
            background-color: rgba(0,0,0,0.5);
            color: white;
            padding: 5px;
            border-radius: 3px;
            font-size: 12px;
        }}
    </style>
</head>
<body>
    <div id="errorOverlay"></div>
    <div id="stats"></div>
    <script>
        window.addEventListener('error', function(event) {{
            const errorOverlay = document.getElementById('errorOverlay');
            errorOverlay.innerHTML = '<h3>Error:</h3><pre>' + event.message +
                '\n\nLine: ' + event.lineno +
                '\nFile: ' + event.filename + '</pre>';
            errorOverlay.style.display = 'block';
            console.error(event);
        }});

        let frameCount = 0;
        let lastTime = performance.now();

        function updateStats() {{
            const now = performance.now();
            const elapsed = now - lastTime;
            if (elapsed >= 1000) {{
                const fps = Math.round((frameCount * 1000) / elapsed);
                document.getElementById('stats').textContent = fps + ' FPS';
                frameCount = 0;
                lastTime = now;
            }}
            frameCount++;
            requestAnimationFrame(updateStats);
        }}
        requestAnimationFrame(updateStats);
    </script>

    {html}
</body>
</html>
"#,
        html = html
    )
}

/// Escapes double quotes for embedding inside a quoted HTML attribute.
///
/// # Examples
///
/// ```
/// use scenesmith_scene::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"<a href="x">"#), "<a href=&quot;x&quot;>");
/// ```
pub fn escape_attribute(html: &str) -> String {
    html.replace('"', "&quot;")
}

/// An `<iframe srcdoc=...>` snippet embedding the document at a fixed pixel
/// height. The document goes through [`escape_attribute`] because `srcdoc`
/// is a quoted attribute.
pub fn iframe_snippet(html: &str, height: u32) -> String {
    format!(
        "<iframe srcdoc=\"{}\" style=\"width: 100%; height: {}px; border: none;\" sandbox=\"allow-scripts\"></iframe>",
        escape_attribute(html),
        height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_page_embeds_document_with_overlay() {
        let page = host_page("<html><body>scene</body></html>");
        assert!(page.contains("errorOverlay"));
        assert!(page.contains("<html><body>scene</body></html>"));
        assert!(page.contains("requestAnimationFrame(updateStats)"));
    }

    #[test]
    fn iframe_snippet_escapes_quotes() {
        let snippet = iframe_snippet("<script src=\"x.js\"></script>", 600);
        assert!(snippet.contains("&quot;x.js&quot;"));
        assert!(snippet.contains("height: 600px"));
        // No raw inner quotes survive inside the srcdoc value.
        let srcdoc = snippet.split("srcdoc=\"").nth(1).unwrap();
        let value = srcdoc.split('"').next().unwrap();
        assert!(!value.contains('"'));
    }
}
