//! Fitting page rendering
//!
//! Server-rendered HTML for the try-on UI. The page carries the model
//! dropdown, the webcam stage (video + overlay canvas), and, once a model
//! is chosen, the attribute block plus the scripts that drive the 3D
//! overlay. The client JS reads `#modelName` to decide which mesh files to
//! fetch, so that element only exists after a selection.

use serde_json::Value;

use crate::catalog::Catalog;

/// Render the fitting page.
///
/// `selected` is the chosen model's name and attributes after a POST; on a
/// plain GET nothing is selected and the try-on stage stays idle.
pub fn fitting_page(catalog: &Catalog, selected: Option<(&str, &Value)>) -> String {
    let mut options = String::new();
    for name in catalog.keys() {
        let escaped = escape_html(name);
        let marker = match selected {
            Some((chosen, _)) if chosen == name => " selected",
            _ => "",
        };
        options.push_str(&format!(
            r#"<option value="{escaped}"{marker}>{escaped}</option>"#
        ));
    }

    let model_block = match selected {
        Some((name, attributes)) => format!(
            r#"<div class="model-info">
                <h2 id="modelName">{name}</h2>
                {attributes}
            </div>"#,
            name = escape_html(name),
            attributes = attributes_html(attributes),
        ),
        None => String::new(),
    };

    // The overlay scripts require #modelName, so they only load once a
    // model has been chosen
    let scripts = match selected {
        Some(_) => concat!(
            r#"<script src="/static/js/face-api.min.js"></script>"#,
            "\n    ",
            r#"<script src="/static/js/three.min.js"></script>"#,
            "\n    ",
            r#"<script src="/static/js/GLTFLoader.js"></script>"#,
            "\n    ",
            r#"<script defer src="/static/js/glasses.js"></script>"#,
        ),
        None => "",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Glasses Try-On</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>Glasses Try-On</h1>
    </header>

    <main>
        <section class="picker-panel">
            <h2>Models</h2>
            <form method="post" action="/">
                <select name="model">
                    {options}
                </select>
                <button type="submit">Try on</button>
            </form>
            {model_block}
        </section>

        <section class="stage-panel">
            <video id="video" autoplay muted playsinline width="720" height="560"></video>
            <canvas id="canvas" width="720" height="560"></canvas>
        </section>
    </main>

    {scripts}
</body>
</html>"#,
        css = CSS,
        options = options,
        model_block = model_block,
        scripts = scripts,
    )
}

/// Render a model's attributes for display.
///
/// Object attributes become a definition list; any other JSON shape is
/// printed as-is. The attribute shape is owned by the catalog file, not by
/// the server.
fn attributes_html(attributes: &Value) -> String {
    match attributes {
        Value::Object(fields) => {
            let mut rows = String::new();
            for (key, value) in fields {
                rows.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>",
                    escape_html(key),
                    escape_html(&display_value(value)),
                ));
            }
            format!(r#"<dl class="attributes">{rows}</dl>"#)
        }
        other => format!(
            r#"<p class="attributes">{}</p>"#,
            escape_html(&display_value(other))
        ),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: system-ui, -apple-system, sans-serif;
    background: #1a1a2e;
    color: #eee;
    min-height: 100vh;
}

header {
    background: #16213e;
    padding: 15px 20px;
    border-bottom: 1px solid #0f3460;
}

main {
    display: flex;
    gap: 20px;
    padding: 20px;
}

.picker-panel {
    flex: 0 0 280px;
    background: #16213e;
    border-radius: 8px;
    padding: 15px;
}

.picker-panel h2 {
    margin-bottom: 10px;
    font-size: 1.1em;
}

.picker-panel form {
    display: flex;
    gap: 10px;
}

.picker-panel select {
    flex: 1;
    padding: 8px;
    background: #0d1117;
    color: #c9d1d9;
    border: 1px solid #0f3460;
    border-radius: 6px;
}

.picker-panel button {
    padding: 8px 14px;
    border: 1px solid #238636;
    background: #238636;
    color: #eee;
    border-radius: 6px;
    cursor: pointer;
}

.picker-panel button:hover {
    opacity: 0.9;
}

.model-info {
    margin-top: 20px;
    padding: 10px;
    background: #0d1117;
    border-radius: 6px;
}

.model-info h2 {
    color: #58a6ff;
    margin-bottom: 8px;
}

.attributes dt {
    font-size: 0.8em;
    color: #888;
    text-transform: uppercase;
    margin-top: 8px;
}

.attributes dd {
    margin-left: 0;
}

.stage-panel {
    position: relative;
    flex: 1;
}

.stage-panel video,
.stage-panel canvas {
    position: absolute;
    top: 0;
    left: 0;
    border-radius: 8px;
}

.stage-panel canvas {
    z-index: 1;
}
"#;
