//! WASM bindings for the figweave generator.
//!
//! Exposes `render()` to JavaScript via wasm-bindgen: takes the raw
//! `/v1/files/:key` JSON (fetched by the host page), picks a frame, and
//! returns `{ html, css }` or throws on error.

use figweave_schema::File;
use wasm_bindgen::prelude::*;

/// Render one frame of a Figma file to HTML + CSS.
///
/// `frame_name` selects a top-level frame by name; pass `None` (or an
/// unknown name) to fall back to the first frame. Returns a JS object
/// with `{ html: string, css: string }` where `css` is the finished
/// stylesheet text. Throws a JS error on malformed JSON or a frameless
/// file.
#[wasm_bindgen]
pub fn render(file_json: &str, frame_name: Option<String>) -> Result<JsValue, JsError> {
    let file: File =
        serde_json::from_str(file_json).map_err(|e| JsError::new(&e.to_string()))?;

    let output = render_file(&file, frame_name.as_deref())
        .map_err(|message| JsError::new(message))?;

    // Serialize to a plain JS object { html, css }
    let js_obj = js_sys::Object::new();
    let css = output.stylesheet();
    js_sys::Reflect::set(&js_obj, &"html".into(), &output.html.into())
        .map_err(|_| JsError::new("Failed to set html property"))?;
    js_sys::Reflect::set(&js_obj, &"css".into(), &css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;

    Ok(js_obj.into())
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Frame selection + rendering shared by the binding and native tests.
fn render_file(
    file: &File,
    frame_name: Option<&str>,
) -> Result<figweave_codegen::RenderOutput, &'static str> {
    let frames = file.top_frames();
    if frames.is_empty() {
        return Err("No top-level frames in this file.");
    }
    let target = match frame_name {
        Some(name) => frames
            .iter()
            .find(|f| f.name == name)
            .unwrap_or(&frames[0])
            .node,
        None => frames[0].node,
    };
    Ok(figweave_codegen::render(target))
}
