use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlAnchorElement, HtmlCanvasElement};

// html2canvas is loaded from index.html. When the script is missing the call
// throws a ReferenceError, which `catch` turns into an Err.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = html2canvas)]
    fn html2canvas(node: &Element, options: &JsValue) -> Result<web_sys::js_sys::Promise, JsValue>;
}

const HIDE_IN_CAPTURE_ATTR: &str = "data-hide-in-screenshot";
const CAPTURE_FAILED_MESSAGE: &str = "Unable to create screenshot. Please try again.";

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("html2canvas is not available: {0}")]
    Unavailable(String),
    #[error("could not build capture options: {0}")]
    Options(String),
    #[error("rendering failed: {0}")]
    Render(String),
    #[error("renderer did not return a canvas")]
    NotACanvas,
    #[error("could not encode png: {0}")]
    Encode(String),
    #[error("could not start download: {0}")]
    Download(String),
}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CaptureOptions<'a> {
    scale: f64,
    background_color: &'a str,
    #[serde(rename = "useCORS")]
    use_cors: bool,
}

impl Default for CaptureOptions<'_> {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background_color: "#ffffff",
            use_cors: true,
        }
    }
}

/// Renders `node` to a PNG and hands it to the browser as a download.
pub async fn capture_to_png(node: &Element, file_name: &str) -> Result<(), CaptureError> {
    let options = serde_wasm_bindgen::to_value(&CaptureOptions::default())
        .map_err(|e| CaptureError::Options(e.to_string()))?;

    // Must outlive the render promise.
    let ignore = Closure::wrap(Box::new(|el: Element| el.has_attribute(HIDE_IN_CAPTURE_ATTR))
        as Box<dyn Fn(Element) -> bool>);
    web_sys::js_sys::Reflect::set(&options, &JsValue::from_str("ignoreElements"), ignore.as_ref())
        .map_err(|e| CaptureError::Options(js_detail(e)))?;

    let promise = html2canvas(node, &options).map_err(|e| CaptureError::Unavailable(js_detail(e)))?;
    let rendered = JsFuture::from(promise)
        .await
        .map_err(|e| CaptureError::Render(js_detail(e)))?;
    drop(ignore);

    let canvas: HtmlCanvasElement = rendered.dyn_into().map_err(|_| CaptureError::NotACanvas)?;
    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| CaptureError::Encode(js_detail(e)))?;

    download(&data_url, file_name)
}

fn download(href: &str, file_name: &str) -> Result<(), CaptureError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CaptureError::Download("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| CaptureError::Download(js_detail(e)))?
        .dyn_into()
        .map_err(|_| CaptureError::Download("not an anchor".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Fire-and-forget wrapper for click handlers: failures are logged and
/// reported once to the user, nothing is retried.
pub async fn capture_or_alert(node: Element, file_name: String) {
    match capture_to_png(&node, &file_name).await {
        Ok(()) => log::info!("Saved capture as {}", file_name),
        Err(e) => {
            log::error!("Screenshot failed: {}", e);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(CAPTURE_FAILED_MESSAGE);
            }
        }
    }
}
