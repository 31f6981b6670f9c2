//! JavaScript entry points
//!
//! Thin wrappers that pull the session out of the thread-local and call into
//! [`Session`](crate::state::Session). Errors cross the boundary as strings.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::error::SetupError;
use crate::gpu::Renderer;
use crate::input;
use crate::pose::PoseSnapshot;
use crate::state::{initialize_app_state, with_app_state, with_app_state_mut, Session};

const NOT_STARTED: &str = "Viewer not started";

fn document() -> Result<web_sys::Document, SetupError> {
    web_sys::window()
        .ok_or(SetupError::Environment("window"))?
        .document()
        .ok_or(SetupError::Environment("document"))
}

fn find_canvas(
    document: &web_sys::Document,
    id: &str,
) -> Result<web_sys::HtmlCanvasElement, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::CanvasNotFound(id.to_string()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| SetupError::NotACanvas(id.to_string()))
}

async fn start(config: ViewerConfig) -> Result<(), SetupError> {
    let document = document()?;
    let canvas = find_canvas(&document, &config.canvas_id)?;

    // Match the drawing buffer to the CSS size
    let width = (canvas.client_width().max(1)) as u32;
    let height = (canvas.client_height().max(1)) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let camera = Camera::for_viewport(width, height);
    let renderer = Renderer::new(canvas, &config, &camera).await?;

    let mut session = Session::new(renderer, camera);
    session.redraw();
    if config.bind_controls {
        input::sync_controls(&document, &session.pose);
    }
    initialize_app_state(session);

    // Sliders only go live once the renderer exists
    if config.bind_controls {
        input::bind_controls(&document);
    }

    log::info!("Cube robot viewer started on #{}", config.canvas_id);
    Ok(())
}

/// Set up logging, the GPU and the sliders, then draw the rest pose.
///
/// `config` is an optional object: `{ canvasId, clearColor, bindControls }`.
/// GPU setup finishes asynchronously; failures are logged to the console.
#[wasm_bindgen]
pub fn start_viewer(config: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let config = ViewerConfig::from_js(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    spawn_local(async move {
        if let Err(e) = start(config).await {
            log::error!("Viewer setup failed: {}", e);
        }
    });
    Ok(())
}

/// Apply one slider value (degrees for angles) and redraw
#[wasm_bindgen]
pub fn set_control(id: &str, value: f32) -> Result<(), JsValue> {
    with_app_state_mut(|app| app.apply_control(id, value))
        .ok_or_else(|| JsValue::from_str(NOT_STARTED))?
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Back to the startup pose, sliders included
#[wasm_bindgen]
pub fn reset_pose() -> Result<(), JsValue> {
    with_app_state_mut(|app| app.reset_pose()).ok_or_else(|| JsValue::from_str(NOT_STARTED))?;
    sync_sliders();
    Ok(())
}

/// Current pose as a JSON document (angles in degrees)
#[wasm_bindgen]
pub fn export_pose_json() -> Result<String, JsValue> {
    with_app_state(|app| app.export_snapshot())
        .ok_or_else(|| JsValue::from_str(NOT_STARTED))?
        .to_json_string()
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize pose: {}", e)))
}

/// Load a pose document. Fields it leaves out take their rest-pose value.
#[wasm_bindgen]
pub fn import_pose_json(json: &str) -> Result<(), JsValue> {
    let snapshot = PoseSnapshot::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse pose: {}", e)))?;
    with_app_state_mut(|app| app.import_snapshot(&snapshot))
        .ok_or_else(|| JsValue::from_str(NOT_STARTED))?
        .map_err(|e| JsValue::from_str(&format!("Rejected pose: {}", e)))?;
    sync_sliders();
    Ok(())
}

/// Canvas size changed: update aspect ratio, depth buffer and redraw
#[wasm_bindgen]
pub fn resize_viewer(width: u32, height: u32) -> Result<(), JsValue> {
    with_app_state_mut(|app| app.resize(width, height))
        .ok_or_else(|| JsValue::from_str(NOT_STARTED))
}

/// Every slider id the viewer understands
#[wasm_bindgen]
pub fn control_ids() -> Vec<String> {
    input::control_ids()
}

fn sync_sliders() {
    let Ok(document) = document() else {
        return;
    };
    with_app_state(|app| input::sync_controls(&document, &app.pose));
}
