//! Runtime viewer options passed from JavaScript.

use serde::{Deserialize, Serialize};

/// Options for [`start_viewer`](crate::viewer::start_viewer). Every field
/// has a default, so `{}` or `undefined` from JS is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Id of the `<canvas>` element to render into
    pub canvas_id: String,
    /// RGBA background, components in [0, 1]
    pub clear_color: [f64; 4],
    /// Attach listeners to the pose sliders found in the page
    pub bind_controls: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            canvas_id: "c".to_string(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            bind_controls: true,
        }
    }
}

impl ViewerConfig {
    /// Decode a config object coming from JS. `undefined` and `null` give the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self, crate::error::SetupError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| crate::error::SetupError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.canvas_id, "c");
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert!(config.bind_controls);
    }

    #[test]
    fn test_partial_object_keeps_other_defaults() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{ "canvasId": "robot", "bindControls": false }"#).unwrap();
        assert_eq!(config.canvas_id, "robot");
        assert!(!config.bind_controls);
        assert_eq!(config.clear_color, ViewerConfig::default().clear_color);
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(serde_json::from_str::<ViewerConfig>(r#"{ "clearColor": "black" }"#).is_err());
    }
}
