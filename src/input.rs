//! Slider input
//!
//! Each HTML range input is named after the pose field it drives (see
//! [`PoseField::control_id`]). Angle sliders report degrees, size sliders
//! report the raw scalar. One input event updates exactly one field.

use crate::error::InputError;
use crate::pose::{PoseField, PoseState};

/// Slider reading -> stored value (degrees become radians)
#[inline]
pub fn control_to_field_value(field: PoseField, value: f32) -> f32 {
    if field.is_angle() {
        value.to_radians()
    } else {
        value
    }
}

/// Stored value -> slider reading
#[inline]
pub fn field_to_control_value(field: PoseField, stored: f32) -> f32 {
    if field.is_angle() {
        stored.to_degrees()
    } else {
        stored
    }
}

/// Parse the string value of an `<input>` element
pub fn parse_control_value(id: &str, raw: &str) -> Result<f32, InputError> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidValue {
            id: id.to_string(),
            value: raw.to_string(),
        })
}

/// Apply one slider reading to the pose.
///
/// Returns the field that changed. On error the pose is untouched.
pub fn apply_control(pose: &mut PoseState, id: &str, value: f32) -> Result<PoseField, InputError> {
    let field =
        PoseField::from_control_id(id).ok_or_else(|| InputError::UnknownControl(id.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::InvalidValue {
            id: id.to_string(),
            value: value.to_string(),
        });
    }

    pose.set(field, control_to_field_value(field, value));
    Ok(field)
}

/// Slider ids in field order
pub fn control_ids() -> Vec<String> {
    PoseField::all().map(PoseField::control_id).collect()
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::field_to_control_value;
    use crate::pose::{PoseField, PoseState};
    use wasm_bindgen::prelude::*;

    fn find_input(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlInputElement> {
        document
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()
    }

    /// Attach an `input` listener to every slider present in the page.
    ///
    /// Missing sliders are skipped with a warning. Returns how many were bound.
    pub fn bind_controls(document: &web_sys::Document) -> usize {
        let mut bound = 0;

        for field in PoseField::all() {
            let id = field.control_id();
            let Some(input) = find_input(document, &id) else {
                log::warn!("No slider for {:?} (#{})", field, id);
                continue;
            };

            let source = input.clone();
            let control = id.clone();
            let on_input = Closure::<dyn FnMut()>::new(move || {
                let raw = source.value();
                let result = crate::state::with_app_state_mut(|app| {
                    app.apply_raw_control(&control, &raw)
                });
                match result {
                    Some(Ok(_)) => {}
                    Some(Err(e)) => log::warn!("Ignored slider input: {}", e),
                    None => log::warn!("Viewer not started, ignoring #{}", control),
                }
            });

            if input
                .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
                .is_ok()
            {
                bound += 1;
            } else {
                log::warn!("Could not listen to #{}", id);
            }
            // Listeners live as long as the page
            on_input.forget();
        }

        log::info!("Bound {} of {} pose sliders", bound, PoseField::COUNT);
        bound
    }

    /// Move every slider to the value held in `pose`
    pub fn sync_controls(document: &web_sys::Document, pose: &PoseState) {
        for field in PoseField::all() {
            if let Some(input) = find_input(document, &field.control_id()) {
                let value = field_to_control_value(field, pose.get(field));
                input.set_value(&value.to_string());
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::{bind_controls, sync_controls};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Axis, Joint, Size};

    #[test]
    fn test_angle_controls_take_degrees() {
        let mut pose = PoseState::zeroed();
        let field = apply_control(&mut pose, "headY", 90.0).unwrap();

        assert_eq!(field, PoseField::Angle(Joint::Head, Axis::Y));
        assert!((pose.joint(Joint::Head).y - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_size_controls_take_raw_values() {
        let mut pose = PoseState::rest_pose();
        let field = apply_control(&mut pose, "legLength", 2.0).unwrap();

        assert_eq!(field, PoseField::Size(Size::LegLength));
        assert_eq!(pose.leg_length_scale, 2.0);
        assert!((pose.leg_height() - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_every_control_drives_its_own_field() {
        for id in control_ids() {
            let before = PoseState::rest_pose();
            let mut after = before;
            let field = apply_control(&mut after, &id, 12.5).unwrap();

            for other in PoseField::all() {
                if other != field {
                    assert_eq!(after.get(other), before.get(other), "{id} touched {other:?}");
                }
            }
            let reading = field_to_control_value(field, after.get(field));
            assert!((reading - 12.5).abs() < 1e-4, "{id} read back {reading}");
        }
    }

    #[test]
    fn test_unknown_control_is_rejected() {
        let mut pose = PoseState::rest_pose();
        let err = apply_control(&mut pose, "tailX", 10.0).unwrap_err();
        assert_eq!(err, InputError::UnknownControl("tailX".to_string()));
        assert_eq!(pose, PoseState::rest_pose());
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let mut pose = PoseState::rest_pose();
        assert!(apply_control(&mut pose, "torsoX", f32::NAN).is_err());
        assert!(apply_control(&mut pose, "torsoSize", f32::INFINITY).is_err());
        assert_eq!(pose, PoseState::rest_pose());
    }

    #[test]
    fn test_parse_control_value() {
        assert_eq!(parse_control_value("torsoX", " -45 "), Ok(-45.0));
        assert_eq!(parse_control_value("headSize", "0.75"), Ok(0.75));
        assert!(matches!(
            parse_control_value("torsoX", "abc"),
            Err(InputError::InvalidValue { .. })
        ));
        assert!(parse_control_value("torsoX", "NaN").is_err());
        assert!(parse_control_value("torsoX", "").is_err());
    }

    #[test]
    fn test_control_ids_cover_every_field() {
        let ids = control_ids();
        assert_eq!(ids.len(), PoseField::COUNT);
        assert!(ids.contains(&"torsoX".to_string()));
        assert!(ids.contains(&"upperLZ".to_string()));
        assert!(ids.contains(&"legLength".to_string()));
    }
}
