//! Per-part draw dispatch between the rig and a renderer.

use crate::camera::Camera;
use crate::rig::{FigureTransforms, PartTransform};
use glam::Mat4;

/// What the figure needs from a renderer: load a matrix, draw the shared cube.
///
/// The frame and resize hooks default to no-ops so that recording
/// renderers only implement the two draw calls.
pub trait CubeRenderer {
    /// Called once before the first part of a redraw
    fn begin_frame(&mut self) {}

    /// Matrix used by the next [`CubeRenderer::draw_cube`] call
    fn set_view_matrix(&mut self, matrix: Mat4);

    /// Draw the 36-index cube mesh with the current matrix
    fn draw_cube(&mut self);

    /// Called once after the last part of a redraw
    fn end_frame(&mut self) {}

    /// Viewport changed size; `projection` already has the new aspect ratio
    fn resize_viewport(&mut self, _width: u32, _height: u32, _projection: Mat4) {}
}

/// `view * chain * scale(dimensions)`
#[inline]
pub fn part_view_matrix(view: Mat4, part: &PartTransform) -> Mat4 {
    view * part.model_matrix()
}

/// Issue one matrix + draw pair per part, in figure order.
pub fn draw_figure<R: CubeRenderer + ?Sized>(
    renderer: &mut R,
    camera: &Camera,
    figure: &FigureTransforms,
) {
    for part in figure.iter() {
        // The camera never moves, so this is the same matrix for every part
        let view = camera.view_matrix();
        renderer.set_view_matrix(part_view_matrix(view, part));
        renderer.draw_cube();
    }
}

/// A complete redraw: frame begin, every part, frame end.
pub fn render_figure<R: CubeRenderer + ?Sized>(
    renderer: &mut R,
    camera: &Camera,
    figure: &FigureTransforms,
) {
    renderer.begin_frame();
    draw_figure(renderer, camera, figure);
    renderer.end_frame();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pose::PoseState;
    use crate::rig::{compose_figure, BodyPart};
    use glam::Vec3;

    /// Renderer that remembers every call
    #[derive(Debug, Default)]
    pub(crate) struct RecordingRenderer {
        pub current: Option<Mat4>,
        pub drawn: Vec<Mat4>,
        pub frames_begun: usize,
        pub frames_ended: usize,
        pub resized_to: Option<(u32, u32)>,
    }

    impl CubeRenderer for RecordingRenderer {
        fn begin_frame(&mut self) {
            self.frames_begun += 1;
            self.drawn.clear();
        }

        fn set_view_matrix(&mut self, matrix: Mat4) {
            self.current = Some(matrix);
        }

        fn draw_cube(&mut self) {
            if let Some(m) = self.current {
                self.drawn.push(m);
            }
        }

        fn end_frame(&mut self) {
            self.frames_ended += 1;
        }

        fn resize_viewport(&mut self, width: u32, height: u32, _projection: Mat4) {
            self.resized_to = Some((width, height));
        }
    }

    #[test]
    fn test_one_draw_per_part() {
        let figure = compose_figure(&PoseState::rest_pose());
        let mut renderer = RecordingRenderer::default();
        render_figure(&mut renderer, &Camera::default(), &figure);

        assert_eq!(renderer.drawn.len(), BodyPart::COUNT);
        assert_eq!(renderer.frames_begun, 1);
        assert_eq!(renderer.frames_ended, 1);
    }

    #[test]
    fn test_matrix_order_is_view_chain_scale() {
        let camera = Camera::default();
        let figure = compose_figure(&PoseState::rest_pose());
        let mut renderer = RecordingRenderer::default();
        draw_figure(&mut renderer, &camera, &figure);

        let view = camera.view_matrix();
        for (drawn, part) in renderer.drawn.iter().zip(figure.iter()) {
            let expected = view * part.chain * Mat4::from_scale(part.dimensions);
            assert!(drawn.abs_diff_eq(expected, 1e-4), "{:?}", part.part);
        }
    }

    #[test]
    fn test_torso_center_maps_through_view() {
        let camera = Camera::default();
        let figure = compose_figure(&PoseState::zeroed());
        let torso = figure.get(BodyPart::Torso);
        let m = part_view_matrix(camera.view_matrix(), torso);

        // Unit cube center is the torso origin, which is the camera target
        let center = m.transform_point3(Vec3::ZERO);
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5);
        assert!(center.z < 0.0);
    }
}
