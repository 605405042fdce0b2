use crate::picture::Color;
use crate::render::{SamplePattern, Sampling};

/// Parameters shared by every pixel of a frame. Built once, read-only after.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Distance from the eye to the image plane, in pixels.
    pub focal_length: f32,
    /// Camera rotation about the vertical axis, in radians.
    pub azimuth: f32,
    pub sampling: Sampling,
    /// Reflections deeper than this return the ambient color.
    pub max_depth: u32,
    /// Returned for rays escaping the scene or running out of depth.
    pub ambient: Color,
    /// Returned when a ray reaches a lamp.
    pub light: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            focal_length: 60.0,
            azimuth: 30f32.to_radians(),
            sampling: Sampling::Pattern(SamplePattern::SINGLE),
            max_depth: 3,
            ambient: Color::gray(0.5),
            light: Color::WHITE,
        }
    }
}
