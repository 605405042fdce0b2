use std::num::NonZeroU32;
use std::time::Instant;

use log::{debug, info};
use nalgebra::{point, Point2, vector, Vector2, Vector3};
use rayon::prelude::*;

use crate::camera::{Camera, Viewport};
use crate::config::RenderConfig;
use crate::error::{Result, SceneError};
use crate::picture::{Color, Picture};
use crate::ray::Ray;
use crate::scene::Scene;

// patterns based on DirectX (https://learn.microsoft.com/en-us/windows/win32/api/d3d11/ne-d3d11-d3d11_standard_multisample_quality_levels)
// shifted by -0.5 so that the single sample sits on the pixel coordinate itself
pub const SINGLE_SAMPLE_PATTERN: [Vector2<f32>; 1] = [vector![0.0, 0.0]];
pub const MULTISAMPLE_2X_PATTERN: [Vector2<f32>; 2] = [
    vector![-0.25, 0.25],
    vector![0.25, -0.25],
];
pub const MULTISAMPLE_4X_PATTERN: [Vector2<f32>; 4] = [
    vector![-0.375, -0.125],
    vector![-0.125, 0.375],
    vector![0.125, -0.375],
    vector![0.375, 0.125],
];
pub const MULTISAMPLE_8X_PATTERN: [Vector2<f32>; 8] = [
    vector![-0.4375, 0.0625],
    vector![-0.3125, -0.3125],
    vector![-0.1875, 0.3125],
    vector![-0.0625, -0.1875],
    vector![0.0625, 0.1875],
    vector![0.1875, -0.4375],
    vector![0.3125, -0.0625],
    vector![0.4375, 0.4375],
];

/// Non-empty list of sub-pixel offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePattern(&'static [Vector2<f32>]);

impl SamplePattern {
    pub const SINGLE: SamplePattern = SamplePattern(&SINGLE_SAMPLE_PATTERN);
    pub const MULTISAMPLE_2X: SamplePattern = SamplePattern(&MULTISAMPLE_2X_PATTERN);
    pub const MULTISAMPLE_4X: SamplePattern = SamplePattern(&MULTISAMPLE_4X_PATTERN);
    pub const MULTISAMPLE_8X: SamplePattern = SamplePattern(&MULTISAMPLE_8X_PATTERN);

    pub fn new(offsets: &'static [Vector2<f32>]) -> Result<Self> {
        if offsets.is_empty() {
            return Err(SceneError::EmptySamplePattern);
        }
        Ok(SamplePattern(offsets))
    }

    pub fn offsets(&self) -> &'static [Vector2<f32>] {
        self.0
    }
}

/// How the rays of one pixel are spread over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sampling {
    /// Fixed sub-pixel offsets.
    Pattern(SamplePattern),
    /// Uniformly jittered offsets within half a pixel. A single sample is
    /// not jittered.
    Jittered(NonZeroU32),
}

impl Sampling {
    pub fn count(&self) -> u32 {
        match self {
            Sampling::Pattern(pattern) => pattern.offsets().len() as u32,
            Sampling::Jittered(n) => n.get(),
        }
    }

    fn offset(&self, index: u32) -> Vector2<f32> {
        match self {
            Sampling::Pattern(pattern) => pattern.offsets()[index as usize],
            Sampling::Jittered(n) if n.get() == 1 => Vector2::zeros(),
            Sampling::Jittered(_) => vector![urand() / 2.0, urand() / 2.0],
        }
    }
}

/// Uniform random value in `[-1, 1)`.
pub fn urand() -> f32 {
    fastrand::f32() * 2.0 - 1.0
}

/// Mirror direction, multiplied (not divided) by its own length. For unit
/// inputs that is a no-op up to rounding, and rendered output depends on the
/// exact rounding, so it stays even though it is not a normalization.
fn reflect(v: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    let r = v - 2.0 * v.dot(n) * n;
    r * r.norm()
}

/// Color seen along `ray`. Recursion stops after `config.max_depth`
/// reflections, so at most `max_depth + 2` calls are on the stack.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: u32) -> Color {
    if depth > config.max_depth {
        return config.ambient;
    }

    let Some(hit) = scene.intersect(ray) else {
        return config.ambient;
    };
    if hit.is_lamp() {
        return config.light;
    }

    let reflected = Ray::new(hit.point, reflect(&ray.direction, &hit.normal));
    hit.color * trace(&reflected, scene, config, depth + 1)
}

/// Average color of all samples of pixel `p`.
pub fn render_pixel(p: Point2<u32>, viewport: &Viewport, scene: &Scene, config: &RenderConfig) -> Color {
    let sampling = config.sampling;
    let sum: Color = (0..sampling.count())
        .map(|i| {
            let offset = sampling.offset(i);
            viewport.emit_ray(&point![p.x as f32 + offset.x, p.y as f32 + offset.y])
        })
        .map(|ray| trace(&ray, scene, config, 0))
        .sum();
    sum / sampling.count() as f32
}

/// Fills `picture` row by row. Rows are rendered in parallel; every pixel
/// gets exactly what [`render_pixel`] returns for it.
pub fn render_picture(mut picture: Picture<&mut [Color]>, viewport: &Viewport, scene: &Scene, config: &RenderConfig) {
    let width = picture.width() as usize;
    if width == 0 {
        return;
    }

    picture.buffer_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            log::trace!(target: "app", "Rendering row {}", y);
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(point![x as u32, y as u32], viewport, scene, config);
            }
        });
}

pub fn render_frame(picture: Picture<&mut [Color]>, scene: &Scene, config: &RenderConfig) {
    let camera = Camera::new(config.focal_length, config.azimuth);
    let viewport = camera.viewport(picture.width(), picture.height());
    debug!(target: "app", "{:?}", config);
    debug!(target: "app", "{} primitives in scene", scene.primitives().len());

    info!(target: "app", "Starting frame render...");
    let start = Instant::now();
    render_picture(picture, &viewport, scene, config);
    let elapsed = start.elapsed();
    info!(target: "app", "Finished rendering. Took {:?}", elapsed);
}
