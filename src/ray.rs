use nalgebra::{Point3, Vector3};

use crate::picture::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Intersection with a single shape, before the primitive's color is attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    pub point: Point3<f32>,
    pub normal: Vector3<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub point: Point3<f32>,
    pub normal: Vector3<f32>,
    pub color: Color,
}

impl Hit {
    /// Lamps are marked by an emissive color.
    pub fn is_lamp(&self) -> bool {
        self.color.is_emissive()
    }
}

impl SurfaceHit {
    pub fn with_color(self, color: Color) -> Hit {
        Hit {
            point: self.point,
            normal: self.normal,
            color,
        }
    }
}
