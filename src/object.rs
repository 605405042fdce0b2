use nalgebra::{Point3, Vector3};

use crate::error::{Result, SceneError};
use crate::picture::Color;
use crate::ray::{Hit, Ray, SurfaceHit};

/// Direction components smaller than this are treated as parallel to the slab.
pub const AXIS_EPSILON: f32 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point3<f32>,
    radius: f32,
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidPrimitive(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        Ok(Sphere { center, radius })
    }

    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Near-root intersection. `ray.direction` must be unit length, since the
    /// projection onto it is used as a distance.
    pub fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let v = self.center - ray.origin;
        let proj = ray.direction.dot(&v);
        let delta = self.radius * self.radius + proj * proj - v.dot(&v);
        if delta <= 0.0 {
            return None;
        }

        // origin inside the sphere or sphere behind the origin
        let d = proj - delta.sqrt();
        if d <= 0.0 {
            return None;
        }

        let point = ray.at(d);
        Some(SurfaceHit {
            point,
            normal: (point - self.center) / self.radius,
        })
    }
}

/// Axis-aligned box, seen from the outside only.
#[derive(Clone, Debug, PartialEq)]
pub struct Cuboid {
    min: Point3<f32>,
    max: Point3<f32>,
}

impl Cuboid {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Result<Self> {
        if (0..3).any(|i| !(min[i] < max[i])) {
            return Err(SceneError::InvalidPrimitive(format!(
                "box extent must be positive on every axis, got min {min} max {max}"
            )));
        }
        Ok(Cuboid { min, max })
    }

    pub fn min(&self) -> Point3<f32> {
        self.min
    }

    pub fn max(&self) -> Point3<f32> {
        self.max
    }

    fn strictly_inside(&self, point: &Point3<f32>, axis: usize) -> bool {
        point[axis] > self.min[axis] && point[axis] < self.max[axis]
    }

    /// Tests the three faces turned towards the ray, in x, y, z order, and
    /// returns the first one crossed. For a convex box entered from outside at
    /// most one of them can be crossed.
    pub fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        for i in 0..3 {
            let dir = ray.direction[i];
            if dir.abs() < AXIS_EPSILON {
                continue;
            }

            let (plane, facing) = if dir > 0.0 {
                (self.min[i], -1.0)
            } else {
                (self.max[i], 1.0)
            };
            let d = (plane - ray.origin[i]) / dir;
            if d <= 0.0 {
                continue;
            }

            let point = ray.at(d);
            if self.strictly_inside(&point, (i + 1) % 3) && self.strictly_inside(&point, (i + 2) % 3) {
                let mut normal = Vector3::zeros();
                normal[i] = facing;
                return Some(SurfaceHit { point, normal });
            }
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Cuboid(Cuboid),
}

impl Shape {
    pub fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray),
            Shape::Cuboid(cuboid) => cuboid.hit(ray),
        }
    }
}

/// A colored shape. A color with any channel above 1.0 makes it a lamp
/// (see [`Hit::is_lamp`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub color: Color,
}

impl Primitive {
    pub fn sphere(center: Point3<f32>, radius: f32, color: Color) -> Result<Self> {
        Ok(Primitive {
            shape: Shape::Sphere(Sphere::new(center, radius)?),
            color,
        })
    }

    pub fn cuboid(min: Point3<f32>, max: Point3<f32>, color: Color) -> Result<Self> {
        Ok(Primitive {
            shape: Shape::Cuboid(Cuboid::new(min, max)?),
            color,
        })
    }

    pub fn hit(&self, ray: &Ray) -> Option<Hit> {
        self.shape.hit(ray).map(|hit| hit.with_color(self.color))
    }
}
