use float_ord::FloatOrd;
use nalgebra::point;

use crate::error::Result;
use crate::object::Primitive;
use crate::picture::Color;
use crate::ray::{Hit, Ray};

/// Fixed, ordered set of primitives. Never mutated once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Scene { primitives }
    }

    /// Two spheres, one spherical lamp and two boxes.
    pub fn reference() -> Result<Self> {
        Ok(Scene::new(vec![
            Primitive::sphere(point![6.0, 0.0, 7.0], 2.0, Color::new(1.0, 0.4, 0.6))?,
            Primitive::sphere(point![2.8, 1.1, 7.0], 0.9, Color::new(1.0, 1.0, 0.3))?,
            Primitive::sphere(point![5.0, -10.0, -7.0], 8.0, Color::gray(2.0))?,
            Primitive::cuboid(point![3.0, -4.0, 11.0], point![7.0, 2.0, 13.0], Color::new(0.4, 0.7, 1.0))?,
            Primitive::cuboid(point![0.0, 2.0, 6.0], point![11.0, 2.2, 16.0], Color::new(0.6, 0.7, 0.6))?,
        ]))
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Nearest hit by squared distance from the ray origin. On an exact tie
    /// the earlier primitive wins.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.primitives.iter()
            .filter_map(|primitive| primitive.hit(ray))
            .min_by_key(|hit| FloatOrd(nalgebra::distance_squared(&ray.origin, &hit.point)))
    }
}
