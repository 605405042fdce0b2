use nalgebra::{Point2, Point3, Rotation3, vector, Vector3};

use crate::ray::Ray;

/// Pinhole camera at the world origin, turned about the vertical axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: f32,
    pub focal_length: f32,
}

impl Camera {
    pub fn new(focal_length: f32, yaw: f32) -> Self {
        Camera {
            position: Point3::origin(),
            yaw,
            focal_length,
        }
    }

    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        Viewport {
            origin: self.position,
            image_width: width as f32,
            image_height: height as f32,
            focal_length: self.focal_length,
            rotation: Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw),
        }
    }
}

/// Camera resolved for a given image size.
pub struct Viewport {
    pub origin: Point3<f32>,
    pub image_width: f32,
    pub image_height: f32,
    pub focal_length: f32,
    pub rotation: Rotation3<f32>,
}

impl Viewport {
    /// Ray through pixel coordinate `p`; `(0, 0)` is the top left corner and
    /// the image center looks straight down the rotated z axis. The direction
    /// is normalized before rotation, so it is always unit length.
    pub fn emit_ray(&self, p: &Point2<f32>) -> Ray {
        let direction = vector![
            p.x - self.image_width / 2.0,
            p.y - self.image_height / 2.0,
            self.focal_length
        ];
        Ray::new(self.origin, self.rotation * direction.normalize())
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::point;

    use super::*;

    #[test]
    fn center_ray_follows_yaw() {
        let yaw = 30f32.to_radians();
        let viewport = Camera::new(60.0, yaw).viewport(80, 50);
        let ray = viewport.emit_ray(&point![40.0, 25.0]);
        assert_eq!(ray.origin, Point3::origin());
        assert_relative_eq!(ray.direction, vector![yaw.sin(), 0.0, yaw.cos()], epsilon = 1e-6);
    }

    #[test]
    fn rotation_matches_explicit_formula() {
        let yaw = 0.7f32;
        let viewport = Camera::new(60.0, yaw).viewport(80, 50);
        let ray = viewport.emit_ray(&point![3.0, 41.0]);

        let d = vector![3.0 - 40.0, 41.0 - 25.0, 60.0f32].normalize();
        let expected = vector![
            yaw.cos() * d.x + yaw.sin() * d.z,
            d.y,
            -yaw.sin() * d.x + yaw.cos() * d.z
        ];
        assert_relative_eq!(ray.direction, expected, epsilon = 1e-6);
    }

    #[test]
    fn directions_are_unit_length() {
        let viewport = Camera::new(60.0, 1.2).viewport(80, 50);
        for (x, y) in [(0.0, 0.0), (79.0, 49.0), (12.5, 3.25)] {
            let ray = viewport.emit_ray(&point![x, y]);
            assert_abs_diff_eq!(ray.direction.norm(), 1.0, epsilon = 1e-6);
        }
    }
}
