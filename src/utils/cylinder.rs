use std::f64::consts::PI;

/// Right circular cylinder, dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub length: f64,
    pub diameter: f64,
}

impl Cylinder {
    pub fn new(length: f64, diameter: f64) -> Self {
        Cylinder { length, diameter }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn volume(&self) -> f64 {
        PI * self.radius().powi(2) * self.length
    }

    pub fn wall_area(&self) -> f64 {
        2.0 * PI * self.radius() * self.length
    }

    pub fn face_area(&self) -> f64 {
        PI * self.radius().powi(2)
    }

    pub fn total_surface_area(&self) -> f64 {
        self.wall_area() + 2.0 * self.face_area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume() {
        let cylinder = Cylinder::new(10.0, 2.0);
        assert_relative_eq!(cylinder.volume(), 10.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn test_wall_and_face_area() {
        let cylinder = Cylinder::new(65.0, 41.0);
        assert_relative_eq!(
            cylinder.wall_area(),
            PI * 41.0 * 65.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            cylinder.face_area(),
            PI / 4.0 * 41.0 * 41.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_total_surface_area() {
        let cylinder = Cylinder::new(3.0, 4.0);
        // 2π·2·3 + 2·π·4
        assert_relative_eq!(
            cylinder.total_surface_area(),
            20.0 * PI,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_degenerate_cylinder() {
        let cylinder = Cylinder::new(0.0, 5.0);
        assert_eq!(cylinder.volume(), 0.0);
        assert_eq!(cylinder.wall_area(), 0.0);
        assert!(cylinder.face_area() > 0.0);
    }
}
