use std::ops::{Add, Mul, Neg, Sub};

/// 2D point or direction in grid units
///
/// Every operation returns a new value, operands are never modified.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    pub const fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }

    /// Vector with both components set to `value`
    pub const fn splat(value: f64) -> Self {
        Vector2 { x: value, y: value }
    }

    /// Unit vector pointing along `angle` (radians)
    pub fn from_angle(angle: f64) -> Self {
        Vector2::new(angle.cos(), angle.sin())
    }

    pub fn add(self, other: Vector2) -> Self {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vector2) -> Self {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, scalar: f64) -> Self {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise product
    pub fn mul(self, other: Vector2) -> Self {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient
    pub fn div(self, other: Vector2) -> Self {
        Vector2::new(self.x / other.x, self.y / other.y)
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.sqr_length().sqrt()
    }

    pub fn sqr_length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn sqr_distance_to(self, other: Vector2) -> f64 {
        other.sub(self).sqr_length()
    }

    /// Unit vector in the same direction, or the zero vector when the length is zero
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Vector2::zero();
        }
        Vector2::new(self.x / length, self.y / length)
    }

    /// Rotate by +90 degrees: `(x, y) -> (-y, x)`
    pub fn rot90(self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1)
    pub fn lerp(self, other: Vector2, t: f64) -> Self {
        if t == 1.0 {
            return other;
        }
        other.sub(self).scale(t).add(self)
    }

    pub fn floor(self) -> Self {
        self.map(f64::floor)
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Vector2::new(f(self.x), f(self.y))
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::sub(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vector2::zero().normalize(), Vector2::zero());
    }

    #[test]
    fn test_normalize_has_unit_length() {
        let samples = [
            Vector2::new(3.0, 4.0),
            Vector2::new(-0.001, 0.0),
            Vector2::new(1e6, -2e6),
            Vector2::new(0.3, -0.7),
        ];
        for v in samples {
            let n = v.normalize();
            assert!((n.length() - 1.0).abs() < 1e-9, "{} normalized to {}", v, n);
        }
    }

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = Vector2::new(0.1, 0.7);
        let b = Vector2::new(-3.3, 1e-3);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!(mid.sqr_distance_to(Vector2::new(-1.6, 0.3505)) < 1e-18);
    }

    #[test]
    fn test_rot90() {
        assert_eq!(Vector2::new(1.0, 0.0).rot90(), Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::new(2.0, 3.0).rot90(), Vector2::new(-3.0, 2.0));
    }

    #[test]
    fn test_component_wise_ops() {
        let a = Vector2::new(2.0, 9.0);
        let b = Vector2::new(4.0, 3.0);
        assert_eq!(a.mul(b), Vector2::new(8.0, 27.0));
        assert_eq!(a.div(b), Vector2::new(0.5, 3.0));
        assert_eq!(a.dot(b), 35.0);
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(-(a + b) * 0.5, Vector2::new(-3.0, -6.0));
    }
}
