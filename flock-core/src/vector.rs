/// A 2D vector used for position, velocity and force
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    /// Clamps the vector to a maximum length, preserving direction.
    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            let normalized = self.normalize();
            Self {
                x: normalized.x * max,
                y: normalized.y * max,
            }
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn distance_squared(&self, other: &Vector2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Rotates the vector counterclockwise by `theta` radians.
    pub fn rotate(&self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Angle of the vector in radians, measured from the positive x axis.
    pub fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl core::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl core::ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector2::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vector2::zero().normalize(), Vector2::zero());
    }

    #[test]
    fn test_limit() {
        let v = Vector2::new(6.0, 8.0);
        let limited = v.limit(5.0);
        assert!((limited.magnitude() - 5.0).abs() < 0.0001);
        // Under the cap the vector passes through unchanged.
        assert_eq!(v.limit(20.0), v);
    }

    #[test]
    fn test_operations() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2::new(1.5, 2.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vector2::new(1.0, 0.0);
        let rotated = v.rotate(core::f32::consts::FRAC_PI_2);
        assert!(rotated.x.abs() < 0.0001);
        assert!((rotated.y - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_heading() {
        let v = Vector2::new(0.0, 1.0);
        assert!((v.heading() - core::f32::consts::FRAC_PI_2).abs() < 0.0001);
    }

    #[test]
    fn test_distance() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }
}
