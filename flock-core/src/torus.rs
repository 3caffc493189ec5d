use crate::error::ConfigError;
use crate::vector::Vector2;

/// The rectangular tile whose periodic repetition forms the torus.
///
/// Half-dimensions are cached because the nearest-image test uses them for
/// every pair of boids on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    width: f32,
    height: f32,
    half_width: f32,
    half_height: f32,
}

impl Domain {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ConfigError::InvalidDomain { width, height });
        }
        Ok(Self {
            width,
            height,
            half_width: width / 2.0,
            half_height: height / 2.0,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.half_width, self.half_height)
    }

    /// Changes the tile dimensions, recomputing the cached halves. The metric
    /// and the wrap step both read from here, so they can never disagree.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        *self = Domain::new(width, height)?;
        Ok(())
    }
}

/// Which of the nine periodic images of a point was nearest, named for where
/// the raw point lies relative to the reference's half-dimension window.
/// Purely diagnostic; the flocking rules only use the image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    LeftAbove,
    Left,
    LeftBelow,
    Above,
    Center,
    Below,
    RightAbove,
    Right,
    RightBelow,
}

impl Zone {
    /// Legacy outcode: columns left-to-right are 1-3, 4-6, 7-9, with 5 the
    /// unshifted center.
    pub fn code(self) -> u8 {
        match self {
            Zone::LeftAbove => 1,
            Zone::Left => 2,
            Zone::LeftBelow => 3,
            Zone::Above => 4,
            Zone::Center => 5,
            Zone::Below => 6,
            Zone::RightAbove => 7,
            Zone::Right => 8,
            Zone::RightBelow => 9,
        }
    }

    pub fn is_center(self) -> bool {
        self == Zone::Center
    }
}

/// Returns the point congruent to `other` modulo the domain lattice that is
/// closest to `reference`, deciding each axis independently: the image
/// coordinate is the one falling inside the window of one half-dimension on
/// either side of `reference`.
pub fn nearest_image(domain: &Domain, reference: Vector2, other: Vector2) -> (Vector2, Zone) {
    let left = reference.x - domain.half_width();
    let right = reference.x + domain.half_width();
    let top = reference.y - domain.half_height();
    let bottom = reference.y + domain.half_height();

    if other.x < left {
        if other.y < top {
            (
                Vector2::new(other.x + domain.width(), other.y + domain.height()),
                Zone::LeftAbove,
            )
        } else if other.y > bottom {
            (
                Vector2::new(other.x + domain.width(), other.y - domain.height()),
                Zone::LeftBelow,
            )
        } else {
            (Vector2::new(other.x + domain.width(), other.y), Zone::Left)
        }
    } else if other.x > right {
        if other.y < top {
            (
                Vector2::new(other.x - domain.width(), other.y + domain.height()),
                Zone::RightAbove,
            )
        } else if other.y > bottom {
            (
                Vector2::new(other.x - domain.width(), other.y - domain.height()),
                Zone::RightBelow,
            )
        } else {
            (Vector2::new(other.x - domain.width(), other.y), Zone::Right)
        }
    } else if other.y < top {
        (
            Vector2::new(other.x, other.y + domain.height()),
            Zone::Above,
        )
    } else if other.y > bottom {
        (
            Vector2::new(other.x, other.y - domain.height()),
            Zone::Below,
        )
    } else {
        (other, Zone::Center)
    }
}

/// Distance from `a` to the nearest periodic image of `b`.
pub fn toroidal_distance(domain: &Domain, a: Vector2, b: Vector2) -> f32 {
    let (image, _) = nearest_image(domain, a, b);
    a.distance(&image)
}
