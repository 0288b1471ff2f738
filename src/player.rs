use crate::vector::Vector2;

/// Viewer position and heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vector2,
    /// Heading in radians, never normalized to a canonical range
    pub direction: f64,
}

/// Near edge of the viewing frustum
///
/// `left` and `right` are the endpoints of the clipping segment as seen by the
/// player (screen y points down, so `rot90` of the heading points right).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fov {
    pub center: Vector2,
    pub left: Vector2,
    pub right: Vector2,
}

impl Player {
    pub fn new(position: Vector2, direction: f64) -> Self {
        Player {
            position,
            direction,
        }
    }

    /// Unit vector along the heading
    pub fn heading(&self) -> Vector2 {
        Vector2::from_angle(self.direction)
    }

    /// Clipping segment at `clip_distance` for a full field-of-view angle `fov`
    pub fn fov(&self, clip_distance: f64, fov: f64) -> Fov {
        let center = self.position + self.heading() * clip_distance;
        let half_width = (fov * 0.5).tan() * clip_distance;
        let side = (center - self.position).rot90().normalize() * half_width;

        Fov {
            center,
            left: center - side,
            right: center + side,
        }
    }

    /// Grid cell the player stands in
    pub fn cell(&self) -> (i32, i32) {
        (
            self.position.x.floor() as i32,
            self.position.y.floor() as i32,
        )
    }
}
