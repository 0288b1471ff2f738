use crate::scene::Scene;
use crate::vector::Vector2;

/// Nudge that moves a stepped point strictly inside the next cell
pub const EPS: f64 = 1e-6;

/// Where a cast ray stopped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Last marched point, on the boundary of `cell`
    pub point: Vector2,
    /// Occupied cell that stopped the ray, `None` if the ray left the map
    pub cell: Option<(i32, i32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarchError {
    /// The ray made no progress out of the map within the step budget,
    /// typically a zero-length or NaN direction
    StepLimit { steps: usize },
}

impl std::fmt::Display for MarchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarchError::StepLimit { steps } => {
                write!(f, "ray did not resolve after {} grid steps", steps)
            }
        }
    }
}

impl std::error::Error for MarchError {}

/// Move `x` past the next grid line in the direction of `dx`
///
/// Lands `EPS` beyond the line so the result is inside the next cell.
pub fn snap(x: f64, dx: f64) -> f64 {
    if dx > 0.0 {
        return (x + EPS).ceil() + EPS;
    }
    if dx < 0.0 {
        return (x - EPS).floor() - EPS;
    }
    x
}

/// -1, 0 or 1; unlike `f64::signum`, zero maps to zero
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Next grid line crossing beyond `p2` on the ray through `p1` and `p2`
pub fn ray_step(p1: Vector2, p2: Vector2) -> Vector2 {
    let d = p2 - p1;

    if d.x != 0.0 && d.y != 0.0 {
        // y = k * x + c
        let k = d.y / d.x;
        let c = p1.y - k * p1.x;

        let vertical = {
            let x3 = snap(p2.x, d.x);
            Vector2::new(x3, k * x3 + c)
        };

        if k != 0.0 {
            let y3 = snap(p2.y, d.y);
            let horizontal = Vector2::new((y3 - c) / k, y3);
            if p2.sqr_distance_to(horizontal) < p2.sqr_distance_to(vertical) {
                return horizontal;
            }
        }
        return vertical;
    }

    if d.x == 0.0 {
        return Vector2::new(p2.x, snap(p2.y, d.y));
    }
    Vector2::new(snap(p2.x, d.x), p2.y)
}

/// Cell the ray through `p1` and `p2` is entering at `p2`
pub fn hitting_cell(p1: Vector2, p2: Vector2) -> (i32, i32) {
    let d = p2 - p1;
    (
        (p2.x + sign(d.x) * EPS).floor() as i32,
        (p2.y + sign(d.y) * EPS).floor() as i32,
    )
}

/// Upper bound on grid steps for a ray to leave `scene`
fn step_budget(scene: &Scene) -> usize {
    2 * (scene.width().max(0) as usize + scene.height().max(0) as usize) + 8
}

/// March from `origin` through `through` until the ray leaves the map or
/// enters an occupied cell
pub fn cast_ray(scene: &Scene, origin: Vector2, through: Vector2) -> Result<Hit, MarchError> {
    let budget = step_budget(scene);
    let mut p1 = origin;
    let mut p2 = through;

    for _ in 0..budget {
        let (col, row) = hitting_cell(p1, p2);
        match scene.cell_at(col, row) {
            None => {
                return Ok(Hit {
                    point: p2,
                    cell: None,
                })
            }
            Some(cell) if !cell.is_empty() => {
                return Ok(Hit {
                    point: p2,
                    cell: Some((col, row)),
                })
            }
            Some(_) => {}
        }

        let p3 = ray_step(p1, p2);
        p1 = p2;
        p2 = p3;
    }

    Err(MarchError::StepLimit { steps: budget })
}
