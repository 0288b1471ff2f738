use crate::vector::Vector2;

/// Axis-aligned affine transform: `p * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vector2,
    pub offset: Vector2,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: Vector2::splat(1.0),
        offset: Vector2::zero(),
    };

    pub fn apply(&self, p: Vector2) -> Vector2 {
        p.mul(self.scale).add(self.offset)
    }

    /// Transform a size (no translation)
    pub fn apply_size(&self, size: Vector2) -> Vector2 {
        size.mul(self.scale)
    }

    /// Transform a length along the x axis, used for line widths and radii
    pub fn apply_length(&self, length: f64) -> f64 {
        length * self.scale.x.abs()
    }
}

/// Save/restore stack of transforms, in the manner of a 2D canvas context
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    pub fn new() -> Self {
        TransformStack::default()
    }

    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pop to the last saved transform; an unbalanced restore resets to identity
    pub fn restore(&mut self) {
        self.current = self.saved.pop().unwrap_or_default();
    }

    /// Move the origin by `v` in current units
    pub fn translate(&mut self, v: Vector2) {
        self.current.offset = self.current.apply(v);
    }

    /// Multiply the current scale component-wise by `s`
    pub fn scale(&mut self, s: Vector2) {
        self.current.scale = self.current.scale.mul(s);
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}
