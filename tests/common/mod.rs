#![allow(dead_code)]

use gridcaster::render::{Rect, RenderTarget};
use gridcaster::transform::TransformStack;
use gridcaster::{Cell, Rgba, Scene, TextureHandle, Vector2};
use std::fs;
use std::path::Path;

pub const WALL: Cell = Cell::Solid(Rgba::new(0.5, 0.5, 0.5, 1.0));

pub const BRICK: TextureHandle = TextureHandle {
    id: 0,
    width: 16,
    height: 8,
};

/// Parse a standard format scene
/// Format:
/// - s: start position (empty cell)
/// - ■: solid cell
/// - T: textured cell (uses `BRICK`)
/// - □ or space: empty cell
pub fn parse_standard_scene(text: &str) -> Result<(Scene, Option<(i32, i32)>), String> {
    let mut rows = Vec::new();
    let mut start = None;

    for (y, line) in text.lines().filter(|line| !line.trim().is_empty()).enumerate() {
        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let cell = match ch {
                's' => {
                    start = Some((x as i32, y as i32));
                    Cell::Empty
                }
                '■' => WALL,
                'T' => Cell::Textured(BRICK),
                '□' | ' ' => Cell::Empty,
                _ => return Err(format!("Unknown character {:?} at ({}, {})", ch, x, y)),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err("No grid lines found".to_string());
    }

    Ok((Scene::new(rows, WALL), start))
}

/// Load a standard format scene from file
pub fn load_standard_scene(path: &Path) -> Result<(Scene, Option<(i32, i32)>), String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_standard_scene(&contents)
}

/// Mirror a standard format scene left-right
pub fn flip_standard_horizontal(text: &str) -> String {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut result = String::new();
    for line in lines {
        let mut chars: Vec<char> = line.chars().collect();
        chars.resize(width, '□');
        chars.reverse();
        result.extend(chars);
        result.push('\n');
    }
    result
}

/// Box of `width` x `height` cells with solid border and empty interior
pub fn enclosed_box(width: usize, height: usize) -> Scene {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                        WALL
                    } else {
                        Cell::Empty
                    }
                })
                .collect()
        })
        .collect();
    Scene::new(rows, WALL)
}

/// Draw call as it reached the surface, in pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Rgba },
    Line { from: Vector2, to: Vector2, width: f64, color: Rgba },
    Circle { center: Vector2, radius: f64, color: Rgba },
    Blit { texture: TextureHandle, src: Rect, dst: Rect },
}

/// Render target that records draw calls instead of painting
pub struct RecordingTarget {
    pub size: Vector2,
    pub commands: Vec<DrawCommand>,
    pub transform: TransformStack,
}

impl RecordingTarget {
    pub fn new(width: f64, height: f64) -> Self {
        RecordingTarget {
            size: Vector2::new(width, height),
            commands: Vec::new(),
            transform: TransformStack::new(),
        }
    }

    pub fn rects(&self) -> Vec<(Rect, Rgba)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<(TextureHandle, Rect, Rect)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Blit { texture, src, dst } => Some((*texture, *src, *dst)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl RenderTarget for RecordingTarget {
    fn size(&self) -> Vector2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let t = self.transform.current();
        let origin = t.apply(rect.origin());
        let size = t.apply_size(rect.size());
        self.commands.push(DrawCommand::FillRect {
            rect: Rect::new(origin.x, origin.y, size.x, size.y),
            color,
        });
    }

    fn draw_line(&mut self, from: Vector2, to: Vector2, width: f64, color: Rgba) {
        let t = self.transform.current();
        self.commands.push(DrawCommand::Line {
            from: t.apply(from),
            to: t.apply(to),
            width: t.apply_length(width),
            color,
        });
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Rgba) {
        let t = self.transform.current();
        self.commands.push(DrawCommand::Circle {
            center: t.apply(center),
            radius: t.apply_length(radius),
            color,
        });
    }

    fn blit(&mut self, texture: TextureHandle, src: Rect, dst: Rect) {
        let t = self.transform.current();
        let origin = t.apply(dst.origin());
        let size = t.apply_size(dst.size());
        self.commands.push(DrawCommand::Blit {
            texture,
            src,
            dst: Rect::new(origin.x, origin.y, size.x, size.y),
        });
    }

    fn transform_mut(&mut self) -> &mut TransformStack {
        &mut self.transform
    }
}
