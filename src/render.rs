use log::trace;

use crate::color::Rgba;
use crate::march::cast_ray;
use crate::player::Player;
use crate::scene::{Cell, Scene, TextureHandle};
use crate::transform::TransformStack;
use crate::vector::Vector2;

/// Rectangle in the target's current coordinate units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    pub fn origin(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.w, self.h)
    }
}

/// Drawing surface the renderer paints on
///
/// Coordinates passed to the drawing calls are in the units set up by
/// `translate`/`scale`; implementations map them through `transform_mut()`'s
/// current transform before touching pixels.
pub trait RenderTarget {
    /// Canvas size in pixels
    fn size(&self) -> Vector2;

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn draw_line(&mut self, from: Vector2, to: Vector2, width: f64, color: Rgba);

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Rgba);

    /// Copy region `src` of `texture` (in texels) into `dst`
    fn blit(&mut self, texture: TextureHandle, src: Rect, dst: Rect);

    fn transform_mut(&mut self) -> &mut TransformStack;

    fn save(&mut self) {
        self.transform_mut().save();
    }

    fn restore(&mut self) {
        self.transform_mut().restore();
    }

    fn translate(&mut self, v: Vector2) {
        self.transform_mut().translate(v);
    }

    fn scale(&mut self, s: Vector2) {
        self.transform_mut().scale(s);
    }
}

/// Camera, resolution and palette used to draw a frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Virtual resolution of the first-person view; one ray per column
    pub columns: u32,
    pub rows: u32,
    /// Full horizontal field of view in radians
    pub fov: f64,
    pub near_clipping_plane: f64,
    /// Distance falloff constant `k` in `k / (1 + depth)`
    pub brightness: f64,
    /// Minimap size relative to one cell of canvas width per grid column
    pub minimap_scale: f64,
    pub minimap_origin: Vector2,
    pub minimap_line_width: f64,
    pub minimap_player_radius: f64,
    pub background: Rgba,
    pub ceiling: Rgba,
    pub minimap_background: Rgba,
    pub grid_lines: Rgba,
    pub player_marker: Rgba,
    pub fov_lines: Rgba,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            columns: 160,
            rows: 90,
            fov: std::f64::consts::PI * 0.5,
            near_clipping_plane: 0.25,
            brightness: 4.0,
            minimap_scale: 0.3,
            minimap_origin: Vector2::zero(),
            minimap_line_width: 0.05,
            minimap_player_radius: 0.07,
            background: Rgba::from_bytes(0x18, 0x18, 0x18, 0xff),
            ceiling: Rgba::from_bytes(0x2e, 0x00, 0x00, 0xff),
            minimap_background: Rgba::from_bytes(0x18, 0x18, 0x18, 0xff),
            grid_lines: Rgba::from_bytes(0x50, 0x50, 0x50, 0xff),
            player_marker: Rgba::MAGENTA,
            fov_lines: Rgba::MAGENTA,
        }
    }
}

/// Height of a wall strip at perpendicular distance `depth`, in view rows
pub fn strip_height(depth: f64, rows: f64) -> f64 {
    rows / depth
}

/// Fractional position of `point` along the face of cell `(col, row)` it lies on
///
/// The face is the one whose axis coordinate is closest to a cell edge: a hit
/// on a vertical face (x = const) is parameterized by y and vice versa.
pub fn face_offset(point: Vector2, cell: (i32, i32)) -> f64 {
    let t = point - Vector2::new(cell.0 as f64, cell.1 as f64);
    let edge_x = t.x.abs().min((t.x - 1.0).abs());
    let edge_y = t.y.abs().min((t.y - 1.0).abs());
    let u = if edge_x <= edge_y { t.y } else { t.x };
    u.clamp(0.0, 1.0)
}

/// Texel column for face offset `u` in a texture `width` texels wide
pub fn texture_column(u: f64, width: u32) -> f64 {
    let last = width.saturating_sub(1) as f64;
    (u * width as f64).floor().clamp(0.0, last)
}

/// Paint one first-person frame followed by the minimap overlay
pub fn render_game<T: RenderTarget>(
    target: &mut T,
    scene: &Scene,
    player: &Player,
    settings: &RenderSettings,
) {
    let canvas = target.size();
    target.fill_rect(Rect::new(0.0, 0.0, canvas.x, canvas.y), settings.background);
    target.fill_rect(Rect::new(0.0, 0.0, canvas.x, canvas.y * 0.5), settings.ceiling);

    render_walls(target, scene, player, settings);
    render_minimap(target, scene, player, settings);
}

/// Cast one ray per view column and paint the wall strips
pub fn render_walls<T: RenderTarget>(
    target: &mut T,
    scene: &Scene,
    player: &Player,
    settings: &RenderSettings,
) {
    if settings.columns == 0 || settings.rows == 0 {
        return;
    }
    let columns = settings.columns as f64;
    let rows = settings.rows as f64;

    let pixels_per_unit = target.size().div(Vector2::new(columns, rows));
    target.save();
    target.scale(pixels_per_unit);

    let fov = player.fov(settings.near_clipping_plane, settings.fov);
    let heading = player.heading();

    for x in 0..settings.columns {
        let through = fov.left.lerp(fov.right, x as f64 / columns);
        let hit = match cast_ray(scene, player.position, through) {
            Ok(hit) => hit,
            Err(e) => {
                trace!("column {}: {}", x, e);
                continue;
            }
        };
        let Some((col, row)) = hit.cell else {
            continue;
        };
        let Some(&cell) = scene.cell_at(col, row) else {
            continue;
        };

        // Perpendicular distance, removes the fisheye effect
        let depth = (hit.point - player.position).dot(heading);
        let height = strip_height(depth, rows);
        let strip = Rect::new(
            x as f64,
            (rows * 0.5 - height * 0.5).floor(),
            1.0,
            height.ceil(),
        );

        match cell {
            Cell::Empty => {}
            Cell::Solid(color) => {
                let shade = (settings.brightness / (1.0 + depth)) as f32;
                target.fill_rect(strip, color.brightness(shade));
            }
            Cell::Textured(texture) => {
                let u = face_offset(hit.point, (col, row));
                let src = Rect::new(
                    texture_column(u, texture.width),
                    0.0,
                    1.0,
                    texture.height as f64,
                );
                target.blit(texture, src, strip);
            }
        }
    }

    target.restore();
}

/// Top-down view of the scene with the player and the FOV wedge
pub fn render_minimap<T: RenderTarget>(
    target: &mut T,
    scene: &Scene,
    player: &Player,
    settings: &RenderSettings,
) {
    if scene.width() == 0 || scene.height() == 0 {
        return;
    }
    let map_size = scene.size();
    let cell_size = target.size().x / map_size.x;
    let minimap_size = map_size * (cell_size * settings.minimap_scale);

    target.save();
    target.translate(settings.minimap_origin);
    target.scale(minimap_size.div(map_size));

    target.fill_rect(
        Rect::new(0.0, 0.0, map_size.x, map_size.y),
        settings.minimap_background,
    );

    let line_width = settings.minimap_line_width;
    for x in 0..=scene.width() {
        let x = x as f64;
        target.draw_line(
            Vector2::new(x, 0.0),
            Vector2::new(x, map_size.y),
            line_width,
            settings.grid_lines,
        );
    }
    for y in 0..=scene.height() {
        let y = y as f64;
        target.draw_line(
            Vector2::new(0.0, y),
            Vector2::new(map_size.x, y),
            line_width,
            settings.grid_lines,
        );
    }

    for ((col, row), cell) in scene.cells() {
        let unit = Rect::new(col as f64, row as f64, 1.0, 1.0);
        match *cell {
            Cell::Empty => {}
            Cell::Solid(color) => target.fill_rect(unit, color),
            Cell::Textured(texture) => {
                let src = Rect::new(0.0, 0.0, texture.width as f64, texture.height as f64);
                target.blit(texture, src, unit);
            }
        }
    }

    target.fill_circle(
        player.position,
        settings.minimap_player_radius,
        settings.player_marker,
    );

    let fov = player.fov(settings.near_clipping_plane, settings.fov);
    for (from, to) in [
        (fov.center, fov.left),
        (fov.center, fov.right),
        (player.position, fov.left),
        (player.position, fov.right),
    ] {
        target.draw_line(from, to, line_width, settings.fov_lines);
    }

    target.restore();
}
