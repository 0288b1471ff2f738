use std::collections::HashMap;

use arboard::Clipboard;
use log::{info, warn};
use macroquad::color::Color;
use macroquad::input::{is_key_pressed, is_key_released, KeyCode};
use macroquad::math::{vec2, Rect};
use macroquad::shapes::{draw_circle, draw_line, draw_rectangle};
use macroquad::texture::{draw_texture_ex, load_texture, DrawTextureParams, FilterMode, Texture2D};
use macroquad::window::{screen_height, screen_width};

use gridcaster::motion::{Intents, Key};
use gridcaster::render::{self, RenderTarget};
use gridcaster::transform::TransformStack;
use gridcaster::{Rgba, TextureHandle, Vector2};

/// Physical keys bound to each intent
const BINDINGS: [(KeyCode, Key); 8] = [
    (KeyCode::W, Key::Forward),
    (KeyCode::Up, Key::Forward),
    (KeyCode::S, Key::Backward),
    (KeyCode::Down, Key::Backward),
    (KeyCode::A, Key::TurnLeft),
    (KeyCode::Left, Key::TurnLeft),
    (KeyCode::D, Key::TurnRight),
    (KeyCode::Right, Key::TurnRight),
];

/// Feed this frame's key transitions into `intents`
///
/// macroquad reports a press only on the first frame a key goes down, so
/// auto-repeat never reaches the intents.
pub fn poll_intents(intents: &mut Intents) {
    for (code, key) in BINDINGS {
        if is_key_pressed(code) {
            intents.press(key, false);
        }
        if is_key_released(code) {
            intents.release(key, false);
        }
    }
}

/// Load every texture once; failures are logged and left out of the handle map
pub async fn load_textures(paths: &[&str]) -> (Vec<Texture2D>, HashMap<String, TextureHandle>) {
    let mut textures = Vec::new();
    let mut handles = HashMap::new();

    for &path in paths {
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Nearest);
                let handle = TextureHandle {
                    id: textures.len(),
                    width: texture.width() as u32,
                    height: texture.height() as u32,
                };
                info!("Loaded texture {} ({}x{})", path, handle.width, handle.height);
                handles.insert(path.to_string(), handle);
                textures.push(texture);
            }
            Err(e) => {
                warn!("Failed to load texture {}: {}; using fallback color", path, e);
            }
        }
    }

    (textures, handles)
}

/// Copy text to the system clipboard, logging the outcome
pub fn copy_to_clipboard(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                warn!("Failed to copy to clipboard: {}", e);
            } else {
                info!("Scene layout copied to clipboard");
                // Keep clipboard alive for a moment so clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            warn!("Failed to access clipboard: {}", e);
        }
    }
}

fn to_color(color: Rgba) -> Color {
    let [r, g, b, a] = color.to_bytes();
    Color::from_rgba(r, g, b, a)
}

/// Render target drawing through macroquad's immediate-mode API
pub struct MacroquadTarget {
    textures: Vec<Texture2D>,
    transform: TransformStack,
}

impl MacroquadTarget {
    pub fn new(textures: Vec<Texture2D>) -> Self {
        MacroquadTarget {
            textures,
            transform: TransformStack::new(),
        }
    }
}

impl RenderTarget for MacroquadTarget {
    fn size(&self) -> Vector2 {
        Vector2::new(screen_width() as f64, screen_height() as f64)
    }

    fn fill_rect(&mut self, rect: render::Rect, color: Rgba) {
        let t = self.transform.current();
        let origin = t.apply(rect.origin());
        let size = t.apply_size(rect.size());
        draw_rectangle(
            origin.x as f32,
            origin.y as f32,
            size.x as f32,
            size.y as f32,
            to_color(color),
        );
    }

    fn draw_line(&mut self, from: Vector2, to: Vector2, width: f64, color: Rgba) {
        let t = self.transform.current();
        let (from, to) = (t.apply(from), t.apply(to));
        draw_line(
            from.x as f32,
            from.y as f32,
            to.x as f32,
            to.y as f32,
            t.apply_length(width) as f32,
            to_color(color),
        );
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Rgba) {
        let t = self.transform.current();
        let center = t.apply(center);
        draw_circle(
            center.x as f32,
            center.y as f32,
            t.apply_length(radius) as f32,
            to_color(color),
        );
    }

    fn blit(&mut self, texture: TextureHandle, src: render::Rect, dst: render::Rect) {
        let Some(texture) = self.textures.get(texture.id) else {
            return;
        };
        let t = self.transform.current();
        let origin = t.apply(dst.origin());
        let size = t.apply_size(dst.size());
        draw_texture_ex(
            texture,
            origin.x as f32,
            origin.y as f32,
            Color::new(1.0, 1.0, 1.0, 1.0),
            DrawTextureParams {
                dest_size: Some(vec2(size.x as f32, size.y as f32)),
                source: Some(Rect::new(
                    src.x as f32,
                    src.y as f32,
                    src.w as f32,
                    src.h as f32,
                )),
                ..Default::default()
            },
        );
    }

    fn transform_mut(&mut self) -> &mut TransformStack {
        &mut self.transform
    }
}
