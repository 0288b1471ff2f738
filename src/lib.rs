pub mod clock;
pub mod color;
pub mod config;
pub mod game;
pub mod layout;
pub mod march;
pub mod motion;
pub mod player;
pub mod render;
pub mod scene;
pub mod transform;
pub mod vector;

pub use color::Rgba;
pub use game::Game;
pub use march::{cast_ray, Hit, MarchError};
pub use player::{Fov, Player};
pub use render::{render_game, RenderSettings, RenderTarget};
pub use scene::{Cell, Scene, TextureHandle};
pub use vector::Vector2;
