use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::scene::{Cell, Scene, TextureHandle};

/// What a legend character stands for in a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellDescriptor {
    Empty,
    Color(Rgba),
    /// Path of an image, loaded once at startup
    Texture(String),
}

/// Scene file contents: a legend and character rows
///
/// ```json
/// {
///   "fallback": [1.0, 0.0, 0.0, 1.0],
///   "legend": { "#": { "texture": "assets/textures/wall.png" }, "R": { "color": [1, 0, 0, 1] }, ".": "empty" },
///   "rows": ["###", "#.R", "###"]
/// }
/// ```
///
/// Rows may be jagged. A space always means an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Wall color used when a texture fails to load
    #[serde(default = "default_fallback")]
    pub fallback: Rgba,
    pub legend: BTreeMap<String, CellDescriptor>,
    pub rows: Vec<String>,
}

fn default_fallback() -> Rgba {
    Rgba::RED
}

/// Character written at the player's cell by `to_text`
pub const PLAYER_MARKER: char = '@';

const DEFAULT_WALL_TEXTURE: &str = "assets/textures/wall.png";

const DEFAULT_ROWS: [&str; 11] = [
    "###############",
    "#.....#R......#",
    "#.###.#.####..#",
    "#...#......#..#",
    "###.###.##.#..#",
    "#B....#.#.....#",
    "###.#.#.#.###.#",
    "#...#......Y#.#",
    "#.###########.#",
    "#......G......#",
    "###############",
];

impl Default for SceneDescription {
    fn default() -> Self {
        let legend = [
            ("#", CellDescriptor::Texture(DEFAULT_WALL_TEXTURE.to_string())),
            (".", CellDescriptor::Empty),
            ("R", CellDescriptor::Color(Rgba::RED)),
            ("G", CellDescriptor::Color(Rgba::GREEN)),
            ("B", CellDescriptor::Color(Rgba::BLUE)),
            ("Y", CellDescriptor::Color(Rgba::YELLOW)),
        ]
        .into_iter()
        .map(|(key, descriptor)| (key.to_string(), descriptor))
        .collect();

        SceneDescription {
            fallback: default_fallback(),
            legend,
            rows: DEFAULT_ROWS.iter().map(|row| row.to_string()).collect(),
        }
    }
}

impl SceneDescription {
    /// Parse and validate a JSON scene description
    pub fn from_json(json: &str) -> Result<Self> {
        let description: SceneDescription =
            serde_json::from_str(json).context("Failed to parse scene description")?;
        description.validate()?;
        Ok(description)
    }

    /// Load a scene description from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    /// Check that legend keys are single characters and every row character
    /// is either a space or in the legend
    pub fn validate(&self) -> Result<()> {
        for key in self.legend.keys() {
            if key.chars().count() != 1 {
                bail!("Legend key {:?} must be exactly one character", key);
            }
        }

        for (y, row) in self.rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if self.descriptor(ch).is_none() {
                    bail!("Unknown cell character {:?} at column {}, row {}", ch, x, y);
                }
            }
        }

        Ok(())
    }

    /// Descriptor for a row character; a space is always empty
    pub fn descriptor(&self, ch: char) -> Option<&CellDescriptor> {
        const SPACE: &CellDescriptor = &CellDescriptor::Empty;
        if ch == ' ' {
            return Some(SPACE);
        }
        let mut buf = [0u8; 4];
        self.legend.get(&*ch.encode_utf8(&mut buf))
    }

    /// Distinct texture paths referenced by the legend, in legend order
    pub fn texture_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for descriptor in self.legend.values() {
            if let CellDescriptor::Texture(path) = descriptor {
                if !paths.contains(&path.as_str()) {
                    paths.push(path);
                }
            }
        }
        paths
    }

    /// Resolve descriptors into a scene
    ///
    /// `textures` maps texture paths to loaded handles; a path missing from it
    /// falls back to a solid wall of the `fallback` color.
    pub fn build(&self, textures: &HashMap<String, TextureHandle>) -> Scene {
        let fallback = Cell::Solid(self.fallback);

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| match self.descriptor(ch) {
                        Some(CellDescriptor::Empty) | None => Cell::Empty,
                        Some(CellDescriptor::Color(color)) => Cell::Solid(*color),
                        Some(CellDescriptor::Texture(path)) => match textures.get(path) {
                            Some(&handle) => Cell::Textured(handle),
                            None => fallback,
                        },
                    })
                    .collect()
            })
            .collect();

        let scene = Scene::new(rows, fallback);
        if !encloses(&scene) {
            warn!("Scene border has open cells; rays leaving the map will show background");
        }
        scene
    }

    /// Layout rows as text, padded to the widest row, with `PLAYER_MARKER` at
    /// `player_cell`
    pub fn to_text(&self, player_cell: (i32, i32)) -> String {
        let width = self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut result = String::new();

        for (y, row) in self.rows.iter().enumerate() {
            let mut chars: Vec<char> = row.chars().collect();
            chars.resize(width, ' ');

            if y as i32 == player_cell.1 && player_cell.0 >= 0 && (player_cell.0 as usize) < width {
                chars[player_cell.0 as usize] = PLAYER_MARKER;
            }

            result.extend(chars);
            result.push('\n');
        }

        result
    }
}

/// Check if every border cell of `scene` is occupied
fn encloses(scene: &Scene) -> bool {
    let (w, h) = (scene.width(), scene.height());
    scene
        .cells()
        .filter(|((x, y), _)| *x == 0 || *y == 0 || *x == w - 1 || *y == h - 1)
        .all(|(_, cell)| !cell.is_empty())
}
