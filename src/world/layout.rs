//! Layout data types
//!
//! Serialized with serde (RON on disk). Props reference each other by
//! string id; `Layout::prop_index` resolves ids to indices.

use serde::{Deserialize, Serialize};
use crate::math::{Aabb, Vec3};

/// Identifier of a prop within a layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropId(pub String);

impl PropId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PropId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an inventory item (keys)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_color(self) -> macroquad::prelude::Color {
        macroquad::prelude::Color::from_rgba(self.0, self.1, self.2, 255)
    }

    /// Brighten toward white by `amount` (0..1), used for the focus highlight
    pub fn lighten(self, amount: f32) -> Rgb {
        let lift = |c: u8| (c as f32 + (255.0 - c as f32) * amount.clamp(0.0, 1.0)) as u8;
        Rgb(lift(self.0), lift(self.1), lift(self.2))
    }
}

/// Where the player starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    /// Eye position
    pub position: Vec3,
    /// Heading in radians, 0 faces -Z
    pub yaw: f32,
}

/// Interior volume of a room (floor at min.y, ceiling at max.y)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub bounds: Aabb,
    pub floor: Rgb,
    pub ceiling: Rgb,
}

/// Static wall slab. Always solid, always blocks rays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub bounds: Aabb,
    pub color: Rgb,
}

/// What a prop does when the player interacts with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropKind {
    /// Furniture. Blocks rays, never interactive.
    Decor,
    /// Examining shows the text
    Note { text: String },
    /// Code lock: the right code unlocks `unlocks`
    Terminal { code: String, unlocks: PropId },
    /// Safe, cabinet, drawer. Opening reveals the hidden props in `reveals`.
    Container { locked: bool, reveals: Vec<PropId> },
    /// Pickup added to the inventory
    Item { item: ItemId },
    /// Opens when every required item is held. Exit doors end the game.
    Door { requires: Vec<ItemId>, exit: bool },
}

impl PropKind {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, PropKind::Decor)
    }

    /// Can a terminal unlock this kind of prop?
    pub fn is_lockable(&self) -> bool {
        matches!(self, PropKind::Container { .. } | PropKind::Door { .. })
    }
}

/// An object in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub id: PropId,
    /// Display name used in prompts and the focus label
    pub name: String,
    pub bounds: Aabb,
    pub color: Rgb,
    /// Blocks player movement
    #[serde(default)]
    pub solid: bool,
    /// Starts invisible (revealed by a container)
    #[serde(default)]
    pub hidden: bool,
    pub kind: PropKind,
}

/// A complete escape room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub spawn: Spawn,
    pub rooms: Vec<Room>,
    pub walls: Vec<Wall>,
    pub props: Vec<Prop>,
}

impl Layout {
    /// Index of the prop with this id
    pub fn prop_index(&self, id: &PropId) -> Option<usize> {
        self.props.iter().position(|p| &p.id == id)
    }

    pub fn prop(&self, id: &PropId) -> Option<&Prop> {
        self.props.iter().find(|p| &p.id == id)
    }

    /// Display name of the prop that carries this item, falling back to the id
    pub fn item_name(&self, item: &ItemId) -> String {
        self.props
            .iter()
            .find(|p| matches!(&p.kind, PropKind::Item { item: i } if i == item))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| item.as_str().to_string())
    }

    /// Number of exit doors
    pub fn exit_count(&self) -> usize {
        self.props
            .iter()
            .filter(|p| matches!(p.kind, PropKind::Door { exit: true, .. }))
            .count()
    }
}
