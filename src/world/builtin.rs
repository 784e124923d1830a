//! Built-in layouts
//!
//! Compiled into the binary so the game runs without any files on disk
//! (and on WASM, where there is no filesystem to browse).
//!
//! - `office`: one room. Plaque → sticky note → terminal → safe → key → exit.
//! - `annex`: the office opens into a second room. The office safe holds the
//!   brass key for the connecting door; the annex cabinet holds the exit key,
//!   and the exit needs both.

use crate::math::{Aabb, Vec3};
use super::{ItemId, Layout, Prop, PropId, PropKind, Rgb, Room, Spawn, Wall};

const WALL_THICKNESS: f32 = 0.2;
const WALL_COLOR: Rgb = Rgb(204, 204, 204);
const FLOOR_COLOR: Rgb = Rgb(128, 128, 128);
const WOOD: Rgb = Rgb(139, 69, 19);
const STEEL: Rgb = Rgb(64, 64, 64);
const GOLD: Rgb = Rgb(255, 215, 0);
const PAPER: Rgb = Rgb(250, 240, 150);

/// Names accepted by `builtin_layout`
pub fn builtin_layout_names() -> &'static [&'static str] {
    &["office", "annex"]
}

/// Look up a built-in layout by name
pub fn builtin_layout(name: &str) -> Option<Layout> {
    match name {
        "office" => Some(office()),
        "annex" => Some(annex()),
        _ => None,
    }
}

/// The layout used when nothing else is configured
pub fn default_layout() -> Layout {
    office()
}

fn boxed(min: (f32, f32, f32), max: (f32, f32, f32)) -> Aabb {
    Aabb::new(Vec3::new(min.0, min.1, min.2), Vec3::new(max.0, max.1, max.2))
}

fn centered(center: (f32, f32, f32), size: (f32, f32, f32)) -> Aabb {
    Aabb::from_center_size(
        Vec3::new(center.0, center.1, center.2),
        Vec3::new(size.0, size.1, size.2),
    )
}

fn wall(bounds: Aabb) -> Wall {
    Wall { bounds, color: WALL_COLOR }
}

fn prop(id: &str, name: &str, bounds: Aabb, color: Rgb, kind: PropKind) -> Prop {
    Prop {
        id: PropId::new(id),
        name: name.to_string(),
        bounds,
        color,
        solid: false,
        hidden: false,
        kind,
    }
}

fn solid(mut p: Prop) -> Prop {
    p.solid = true;
    p
}

fn hidden(mut p: Prop) -> Prop {
    p.hidden = true;
    p
}

fn key(id: &str, name: &str, item: &str, center: (f32, f32, f32)) -> Prop {
    hidden(prop(
        id,
        name,
        centered(center, (0.3, 0.05, 0.1)),
        GOLD,
        PropKind::Item { item: ItemId::new(item) },
    ))
}

fn door(id: &str, name: &str, z: f32, requires: &[&str], exit: bool) -> Prop {
    solid(prop(
        id,
        name,
        boxed((-1.0, 0.0, z - 0.1), (1.0, 3.0, z + 0.1)),
        WOOD,
        PropKind::Door {
            requires: requires.iter().map(|r| ItemId::new(*r)).collect(),
            exit,
        },
    ))
}

/// Walls of the 10x10 office. The front wall (+Z) has a 2m doorway.
fn office_walls() -> Vec<Wall> {
    let t = WALL_THICKNESS;
    vec![
        // Back
        wall(boxed((-5.0 - t, 0.0, -5.0 - t), (5.0 + t, 4.0, -5.0))),
        // Left
        wall(boxed((-5.0 - t, 0.0, -5.0), (-5.0, 4.0, 5.0))),
        // Right
        wall(boxed((5.0, 0.0, -5.0), (5.0 + t, 4.0, 5.0))),
        // Front, either side of the doorway
        wall(boxed((-5.0 - t, 0.0, 5.0), (-1.0, 4.0, 5.0 + t))),
        wall(boxed((1.0, 0.0, 5.0), (5.0 + t, 4.0, 5.0 + t))),
        // Lintel
        wall(boxed((-1.0, 3.0, 5.0), (1.0, 4.0, 5.0 + t))),
    ]
}

fn office_room() -> Room {
    Room {
        name: "Office".to_string(),
        bounds: boxed((-5.0, 0.0, -5.0), (5.0, 4.0, 5.0)),
        floor: FLOOR_COLOR,
        ceiling: WALL_COLOR,
    }
}

/// Furniture and the terminal/safe chain shared by both layouts
fn office_props(safe_key: Prop) -> Vec<Prop> {
    let safe_key_id = safe_key.id.clone();
    vec![
        solid(prop("desk", "Desk", centered((-2.0, 0.4, -4.0), (2.0, 0.8, 1.0)), WOOD, PropKind::Decor)),
        prop(
            "terminal",
            "Computer",
            centered((-2.0, 1.2, -4.2), (1.0, 0.6, 0.1)),
            Rgb(10, 10, 60),
            PropKind::Terminal { code: "1987".to_string(), unlocks: PropId::new("safe") },
        ),
        prop(
            "sticky_note",
            "Sticky note",
            centered((-1.2, 0.81, -3.7), (0.15, 0.02, 0.15)),
            PAPER,
            PropKind::Note {
                text: "A sticky note: \"PIN = the year on the plaque\"".to_string(),
            },
        ),
        prop(
            "plaque",
            "Plaque",
            centered((-4.97, 2.0, 0.0), (0.05, 0.4, 0.6)),
            Rgb(181, 140, 60),
            PropKind::Note {
                text: "A brass plaque: \"Meridian Labs, est. 1987\"".to_string(),
            },
        ),
        solid(prop(
            "safe",
            "Safe",
            centered((4.0, 0.4, -4.0), (0.8, 0.8, 0.8)),
            STEEL,
            PropKind::Container { locked: true, reveals: vec![safe_key_id] },
        )),
        // Sits on top of the safe once revealed
        safe_key,
        solid(prop("bookshelf", "Bookshelf", centered((4.7, 1.0, 0.0), (0.5, 2.0, 1.6)), WOOD, PropKind::Decor)),
    ]
}

fn office() -> Layout {
    let mut props = office_props(key("door_key", "Key", "door_key", (4.0, 0.825, -4.0)));
    props.push(door("exit_door", "Door", 5.1, &["door_key"], true));

    Layout {
        name: "Office".to_string(),
        spawn: Spawn { position: Vec3::new(0.0, 1.6, 0.0), yaw: 0.0 },
        rooms: vec![office_room()],
        walls: office_walls(),
        props,
    }
}

fn annex() -> Layout {
    let t = WALL_THICKNESS;
    let near = 5.0 + t;
    let far = 11.2;

    let mut walls = office_walls();
    walls.extend([
        // Annex sides
        wall(boxed((-4.0 - t, 0.0, near), (-4.0, 3.5, far))),
        wall(boxed((4.0, 0.0, near), (4.0 + t, 3.5, far))),
        // Far wall with the exit doorway
        wall(boxed((-4.0 - t, 0.0, far), (-1.0, 3.5, far + t))),
        wall(boxed((1.0, 0.0, far), (4.0 + t, 3.5, far + t))),
        wall(boxed((-1.0, 3.0, far), (1.0, 3.5, far + t))),
    ]);

    let mut props = office_props(key("brass_key", "Brass key", "brass_key", (4.0, 0.825, -4.0)));
    props.extend([
        prop(
            "whiteboard",
            "Whiteboard",
            centered((0.0, 2.0, -4.97), (2.0, 1.0, 0.05)),
            Rgb(245, 245, 245),
            PropKind::Note {
                text: "Whiteboard: \"Archive console password is on the orchid's tag\"".to_string(),
            },
        ),
        door("annex_door", "Annex door", 5.1, &["brass_key"], false),
        prop(
            "archive_console",
            "Archive console",
            centered((-3.6, 1.2, 8.0), (0.1, 0.6, 1.0)),
            Rgb(10, 60, 10),
            PropKind::Terminal { code: "7731".to_string(), unlocks: PropId::new("cabinet") },
        ),
        solid(prop("console_desk", "Desk", centered((-3.5, 0.4, 8.0), (1.0, 0.8, 2.0)), WOOD, PropKind::Decor)),
        prop(
            "orchid",
            "Orchid",
            centered((3.6, 0.5, 6.0), (0.4, 1.0, 0.4)),
            Rgb(186, 85, 211),
            PropKind::Note {
                text: "A potted orchid. Its tag reads \"7731\".".to_string(),
            },
        ),
        solid(prop(
            "cabinet",
            "Cabinet",
            centered((3.4, 0.6, 10.6), (1.0, 1.2, 0.6)),
            STEEL,
            PropKind::Container { locked: true, reveals: vec![PropId::new("exit_key")] },
        )),
        key("exit_key", "Exit key", "exit_key", (3.4, 1.225, 10.6)),
        door("exit_door", "Exit door", far + t * 0.5, &["brass_key", "exit_key"], true),
    ]);

    Layout {
        name: "Annex".to_string(),
        spawn: Spawn { position: Vec3::new(0.0, 1.6, 0.0), yaw: 0.0 },
        rooms: vec![
            office_room(),
            Room {
                name: "Annex".to_string(),
                bounds: boxed((-4.0, 0.0, 5.0), (4.0, 3.5, far)),
                floor: Rgb(96, 96, 110),
                ceiling: WALL_COLOR,
            },
        ],
        walls,
        props,
    }
}
