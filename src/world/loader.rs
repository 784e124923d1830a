//! Layout loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable layout files.
//! Every load path validates before handing the layout to the game.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use crate::ui::is_code_char;
use super::{Layout, PropKind};

/// Validation limits to keep hand-written files sane
pub mod limits {
    /// Maximum number of rooms in a layout
    pub const MAX_ROOMS: usize = 16;
    /// Maximum number of wall slabs
    pub const MAX_WALLS: usize = 256;
    /// Maximum number of props
    pub const MAX_PROPS: usize = 256;
    /// Maximum length of names, ids and note text
    pub const MAX_STRING_LEN: usize = 512;
    /// Maximum length of a terminal code (matches the code entry buffer)
    pub const MAX_CODE_LEN: usize = 16;
    /// Maximum coordinate value
    pub const MAX_COORD: f32 = 10_000.0;
}

/// Error type for layout loading
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

fn invalid(msg: impl Into<String>) -> LayoutError {
    LayoutError::Validation(msg.into())
}

fn check_box(bounds: &crate::math::Aabb, context: &str) -> Result<(), LayoutError> {
    if !bounds.is_well_formed() {
        return Err(invalid(format!("{}: malformed bounds", context)));
    }
    let coords = [
        bounds.min.x, bounds.min.y, bounds.min.z,
        bounds.max.x, bounds.max.y, bounds.max.z,
    ];
    if coords.iter().any(|c| c.abs() > limits::MAX_COORD) {
        return Err(invalid(format!("{}: coordinate out of range", context)));
    }
    Ok(())
}

fn check_len(s: &str, context: &str) -> Result<(), LayoutError> {
    if s.len() > limits::MAX_STRING_LEN {
        return Err(invalid(format!(
            "{}: string too long ({} > {})", context, s.len(), limits::MAX_STRING_LEN
        )));
    }
    Ok(())
}

/// Validate a layout: geometry is finite, ids are unique, references resolve
pub fn validate_layout(layout: &Layout) -> Result<(), LayoutError> {
    check_len(&layout.name, "layout name")?;

    if layout.rooms.is_empty() {
        return Err(invalid("layout has no rooms"));
    }
    if layout.rooms.len() > limits::MAX_ROOMS {
        return Err(invalid(format!("too many rooms ({} > {})", layout.rooms.len(), limits::MAX_ROOMS)));
    }
    if layout.walls.len() > limits::MAX_WALLS {
        return Err(invalid(format!("too many walls ({} > {})", layout.walls.len(), limits::MAX_WALLS)));
    }
    if layout.props.len() > limits::MAX_PROPS {
        return Err(invalid(format!("too many props ({} > {})", layout.props.len(), limits::MAX_PROPS)));
    }

    let spawn = layout.spawn.position;
    if !spawn.is_finite() || !layout.spawn.yaw.is_finite() {
        return Err(invalid("spawn is not finite"));
    }
    if [spawn.x, spawn.y, spawn.z].iter().any(|c| c.abs() > limits::MAX_COORD) {
        return Err(invalid("spawn: coordinate out of range"));
    }

    for (i, room) in layout.rooms.iter().enumerate() {
        check_len(&room.name, &format!("room {}", i))?;
        check_box(&room.bounds, &format!("room {}", i))?;
    }
    for (i, wall) in layout.walls.iter().enumerate() {
        check_box(&wall.bounds, &format!("wall {}", i))?;
    }
    if !layout.rooms.iter().any(|r| r.bounds.contains_point(spawn)) {
        return Err(invalid("spawn is outside every room"));
    }

    let mut ids = HashSet::new();
    let mut items = HashSet::new();
    for prop in &layout.props {
        let context = format!("prop '{}'", prop.id);
        if prop.id.0.is_empty() {
            return Err(invalid("prop with empty id"));
        }
        check_len(&prop.id.0, &context)?;
        check_len(&prop.name, &context)?;
        check_box(&prop.bounds, &context)?;
        if !ids.insert(prop.id.clone()) {
            return Err(invalid(format!("duplicate prop id '{}'", prop.id)));
        }
        match &prop.kind {
            PropKind::Item { item } => {
                if !items.insert(item.clone()) {
                    return Err(invalid(format!("item '{}' placed twice", item)));
                }
            }
            PropKind::Note { text } => check_len(text, &context)?,
            PropKind::Terminal { code, .. } => {
                let code = code.trim();
                if code.is_empty() {
                    return Err(invalid(format!("{}: empty code", context)));
                }
                if code.len() > limits::MAX_CODE_LEN || !code.chars().all(is_code_char) {
                    return Err(invalid(format!(
                        "{}: code must be 1-{} printable ASCII characters or spaces",
                        context,
                        limits::MAX_CODE_LEN
                    )));
                }
            }
            _ => {}
        }
    }

    // References resolve and point at the right kind of prop
    for prop in &layout.props {
        match &prop.kind {
            PropKind::Terminal { unlocks, .. } => {
                let target = layout.prop(unlocks).ok_or_else(|| {
                    invalid(format!("terminal '{}' unlocks unknown prop '{}'", prop.id, unlocks))
                })?;
                if !target.kind.is_lockable() {
                    return Err(invalid(format!(
                        "terminal '{}' targets '{}', which cannot be locked", prop.id, unlocks
                    )));
                }
            }
            PropKind::Container { reveals, .. } => {
                for id in reveals {
                    let target = layout.prop(id).ok_or_else(|| {
                        invalid(format!("container '{}' reveals unknown prop '{}'", prop.id, id))
                    })?;
                    if !target.hidden {
                        return Err(invalid(format!(
                            "container '{}' reveals '{}', which is not hidden", prop.id, id
                        )));
                    }
                }
            }
            _ => {}
        }
    }

    if layout.exit_count() == 0 {
        return Err(invalid("layout has no exit door"));
    }

    Ok(())
}

/// Load a layout from a RON file
pub fn load_layout<P: AsRef<Path>>(path: P) -> Result<Layout, LayoutError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let layout = load_layout_from_str(&contents).inspect_err(|e| {
        tracing::warn!("Failed to load layout {}: {}", path.display(), e);
    })?;
    tracing::info!("Loaded layout '{}' from {}", layout.name, path.display());
    Ok(layout)
}

/// Load a layout from a RON string (for embedded layouts or testing)
pub fn load_layout_from_str(s: &str) -> Result<Layout, LayoutError> {
    let layout: Layout = ron::from_str(s)?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Resolve a layout setting: a built-in name, otherwise a path to a RON
/// file. Anything that fails to load falls back to the default layout.
pub fn resolve_layout(name: &str) -> Layout {
    if let Some(layout) = super::builtin_layout(name) {
        return layout;
    }
    match load_layout(name) {
        Ok(layout) => layout,
        Err(e) => {
            tracing::warn!("Layout '{}' unavailable ({}), using the default", name, e);
            super::default_layout()
        }
    }
}

/// Serialize a layout to pretty RON
pub fn serialize_layout(layout: &Layout) -> Result<String, LayoutError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(layout, config)?)
}

/// Save a layout as plain RON
pub fn save_layout<P: AsRef<Path>>(layout: &Layout, path: P) -> Result<(), LayoutError> {
    let ron_string = serialize_layout(layout)?;
    fs::write(path, ron_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Aabb, Vec3};
    use crate::world::{builtin_layout, ItemId, Prop, PropId, Rgb};

    fn office() -> Layout {
        builtin_layout("office").expect("office layout exists")
    }

    fn prop_mut<'a>(layout: &'a mut Layout, id: &str) -> &'a mut Prop {
        layout.props.iter_mut().find(|p| p.id.0 == id).unwrap()
    }

    #[test]
    fn test_builtin_layouts_validate() {
        for name in crate::world::builtin_layout_names() {
            let layout = builtin_layout(name).unwrap();
            validate_layout(&layout).unwrap_or_else(|e| panic!("{}: {}", name, e));
        }
    }

    #[test]
    fn test_duplicate_prop_id_rejected() {
        let mut layout = office();
        let copy = layout.props[0].clone();
        layout.props.push(copy);
        assert!(matches!(validate_layout(&layout), Err(LayoutError::Validation(_))));
    }

    #[test]
    fn test_unknown_unlock_target_rejected() {
        let mut layout = office();
        let terminal = prop_mut(&mut layout, "terminal");
        terminal.kind = PropKind::Terminal { code: "1987".into(), unlocks: PropId::new("nowhere") };
        let err = validate_layout(&layout).unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn test_terminal_cannot_target_note() {
        let mut layout = office();
        let terminal = prop_mut(&mut layout, "terminal");
        terminal.kind = PropKind::Terminal { code: "1987".into(), unlocks: PropId::new("sticky_note") };
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_revealed_prop_must_start_hidden() {
        let mut layout = office();
        prop_mut(&mut layout, "door_key").hidden = false;
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut layout = office();
        let terminal = prop_mut(&mut layout, "terminal");
        terminal.kind = PropKind::Terminal { code: "   ".into(), unlocks: PropId::new("safe") };
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_spaced_code_accepted() {
        let mut layout = office();
        let terminal = prop_mut(&mut layout, "terminal");
        terminal.kind = PropKind::Terminal { code: "open sesame".into(), unlocks: PropId::new("safe") };

        let text = serialize_layout(&layout).unwrap();
        let loaded = load_layout_from_str(&text).unwrap();

        let mut puzzle = crate::game::puzzle::PuzzleState::new(&loaded);
        puzzle.submit_code(&loaded, &PropId::new("terminal"), " Open Sesame");
        let safe = loaded.prop_index(&PropId::new("safe")).unwrap();
        assert!(!puzzle.prop(safe).unwrap().locked);
    }

    #[test]
    fn test_code_with_control_char_rejected() {
        let mut layout = office();
        let terminal = prop_mut(&mut layout, "terminal");
        terminal.kind = PropKind::Terminal { code: "19\t87".into(), unlocks: PropId::new("safe") };
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_spawn_out_of_range_rejected() {
        let mut layout = office();
        layout.spawn.position.x = limits::MAX_COORD * 2.0;
        let err = validate_layout(&layout).unwrap_err();
        assert!(err.to_string().contains("spawn"));
    }

    #[test]
    fn test_spawn_outside_rooms_rejected() {
        let mut layout = office();
        layout.spawn.position = Vec3::new(0.0, 1.6, 50.0);
        let err = validate_layout(&layout).unwrap_err();
        assert!(err.to_string().contains("outside every room"));
    }

    #[test]
    fn test_missing_exit_rejected() {
        let mut layout = office();
        layout.props.retain(|p| !matches!(p.kind, PropKind::Door { exit: true, .. }));
        let err = validate_layout(&layout).unwrap_err();
        assert!(err.to_string().contains("exit"));
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let mut layout = office();
        layout.walls[0].bounds.max.x = f32::NAN;
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_item_placed_twice_rejected() {
        let mut layout = office();
        layout.props.push(Prop {
            id: PropId::new("spare_key"),
            name: "Spare key".into(),
            bounds: Aabb::from_center_size(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.2, 0.05, 0.1)),
            color: Rgb(255, 215, 0),
            solid: false,
            hidden: false,
            kind: PropKind::Item { item: ItemId::new("door_key") },
        });
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annex.ron");
        let layout = builtin_layout("annex").unwrap();

        save_layout(&layout, &path).unwrap();
        let loaded = load_layout(&path).unwrap();

        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_parse_error_reported() {
        let err = load_layout_from_str("(name: \"broken\"").unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_layout(dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }

    #[test]
    fn test_resolve_builtin_by_name() {
        assert_eq!(resolve_layout("annex").name, builtin_layout("annex").unwrap().name);
    }

    #[test]
    fn test_resolve_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ron");
        let mut layout = office();
        layout.name = "Custom".to_string();
        save_layout(&layout, &path).unwrap();

        assert_eq!(resolve_layout(path.to_str().unwrap()).name, "Custom");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let layout = resolve_layout("/no/such/layout.ron");
        assert_eq!(layout, crate::world::default_layout());
    }
}
