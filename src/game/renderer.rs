//! Game Renderer
//!
//! Draws the room with macroquad's 3D camera, then the HUD in screen space.
//! There is no lighting; box edges are outlined in a darker shade so walls
//! and furniture read as solid shapes.

use macroquad::prelude::*;
use crate::math::Aabb;
use crate::ui::{
    wrap_text, Rect, CODE_TEXT, CROSSHAIR, CROSSHAIR_FOCUS, FOCUS_OUTLINE, FONT_SIZE_BANNER,
    FONT_SIZE_CONTENT, FONT_SIZE_SMALL, PANEL_BG, PANEL_BORDER, SUCCESS_COLOR, TEXT_COLOR, TEXT_DIM,
};
use crate::world::{PropKind, Rgb};
use super::runtime::{EscapeRoom, Phase};

/// Thickness of the floor and ceiling slabs
const SLAB: f32 = 0.02;

/// Draw one frame: world, then HUD
pub fn draw_frame(room: &EscapeRoom, pointer_locked: bool) {
    clear_background(Color::new(0.02, 0.02, 0.03, 1.0));
    draw_world(room);
    set_default_camera();
    draw_hud(room, pointer_locked);
}

fn draw_world(room: &EscapeRoom) {
    let player = &room.player;
    let eye: Vec3 = player.position.into();
    let forward: Vec3 = player.forward().into();

    set_camera(&Camera3D {
        position: eye,
        target: eye + forward,
        up: vec3(0.0, 1.0, 0.0),
        fovy: room.settings().fov_degrees.to_radians(),
        ..Default::default()
    });

    let layout = room.layout();

    for r in &layout.rooms {
        let b = r.bounds;
        let floor = Aabb {
            min: crate::math::Vec3::new(b.min.x, b.min.y - SLAB, b.min.z),
            max: crate::math::Vec3::new(b.max.x, b.min.y, b.max.z),
        };
        let ceiling = Aabb {
            min: crate::math::Vec3::new(b.min.x, b.max.y, b.min.z),
            max: crate::math::Vec3::new(b.max.x, b.max.y + SLAB, b.max.z),
        };
        draw_box(&floor, r.floor.to_color(), None);
        draw_box(&ceiling, r.ceiling.to_color(), None);
    }

    for wall in &layout.walls {
        draw_box(&wall.bounds, wall.color.to_color(), Some(shade(wall.color)));
    }

    let focused = room.focus().map(|f| &f.prop);
    for (i, prop) in layout.props.iter().enumerate() {
        if !room.puzzle.is_visible(i) {
            continue;
        }
        let open = room.puzzle.prop(i).is_some_and(|s| s.open);
        if matches!(prop.kind, PropKind::Door { .. }) && open {
            continue;
        }

        if focused == Some(&prop.id) {
            draw_box(&prop.bounds, prop.color.lighten(0.35).to_color(), Some(FOCUS_OUTLINE));
        } else {
            draw_box(&prop.bounds, prop.color.to_color(), Some(shade(prop.color)));
        }
    }
}

fn draw_box(bounds: &Aabb, color: Color, outline: Option<Color>) {
    let center: Vec3 = bounds.center().into();
    let size: Vec3 = bounds.size().into();
    draw_cube(center, size, None, color);
    if let Some(outline) = outline {
        draw_cube_wires(center, size, outline);
    }
}

fn shade(color: Rgb) -> Color {
    let c = color.to_color();
    Color::new(c.r * 0.6, c.g * 0.6, c.b * 0.6, 1.0)
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: color.a * alpha, ..color }
}

/// Draw a line of text horizontally centred on `cx`
fn draw_centered(text: &str, cx: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, cx - dims.width * 0.5, y, font_size, color);
}

fn draw_hud(room: &EscapeRoom, pointer_locked: bool) {
    let screen = Rect::screen(screen_width(), screen_height());

    match room.phase() {
        Phase::Exploring => {
            draw_crosshair(room, screen);
            if !pointer_locked {
                draw_click_to_play(screen);
            }
        }
        Phase::EnteringCode { terminal, entry } => {
            let name = room
                .layout()
                .prop(terminal)
                .map(|p| p.name.as_str())
                .unwrap_or("Terminal");
            draw_code_panel(screen, name, entry.text());
        }
        Phase::Escaped { remaining } => draw_escape_banner(screen, *remaining),
    }

    draw_inventory(room, screen);
    draw_prompt(room, screen);
}

fn draw_crosshair(room: &EscapeRoom, screen: Rect) {
    let (cx, cy) = (screen.center_x(), screen.center_y());
    let color = if room.focus().is_some() { CROSSHAIR_FOCUS } else { CROSSHAIR };
    draw_line(cx - 8.0, cy, cx + 8.0, cy, 2.0, color);
    draw_line(cx, cy - 8.0, cx, cy + 8.0, 2.0, color);

    if let Some(prop) = room.focus().and_then(|f| room.layout().prop(&f.prop)) {
        draw_centered(&format!("[E] {}", prop.name), cx, cy + 40.0, FONT_SIZE_SMALL, TEXT_COLOR);
    }
}

fn draw_click_to_play(screen: Rect) {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, Color::new(0.0, 0.0, 0.0, 0.5));
    draw_centered("Click to play", screen.center_x(), screen.center_y() - 10.0, FONT_SIZE_BANNER, TEXT_COLOR);
    draw_centered(
        "WASD to move, mouse to look, E to interact, Esc to release the mouse",
        screen.center_x(),
        screen.center_y() + 30.0,
        FONT_SIZE_SMALL,
        TEXT_DIM,
    );
}

fn draw_code_panel(screen: Rect, terminal_name: &str, text: &str) {
    let panel = screen.centered(360.0, 150.0);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, PANEL_BG);
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 2.0, PANEL_BORDER);

    let inner = panel.pad(16.0);
    draw_text(terminal_name, inner.x, inner.y + 18.0, FONT_SIZE_CONTENT, TEXT_DIM);
    draw_text("ENTER CODE:", inner.x, inner.y + 52.0, FONT_SIZE_CONTENT, TEXT_COLOR);

    // Blinking cursor
    let cursor = if (get_time() * 2.0) as i64 % 2 == 0 { "_" } else { " " };
    draw_text(&format!("> {}{}", text, cursor), inner.x, inner.y + 86.0, FONT_SIZE_CONTENT, CODE_TEXT);
    draw_text(
        "Enter to submit, Esc to cancel",
        inner.x,
        inner.bottom(),
        FONT_SIZE_SMALL,
        TEXT_DIM,
    );
}

fn draw_escape_banner(screen: Rect, remaining: f32) {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, Color::new(0.0, 0.0, 0.0, 0.6));
    draw_centered("YOU ESCAPED!", screen.center_x(), screen.center_y(), FONT_SIZE_BANNER, SUCCESS_COLOR);
    draw_centered(
        &format!("Restarting in {}...", remaining.ceil().max(0.0) as u32),
        screen.center_x(),
        screen.center_y() + 40.0,
        FONT_SIZE_SMALL,
        TEXT_DIM,
    );
}

fn draw_inventory(room: &EscapeRoom, screen: Rect) {
    let inventory = room.puzzle.inventory();
    if inventory.is_empty() {
        return;
    }

    let line_h = FONT_SIZE_SMALL + 4.0;
    let h = 12.0 + line_h * (inventory.len() + 1) as f32;
    draw_rectangle(screen.x + 10.0, screen.y + 10.0, 200.0, h, PANEL_BG);

    let x = screen.x + 20.0;
    let mut y = screen.y + 10.0 + line_h;
    draw_text("Inventory", x, y, FONT_SIZE_SMALL, TEXT_DIM);
    for item in inventory.iter() {
        y += line_h;
        draw_text(&room.layout().item_name(item), x, y, FONT_SIZE_SMALL, TEXT_COLOR);
    }
}

fn draw_prompt(room: &EscapeRoom, screen: Rect) {
    let Some(message) = room.prompt.current() else { return };
    let alpha = room.prompt.opacity();

    let max_w = (screen.w * 0.7).min(700.0);
    let lines = wrap_text(message, FONT_SIZE_CONTENT, max_w);
    let line_h = FONT_SIZE_CONTENT + 6.0;
    let h = 20.0 + line_h * lines.len() as f32;
    let panel = Rect::new(screen.center_x() - max_w * 0.5 - 16.0, screen.bottom() - h - 40.0, max_w + 32.0, h);

    draw_rectangle(panel.x, panel.y, panel.w, panel.h, with_alpha(PANEL_BG, alpha));
    let mut y = panel.y + 10.0 + FONT_SIZE_CONTENT;
    for line in &lines {
        draw_centered(line, panel.center_x(), y, FONT_SIZE_CONTENT, with_alpha(TEXT_COLOR, alpha));
        y += line_h;
    }
}
