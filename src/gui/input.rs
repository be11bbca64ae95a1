use super::Action;
use eframe::egui::{InputState, Key, Pos2, Rect};

/// Cell of a `world_size x world_size` field drawn in `rect` that lies under `pos`.
pub fn cell_under_pointer(rect: Rect, pos: Pos2, world_size: usize) -> Option<(usize, usize)> {
    if !rect.contains(pos) || rect.width() <= 0. || rect.height() <= 0. {
        return None;
    }
    let p = (pos - rect.left_top()) / rect.size();
    let last = world_size.checked_sub(1)?;
    let x = ((p.x * world_size as f32) as usize).min(last);
    let y = ((p.y * world_size as f32) as usize).min(last);
    Some((x, y))
}

/// Edit requested by a held primary button with the given modifiers.
pub fn pointer_action(x: usize, y: usize, ctrl: bool, alt: bool) -> Action {
    if ctrl {
        Action::Reinitialize { x, y }
    } else if alt {
        Action::Erase { x, y }
    } else {
        Action::Paint { x, y }
    }
}

/// Actions requested during the last frame, in the order they are applied.
pub fn collect_actions(input: &InputState, life_rect: Rect, world_size: usize) -> Vec<Action> {
    let mut actions = vec![];
    if input.pointer.primary_down() {
        if let Some((x, y)) = input
            .pointer
            .latest_pos()
            .and_then(|pos| cell_under_pointer(life_rect, pos, world_size))
        {
            actions.push(pointer_action(x, y, input.modifiers.ctrl, input.modifiers.alt));
        }
    }
    if input.key_pressed(Key::R) {
        actions.push(Action::Reset);
    }
    if input.key_released(Key::Space) {
        actions.push(Action::TogglePause);
    }
    if input.key_released(Key::C) {
        actions.push(Action::Clear);
    }
    actions
}
