use super::*;
use crate::draw::Shape;
use crate::draw::color::{BACKGROUND, GREEN, RED, WHITE};
use crate::input::{Command, MouseButton, Tool};

fn create_test_state() -> CanvasState {
    CanvasState::new(64, 48)
}

/// Drags one gesture through press, a motion per waypoint, and release.
fn drag(state: &mut CanvasState, from: (i32, i32), via: &[(i32, i32)], to: (i32, i32)) {
    state.on_mouse_press(MouseButton::Left, from.0, from.1);
    for &(x, y) in via {
        state.on_mouse_motion(x, y);
    }
    state.on_mouse_release(MouseButton::Left, to.0, to.1);
}

#[test]
fn pen_gesture_commits_every_sampled_point() {
    let mut state = create_test_state();
    drag(&mut state, (1, 2), &[(3, 4), (5, 6)], (7, 8));

    let committed = state.history().committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(
        committed[0].shape,
        Shape::Freehand {
            points: vec![(1, 2), (3, 4), (5, 6)]
        }
    );
    assert_eq!(committed[0].color, WHITE);
    assert_eq!(committed[0].thick, 5.0);
    assert_eq!(committed[0].id, None);
}

#[test]
fn shape_gesture_commits_signed_extents_and_id() {
    let mut state = create_test_state();
    state.style_mut().set_tool(Tool::Rect);
    drag(&mut state, (10, 10), &[(30, 25)], (40, 50));

    let committed = state.history().committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(
        committed[0].shape,
        Shape::Rect {
            x: 10,
            y: 10,
            w: 30,
            h: 40
        }
    );
    assert!(committed[0].id.is_some());
}

#[test]
fn circle_gesture_stores_both_reference_points() {
    let mut state = create_test_state();
    state.style_mut().set_tool(Tool::Circle);
    drag(&mut state, (0, 0), &[(10, 10)], (30, 40));

    assert_eq!(
        state.history().committed()[0].shape,
        Shape::Circle {
            x1: 0,
            y1: 0,
            x2: 30,
            y2: 40
        }
    );
}

#[test]
fn reversed_drag_commits_negative_extents() {
    let mut state = create_test_state();
    state.style_mut().set_tool(Tool::Triangle);
    drag(&mut state, (40, 30), &[], (10, 12));

    assert_eq!(
        state.history().committed()[0].shape,
        Shape::Triangle {
            x: 40,
            y: 30,
            w: -30,
            h: -18
        }
    );
}

#[test]
fn shape_press_release_without_motion_commits_degenerate_shape() {
    let mut state = create_test_state();
    state.style_mut().set_tool(Tool::Circle);
    state.on_mouse_press(MouseButton::Left, 20, 20);
    state.on_mouse_release(MouseButton::Left, 20, 20);

    // Zero-area shape: committed but invisible, not an error
    assert_eq!(
        state.history().committed()[0].shape,
        Shape::Circle {
            x1: 20,
            y1: 20,
            x2: 20,
            y2: 20
        }
    );
}

#[test]
fn second_press_mid_gesture_is_ignored() {
    let mut state = create_test_state();
    state.on_mouse_press(MouseButton::Left, 1, 1);
    state.on_mouse_motion(2, 2);
    // A second press must not restart the gesture
    state.on_mouse_press(MouseButton::Left, 30, 30);
    state.on_mouse_motion(3, 3);
    state.on_mouse_release(MouseButton::Left, 3, 3);

    assert_eq!(
        state.history().committed()[0].shape,
        Shape::Freehand {
            points: vec![(1, 1), (2, 2), (3, 3)]
        }
    );
}

#[test]
fn motion_and_release_while_idle_commit_nothing() {
    let mut state = create_test_state();
    state.on_mouse_motion(5, 5);
    state.on_mouse_release(MouseButton::Left, 5, 5);
    assert!(state.history().is_empty());
    assert!(!state.is_drawing());
}

#[test]
fn right_button_does_not_start_a_gesture() {
    let mut state = create_test_state();
    state.on_mouse_press(MouseButton::Right, 5, 5);
    assert!(!state.is_drawing());
}

#[test]
fn pointer_leave_finalizes_captured_content() {
    let mut state = create_test_state();
    state.on_mouse_press(MouseButton::Left, 1, 1);
    state.on_mouse_motion(4, 4);
    state.on_mouse_leave();

    assert!(!state.is_drawing());
    assert_eq!(
        state.history().committed()[0].shape,
        Shape::Freehand {
            points: vec![(1, 1), (4, 4)]
        }
    );
}

#[test]
fn eraser_snapshots_background_color_at_double_width() {
    let mut state = create_test_state();
    state.style_mut().set_tool(Tool::Eraser);
    state.style_mut().set_thickness(4.0);
    drag(&mut state, (5, 5), &[(6, 6)], (7, 7));

    let action = &state.history().committed()[0];
    assert_eq!(action.color, BACKGROUND);
    assert_eq!(action.thick, 8.0);
}

#[test]
fn style_changes_do_not_restyle_committed_actions() {
    let mut state = create_test_state();
    state.style_mut().set_color(RED);
    drag(&mut state, (1, 1), &[(2, 2)], (3, 3));

    state.style_mut().set_color(GREEN);
    state.style_mut().set_thickness(9.0);

    let action = &state.history().committed()[0];
    assert_eq!(action.color, RED);
    assert_eq!(action.thick, 5.0);
}

#[test]
fn preview_never_mutates_history() {
    let mut state = create_test_state();
    state.on_mouse_press(MouseButton::Left, 1, 1);
    state.on_mouse_motion(10, 10);
    state.on_mouse_motion(20, 20);

    assert!(state.history().is_empty());
    assert!(state.provisional_action().is_some());
    assert!(state.is_drawing());
}

#[test]
fn undo_then_redo_restores_the_committed_sequence() {
    let mut state = create_test_state();
    drag(&mut state, (1, 1), &[(5, 5)], (9, 9));
    state.style_mut().set_tool(Tool::Rect);
    state.style_mut().set_color(RED);
    drag(&mut state, (10, 10), &[(20, 20)], (30, 30));
    let before = state.history().committed().to_vec();

    state.handle_command(Command::Undo);
    assert_eq!(state.history().committed().len(), 1);
    state.handle_command(Command::Redo);

    assert_eq!(state.history().committed(), before.as_slice());
}

#[test]
fn commit_after_undo_invalidates_redo() {
    let mut state = create_test_state();
    drag(&mut state, (1, 1), &[(5, 5)], (9, 9));
    drag(&mut state, (2, 2), &[(6, 6)], (10, 10));
    state.handle_command(Command::Undo);
    assert_eq!(state.history().undone_len(), 1);

    drag(&mut state, (3, 3), &[(7, 7)], (11, 11));
    assert_eq!(state.history().undone_len(), 0);

    let committed = state.history().committed().to_vec();
    state.handle_command(Command::Redo);
    assert_eq!(state.history().committed(), committed.as_slice());
}

#[test]
fn undo_and_redo_on_empty_stacks_leave_pixels_untouched() {
    let mut state = create_test_state();
    drag(&mut state, (5, 5), &[(20, 20)], (40, 40));
    let before = state.surface_mut().pixels().unwrap();

    state.handle_command(Command::Redo);
    assert_eq!(state.surface_mut().pixels().unwrap(), before);

    state.handle_command(Command::Undo); // drops the stroke
    state.handle_command(Command::Undo); // boundary no-op
    let after_undo = state.surface_mut().pixels().unwrap();
    state.handle_command(Command::Undo);
    assert_eq!(state.surface_mut().pixels().unwrap(), after_undo);
}

#[test]
fn clear_empties_both_stacks_and_resets_pixels() {
    let mut state = create_test_state();
    drag(&mut state, (1, 1), &[(30, 30)], (60, 40));
    drag(&mut state, (2, 2), &[(10, 40)], (20, 45));
    state.handle_command(Command::Undo);

    state.handle_command(Command::Clear);
    assert!(state.history().is_empty());
    assert_eq!(state.history().undone_len(), 0);

    let pixels = state.surface_mut().pixels().unwrap();
    let background = 0xFF1A_1A1Au32; // #1A1A1A as premultiplied ARGB32
    assert!(
        pixels
            .chunks_exact(4)
            .all(|px| u32::from_ne_bytes(px.try_into().unwrap()) == background)
    );

    // Clear is final: undo/redo stay no-ops until a new commit
    state.handle_command(Command::Undo);
    state.handle_command(Command::Redo);
    assert!(state.history().is_empty());
}

#[test]
fn replaying_committed_history_is_deterministic() {
    let mut state = create_test_state();
    drag(&mut state, (3, 3), &[(12, 20), (25, 8)], (40, 30));
    state.style_mut().set_tool(Tool::Circle);
    state.style_mut().set_color(RED);
    drag(&mut state, (30, 24), &[(40, 30)], (45, 36));
    state.style_mut().set_tool(Tool::Triangle);
    state.style_mut().set_color(GREEN);
    drag(&mut state, (50, 40), &[(20, 15)], (10, 10));

    state.render_full();
    let first = state.surface_mut().pixels().unwrap();
    state.render_full();
    let second = state.surface_mut().pixels().unwrap();
    assert_eq!(first, second);
}

#[test]
fn quiescent_pixels_equal_a_fresh_replay() {
    let mut state = create_test_state();
    state.style_mut().set_tool(Tool::Rect);
    // Release somewhere other than the last motion: the fold-in must land on
    // the surface before the commit
    drag(&mut state, (8, 8), &[(20, 20)], (33, 27));

    let after_gesture = state.surface_mut().pixels().unwrap();
    state.render_full();
    assert_eq!(state.surface_mut().pixels().unwrap(), after_gesture);
}

#[test]
fn redo_fast_path_matches_full_replay() {
    let mut state = create_test_state();
    drag(&mut state, (2, 2), &[(20, 12)], (38, 22));
    state.style_mut().set_tool(Tool::Circle);
    state.style_mut().set_color(RED);
    drag(&mut state, (30, 24), &[(38, 30)], (44, 34));

    state.handle_command(Command::Undo);
    state.handle_command(Command::Redo); // appends on top of current pixels

    let fast = state.surface_mut().pixels().unwrap();
    state.render_full();
    assert_eq!(state.surface_mut().pixels().unwrap(), fast);
}

#[test]
fn resize_preserves_content_and_fills_margin_with_background() {
    let mut state = create_test_state();
    state.style_mut().set_color(RED);
    drag(&mut state, (5, 5), &[(30, 20)], (50, 40));
    let before = state.surface_mut().pixels().unwrap();
    let (old_w, old_h) = (state.surface().width(), state.surface().height());

    state.resize(old_w + 16, old_h + 12);
    let after = state.surface_mut().pixels().unwrap();
    let new_w = state.surface().width();

    let pixel = |buf: &[u8], stride: i32, x: i32, y: i32| {
        let offset = ((y * stride + x) * 4) as usize;
        u32::from_ne_bytes(buf[offset..offset + 4].try_into().unwrap())
    };

    for y in 0..old_h {
        for x in 0..old_w {
            assert_eq!(
                pixel(&before, old_w, x, y),
                pixel(&after, new_w, x, y),
                "pixel ({x},{y}) changed across resize"
            );
        }
    }

    let background = 0xFF1A_1A1Au32; // #1A1A1A as premultiplied ARGB32
    assert_eq!(pixel(&after, new_w, old_w + 8, old_h / 2), background);
    assert_eq!(pixel(&after, new_w, old_w / 2, old_h + 6), background);
}

#[test]
fn toggle_width_slider_round_trips() {
    let mut state = create_test_state();
    assert!(!state.style().slider_visible());
    state.handle_command(Command::ToggleWidthSlider);
    assert!(state.style().slider_visible());
    state.handle_command(Command::ToggleWidthSlider);
    assert!(!state.style().slider_visible());
}
