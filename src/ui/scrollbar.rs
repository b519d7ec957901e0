use super::palette;
use macroquad::prelude::*;

const BAR_WIDTH: f32 = 12.0;
const MIN_THUMB: f32 = 30.0;

#[derive(Debug, Clone, Default)]
pub struct ScrollbarState {
    pub dragging: bool,
    drag_start_y: f32,
    drag_start_scroll: f32,
}

/// Thumb height and the track distance it can travel, or `None` when the
/// content fits and nothing scrolls.
pub fn thumb_metrics(track_h: f32, content_h: f32, visible_h: f32) -> Option<(f32, f32)> {
    if content_h <= visible_h || track_h <= 0.0 {
        return None;
    }
    let thumb_h = ((visible_h / content_h) * track_h)
        .max(MIN_THUMB)
        .min(track_h - 10.0)
        .max(0.0);
    Some((thumb_h, track_h - thumb_h))
}

/// Draws a vertical scrollbar at the right edge of the given box and returns
/// the scroll offset after any drag or track click this frame.
pub fn draw_scrollbar(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    scroll_offset: f32,
    content_h: f32,
    visible_h: f32,
    state: &mut ScrollbarState,
) -> f32 {
    let bar_x = x + width - BAR_WIDTH - 5.0;

    draw_rectangle(bar_x, y, BAR_WIDTH, height, palette::TRACK);
    draw_rectangle_lines(bar_x, y, BAR_WIDTH, height, 1.0, palette::BORDER);

    let Some((thumb_h, scroll_range)) = thumb_metrics(height, content_h, visible_h) else {
        return scroll_offset;
    };
    let max_scroll = content_h - visible_h;
    let thumb_y = y + (scroll_offset / max_scroll) * scroll_range;

    let (mx, my) = mouse_position();
    let on_bar = mx >= bar_x && mx <= bar_x + BAR_WIDTH && my >= y && my <= y + height;
    let on_thumb = on_bar && my >= thumb_y && my <= thumb_y + thumb_h;

    let thumb_color = if state.dragging {
        Color::from_rgba(120, 120, 140, 255)
    } else if on_thumb {
        Color::from_rgba(100, 100, 120, 255)
    } else if on_bar {
        Color::from_rgba(80, 80, 100, 255)
    } else {
        Color::from_rgba(60, 60, 80, 255)
    };
    draw_rectangle(
        bar_x + 2.0,
        thumb_y + 2.0,
        BAR_WIDTH - 4.0,
        thumb_h - 4.0,
        thumb_color,
    );

    if is_mouse_button_pressed(MouseButton::Left) && on_thumb {
        state.dragging = true;
        state.drag_start_y = my;
        state.drag_start_scroll = scroll_offset;
    }
    if is_mouse_button_released(MouseButton::Left) {
        state.dragging = false;
    }

    if state.dragging && scroll_range > 0.0 {
        let delta = (my - state.drag_start_y) / scroll_range * max_scroll;
        return (state.drag_start_scroll + delta).clamp(0.0, max_scroll);
    }

    // click on the track jumps there
    if is_mouse_button_pressed(MouseButton::Left) && on_bar && !on_thumb {
        let ratio = (my - y) / height;
        return (ratio * max_scroll).clamp(0.0, max_scroll);
    }

    scroll_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_thumb_when_content_fits() {
        assert_eq!(thumb_metrics(400.0, 300.0, 400.0), None);
        assert_eq!(thumb_metrics(400.0, 400.0, 400.0), None);
    }

    #[test]
    fn thumb_scales_with_visible_share() {
        let (thumb, range) = thumb_metrics(400.0, 1600.0, 400.0).unwrap();
        assert_eq!(thumb, 100.0);
        assert_eq!(range, 300.0);
    }

    #[test]
    fn thumb_has_a_minimum_size() {
        let (thumb, _) = thumb_metrics(400.0, 100_000.0, 400.0).unwrap();
        assert_eq!(thumb, MIN_THUMB);
    }
}
