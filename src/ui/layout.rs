use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into header, body and footer rows.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the sidebar (friend list over add-friend form) and
/// the split panel.
pub fn body_columns(body: Rect, add_form_height: u16) -> (Rect, Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(add_form_height)])
        .split(columns[0]);

    (sidebar[0], sidebar[1], columns[1])
}

/// First row of a scrolled list so that `cursor` stays inside a window of
/// `capacity` rows. Scrolls only as far as needed.
pub fn list_window_start(cursor: usize, len: usize, capacity: usize) -> usize {
    if capacity == 0 || len <= capacity {
        return 0;
    }
    let cursor = cursor.min(len - 1);
    cursor.saturating_sub(capacity - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_never_scrolls() {
        assert_eq!(list_window_start(2, 3, 9), 0);
        assert_eq!(list_window_start(0, 0, 9), 0);
    }

    #[test]
    fn window_follows_cursor_past_bottom() {
        assert_eq!(list_window_start(8, 11, 9), 0);
        assert_eq!(list_window_start(9, 11, 9), 1);
        assert_eq!(list_window_start(10, 11, 9), 2);
        // Out-of-range cursor is clamped to the last row.
        assert_eq!(list_window_start(50, 11, 9), 2);
    }

    #[test]
    fn regions_cover_whole_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }
}
