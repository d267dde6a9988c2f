use tui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders},
};

/// Return a widget block.
pub fn widget_block(border_type: BorderType) -> Block<'static> {
    Block::default()
        .border_type(border_type)
        .borders(Borders::all())
}

/// Rounds a fractional row offset to the row it should be drawn on, or
/// [`None`] if it falls outside `area`.
pub fn row_in(area: Rect, row_offset: f64) -> Option<u16> {
    if !row_offset.is_finite() || row_offset < 0.0 {
        return None;
    }

    let row = row_offset.round();
    if row < f64::from(area.height) {
        Some(area.top() + row as u16)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_widget_block_has_borders() {
        let block = widget_block(BorderType::Rounded);
        let inner = block.inner(Rect::new(0, 0, 10, 5));
        assert_eq!(inner, Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn test_row_in() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(row_in(area, 0.0), Some(3));
        assert_eq!(row_in(area, 1.4), Some(4));
        assert_eq!(row_in(area, 2.6), Some(6));
        assert_eq!(row_in(area, 3.6), None);
        assert_eq!(row_in(area, -1.0), None);
        assert_eq!(row_in(area, f64::NAN), None);
    }
}
