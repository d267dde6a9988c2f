use tui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Widget,
};

use crate::app::{colour::BarFill, projection::BarDirection};

/// Eighth blocks, for bars growing right.
const RIGHT_CHARS: &[char] = &['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Terminals only have a right-aligned half block, so bars growing left have a
/// coarser final cell.
const LEFT_CHARS: &[char] = &['▐', '█'];

/// A single horizontal bar, with its value drawn just past the tip.
#[derive(Debug, Clone)]
pub struct HorizontalBar<'a> {
    fill: &'a BarFill,
    cells: f64,
    direction: BarDirection,
    value_label: Option<Line<'a>>,
}

impl<'a> HorizontalBar<'a> {
    pub fn new(fill: &'a BarFill) -> Self {
        Self {
            fill,
            cells: 0.0,
            direction: BarDirection::Right,
            value_label: None,
        }
    }

    /// How many (fractional) cells the bar covers. Clamped to the area when
    /// drawn.
    pub fn cells(mut self, cells: f64) -> Self {
        self.cells = if cells.is_finite() { cells.max(0.0) } else { 0.0 };
        self
    }

    pub fn direction(mut self, direction: BarDirection) -> Self {
        self.direction = direction;
        self
    }

    /// The label drawn past the end of the bar, in the fill's text colour.
    pub fn value_label<T>(mut self, value_label: T) -> Self
    where
        T: Into<Line<'a>>,
    {
        self.value_label = Some(value_label.into());
        self
    }
}

impl Widget for HorizontalBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chars = match self.direction {
            BarDirection::Right => RIGHT_CHARS,
            BarDirection::Left => LEFT_CHARS,
        };

        let ratio = (self.cells / f64::from(area.width)).clamp(0.0, 1.0);
        let segments: Vec<(char, u16)> = progress_bar(chars, 0, area.width, ratio).collect();
        let count = segments.len();

        for (index, (ch, offset)) in segments.into_iter().enumerate() {
            let col = match self.direction {
                BarDirection::Right => area.left() + offset,
                BarDirection::Left => area.right() - 1 - offset,
            };

            // Gradients always run left to right, whichever way the bar grows.
            let position = match self.direction {
                BarDirection::Right => index,
                BarDirection::Left => count - 1 - index,
            };
            let colour = if count > 1 {
                self.fill.colour_at(position as f64 / (count - 1) as f64)
            } else {
                self.fill.colour_at(0.0)
            };

            for row in area.top()..area.bottom() {
                if let Some(cell) = buf.cell_mut((col, row)) {
                    cell.set_char(ch).set_fg(colour);
                }
            }
        }

        if let Some(mut value_label) = self.value_label {
            value_label = value_label.style(Style::new().fg(self.fill.text_colour()));
            let label_width = value_label.width() as u16;
            let row = area.top() + (area.height - 1) / 2;
            let used = count as u16;

            let col = match self.direction {
                BarDirection::Right => {
                    let col = area.left() + used + 1;
                    (col + label_width <= area.right()).then_some(col)
                }
                BarDirection::Left => area
                    .right()
                    .checked_sub(used + 1 + label_width)
                    .filter(|col| *col >= area.left()),
            };

            if let Some(col) = col {
                buf.set_line(col, row, &value_label, label_width);
            }
        }
    }
}

/// Returns an iterator over characters of the bar, and their offsets from
/// `bar_start`.
///
/// `chars` goes from the smallest partial character to the full one, and must
/// be non-empty.
fn progress_bar(
    chars: &[char], bar_start: u16, bar_end: u16, ratio: f64,
) -> impl Iterator<Item = (char, u16)> {
    let bar_len = f64::from(bar_end.saturating_sub(bar_start)) * ratio;

    // Length of the bar, without accounting for the partial final character
    let bar_len_truncated = bar_len.floor();

    // The final partial character, if there's enough left over to show one.
    let final_progress_char = {
        let final_char_ratio = (bar_len - bar_len_truncated).clamp(0.0, 1.0);
        let char_index = (final_char_ratio * chars.len() as f64).floor() as usize;

        // -1 because 0-based indexing
        char_index.checked_sub(1).and_then(|it| chars.get(it))
    };

    let full = chars.last().copied().unwrap_or('█');
    let bar_end = bar_start + bar_len_truncated as u16;

    (bar_start..bar_end)
        .map(move |pos| (full, pos))
        .chain(final_progress_char.map(|ch| (*ch, bar_end)))
}

#[cfg(test)]
mod tests {
    use tui::style::Color;

    use super::*;

    fn row_symbols(buf: &Buffer, row: u16) -> String {
        (0..buf.area.width)
            .map(|col| buf[(col, row)].symbol())
            .collect()
    }

    #[test]
    fn progress_bar() {
        let bars = (0..11)
            .map(|i| {
                let fill = i as f64 * 0.1;
                super::progress_bar(&['1', '2', '3', '4', '.'], 0, 2, fill)
                    .map(|(ch, _)| ch)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        assert_eq!(
            bars,
            vec![
                vec![],
                vec!['1'],
                vec!['2'],
                vec!['3'],
                vec!['4'],
                vec!['.'],
                vec!['.', '1'],
                vec!['.', '2'],
                vec!['.', '3'],
                vec!['.', '4'],
                vec!['.', '.']
            ]
        );
    }

    #[test]
    fn right_bar_with_partial_cell() {
        let fill = BarFill::Solid(Color::Red);
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);

        HorizontalBar::new(&fill).cells(3.5).render(area, &mut buf);

        assert_eq!(row_symbols(&buf, 0), "███▌    ");
        assert_eq!(row_symbols(&buf, 1), "███▌    ");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn left_bar_grows_from_the_right_edge() {
        let fill = BarFill::Solid(Color::Blue);
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);

        HorizontalBar::new(&fill)
            .cells(2.5)
            .direction(BarDirection::Left)
            .value_label("-3")
            .render(area, &mut buf);

        assert_eq!(row_symbols(&buf, 0), "  -3 ▐██");
        assert_eq!(buf[(2, 0)].fg, Color::Blue);
        assert_eq!(buf[(7, 0)].fg, Color::Blue);
    }

    #[test]
    fn value_label_follows_the_bar() {
        let fill = BarFill::Gradient(vec![Color::Rgb(0, 0, 0), Color::Rgb(100, 100, 100)]);
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);

        HorizontalBar::new(&fill)
            .cells(3.0)
            .value_label("42")
            .render(area, &mut buf);

        assert_eq!(row_symbols(&buf, 0), "███ 42  ");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(1, 0)].fg, Color::Rgb(50, 50, 50));
        assert_eq!(buf[(2, 0)].fg, Color::Rgb(100, 100, 100));
        assert_eq!(buf[(4, 0)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn value_label_is_dropped_if_it_does_not_fit() {
        let fill = BarFill::Solid(Color::Red);
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);

        HorizontalBar::new(&fill)
            .cells(4.0)
            .value_label("1000")
            .render(area, &mut buf);

        assert_eq!(row_symbols(&buf, 0), "████ ");
    }

    #[test]
    fn oversized_bars_are_clamped() {
        let fill = BarFill::Solid(Color::Red);
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        HorizontalBar::new(&fill).cells(f64::INFINITY).render(area, &mut buf);
        assert_eq!(row_symbols(&buf, 0), "    ");

        HorizontalBar::new(&fill).cells(99.0).render(area, &mut buf);
        assert_eq!(row_symbols(&buf, 0), "████");
    }
}
