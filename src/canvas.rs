//! Drawing the chart.

pub mod components;
mod drawing_utils;

use std::time::Instant;

use concat_string::concat_string;
use itertools::Itertools;
use tui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::{
    app::{projection::BarDirection, transition::AnimatedBar, App},
    canvas::{
        components::bar::HorizontalBar,
        drawing_utils::{row_in, widget_block},
    },
    options::config::style::Styles,
    utils::strings::{format_value, str_width, truncate_label},
};

/// Handles the canvas' state.
pub struct Painter {
    pub styles: Styles,
}

impl Painter {
    pub fn init(styles: Styles) -> Self {
        Self { styles }
    }

    /// Draws the whole chart as it should look at `now`.
    pub fn draw_chart(&self, f: &mut Frame<'_>, app: &App, now: Instant) {
        let area = f.area();

        let mut block = widget_block(self.styles.border_type).border_style(self.styles.border_style);
        if app.options().show_title {
            if let Some(name) = app.current_frame_name() {
                block = block.title(Line::styled(
                    concat_string!(" ", name, " "),
                    self.styles.title_style,
                ));
            }
        }

        let inner = block.inner(area);
        f.render_widget(block, area);

        let [chart_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        self.draw_bars(f.buffer_mut(), chart_area, app, now);
        self.draw_status(f, status_area, app);
    }

    fn draw_bars(&self, buf: &mut Buffer, area: Rect, app: &App, now: Instant) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bars = app.bars(now);
        if bars.is_empty() {
            if app.is_finished() && app.frame_count() == 0 {
                Paragraph::new("No frames to show.")
                    .style(self.styles.text_style)
                    .alignment(Alignment::Center)
                    .render(area, buf);
            }
            return;
        }

        let label_width = bars
            .iter()
            .map(|bar| str_width(&bar.instruction.label))
            .max()
            .unwrap_or(0)
            .min(usize::from(area.width / 4)) as u16;

        let value_labels = bars
            .iter()
            .map(|bar| format_value(bar.instruction.value))
            .collect_vec();
        let value_width = value_labels.iter().map(|v| str_width(v)).max().unwrap_or(0) as u16;

        let [label_area, bar_area] =
            Layout::horizontal([Constraint::Length(label_width), Constraint::Min(0)])
                .spacing(1)
                .areas(area);

        // With a baseline, bars grow either way out of a centre axis.
        let (left_area, right_area) = match app.baseline() {
            Some(_) => {
                let axis = bar_area.left() + bar_area.width / 2;
                if bar_area.width > 0 {
                    for row in bar_area.top()..bar_area.bottom() {
                        if let Some(cell) = buf.cell_mut((axis, row)) {
                            cell.set_char('│').set_style(self.styles.axis_style);
                        }
                    }
                }

                let left = Rect::new(
                    bar_area.left(),
                    bar_area.top(),
                    axis - bar_area.left(),
                    bar_area.height,
                );
                let right = Rect::new(
                    (axis + 1).min(bar_area.right()),
                    bar_area.top(),
                    bar_area.right().saturating_sub(axis + 1),
                    bar_area.height,
                );
                (left, right)
            }
            None => (Rect::default(), bar_area),
        };

        let bar_height = app.options().bar_height;
        for (bar, value_label) in bars.iter().zip(value_labels) {
            let Some(top) = row_in(area, bar.row) else {
                continue;
            };
            let height = bar_height.min(area.bottom() - top);

            self.draw_label(buf, label_area, top, height, bar, label_width);

            let half = match bar.instruction.direction {
                BarDirection::Right => right_area,
                BarDirection::Left => left_area,
            };
            let span = f64::from(half.width.saturating_sub(value_width + 1));

            HorizontalBar::new(&bar.instruction.fill)
                .cells(bar.cells(span))
                .direction(bar.instruction.direction)
                .value_label(value_label)
                .render(Rect::new(half.x, top, half.width, height), buf);
        }
    }

    fn draw_label(
        &self, buf: &mut Buffer, label_area: Rect, top: u16, height: u16, bar: &AnimatedBar,
        label_width: u16,
    ) {
        if label_width == 0 || height == 0 {
            return;
        }

        let label = truncate_label(&bar.instruction.label, usize::from(label_width));
        let width = str_width(&label) as u16;
        let row = top + (height - 1) / 2;

        buf.set_stringn(
            label_area.left() + label_width.saturating_sub(width),
            row,
            label,
            usize::from(label_width),
            self.styles.text_style,
        );
    }

    fn draw_status(&self, f: &mut Frame<'_>, area: Rect, app: &App) {
        let progress = concat_string!(
            "frame ",
            app.frames_shown().to_string(),
            "/",
            app.frame_count().to_string()
        );

        let mut spans = vec![Span::styled(progress, self.styles.status_style)];
        let state = if let Some(err) = app.reload_error() {
            Some(concat_string!("reload failed: ", err))
        } else if app.is_finished() {
            Some("finished".to_string())
        } else if app.is_paused() {
            Some("paused".to_string())
        } else {
            None
        };
        if let Some(state) = state {
            spans.push(Span::styled(" · ", self.styles.status_style));
            spans.push(Span::styled(state, self.styles.text_style));
        }

        let hints = Line::styled(
            "q quit  space pause  → step  r restart",
            self.styles.status_style,
        );

        // Only show the hints if there's room for both.
        let status = Line::from(spans);
        let status_width = status.width() as u16;
        f.render_widget(Paragraph::new(status), area);

        if status_width + hints.width() as u16 + 2 <= area.width {
            f.render_widget(Paragraph::new(hints).alignment(Alignment::Right), area);
        }
    }
}
