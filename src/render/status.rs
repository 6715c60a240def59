// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the status line.
//!
//! The line shows, by priority, the open command line with its cursor, the
//! current notification, or the key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &str = "q quit  r reload  : command  enter play  s stop  o open link";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let commander = &app.commander;
    let style = Style::default().bg(app.theme.status_bg);

    if commander.active() {
        let text = format!(":{}", commander.input.value());
        f.render_widget(
            Paragraph::new(text).style(style.fg(app.theme.commander_colour)),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        f.set_cursor_position((cursor_x, container[0].y));
    } else if let Some(message) = app.status.message() {
        f.render_widget(
            Paragraph::new(message).style(style.fg(app.theme.error_colour)),
            container[0],
        );
    } else {
        f.render_widget(
            Paragraph::new(KEY_HINTS).style(style.fg(app.theme.border_colour)),
            container[0],
        );
    }
}
