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

//! UI rendering logic for the browser view.
//!
//! Loading and failure render a single line of text. Once loaded, the view is
//! the stop control, the cassette table, and the link of the cursor row.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::{BrowserState, CassetteBrowser},
    render::{Render, icons::ICON_STOP},
    theme::Theme,
};

impl Render for CassetteBrowser {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = match &self.state {
            BrowserState::Loaded => return self.draw_loaded(f, area, theme),

            BrowserState::Loading => Paragraph::new("Loading..."),

            BrowserState::Failed(message) => Paragraph::new(format!("Error: {}", message))
                .style(Style::default().fg(theme.error_colour)),
        };

        f.render_widget(text.wrap(Wrap { trim: false }), area);
    }
}

impl CassetteBrowser {
    fn draw_loaded(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        let stop_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let stop_line = Line::from(vec![
            Span::styled(
                format!("{} [s] Stop", ICON_STOP),
                Style::default()
                    .fg(theme.table_control_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                match self.table.rows().len() {
                    1 => "1 cassette".to_string(),
                    n => format!("{} cassettes", n),
                },
                Style::default().fg(theme.table_date_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(stop_line).block(stop_block), chunks[0]);

        self.table.draw(f, chunks[1], theme);

        if let Some(current) = self.table.current() {
            let link_block = Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1));

            let link_line = Line::from(vec![
                Span::raw("Link "),
                Span::styled(
                    current.url.as_str(),
                    Style::default()
                        .fg(theme.table_link_fg)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]);
            f.render_widget(Paragraph::new(link_line).block(link_block), chunks[2]);
        }
    }
}
