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

//! UI rendering logic for the cassette table.
//!
//! This module handles the visual representation of the catalog: column
//! layout, cursor highlighting, and theme application.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::CassetteTable,
    render::{Render, icons::ICON_PLAY},
    theme::Theme,
    util::format::format_month_year,
};

// Header row plus its bottom margin.
const HEADER_ROWS: u16 = 2;

impl Render for CassetteTable {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.page_rows = area.height.saturating_sub(HEADER_ROWS).max(1) as usize;

        let rows = self.rows.iter().map(|item| {
            Row::new(vec![
                Cell::from(
                    Line::from(format!("{} Play", ICON_PLAY))
                        .style(Style::default().fg(theme.table_control_fg)),
                ),
                Cell::from(
                    Line::from(item.name.as_str()).style(Style::default().fg(theme.table_name_fg)),
                ),
                Cell::from(
                    Line::from(format_month_year(&item.created_at))
                        .style(Style::default().fg(theme.table_date_fg)),
                ),
                Cell::from(Line::from("Link").style(
                    Style::default()
                        .fg(theme.table_link_fg)
                        .add_modifier(Modifier::UNDERLINED),
                )),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(7),
                Constraint::Min(10),
                Constraint::Length(16),
                Constraint::Length(4),
            ],
        )
        .column_spacing(2)
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Name"),
                Cell::from("Created"),
                Cell::from(""),
            ])
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            )
            .bottom_margin(1),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme.table_highlight_bg)
                .fg(theme.table_highlight_fg),
        )
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
