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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and the conversion of
//! palette colours into the hexadecimal form the terminal emulator expects.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) status_bg: Color,
    pub(crate) commander_colour: Color,

    pub(crate) table_control_fg: Color,
    pub(crate) table_name_fg: Color,
    pub(crate) table_date_fg: Color,
    pub(crate) table_link_fg: Color,
    pub(crate) table_highlight_fg: Color,
    pub(crate) table_highlight_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            error_colour: Color::Rgb(235, 87, 87),
            status_bg: Color::Rgb(50, 30, 60),
            commander_colour: Color::Rgb(255, 255, 255),

            table_control_fg: Color::Rgb(250, 189, 47),
            table_name_fg: Color::Rgb(255, 255, 255),
            table_date_fg: Color::Rgb(162, 161, 166),
            table_link_fg: Color::Rgb(120, 170, 255),
            table_highlight_fg: Color::White,
            table_highlight_bg: Color::Blue,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Returns `None` for anything but [`Color::Rgb`], since only explicit
    /// colours can be handed to the terminal emulator.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
