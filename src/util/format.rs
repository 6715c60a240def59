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

use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

/// Formats an ISO-8601 timestamp as a month and year, e.g. `March 2022`.
///
/// The month is taken in the timestamp's own offset. Timestamps that carry
/// only a date are accepted too. Anything unparsable is returned unchanged so
/// the table still shows something meaningful.
pub(crate) fn format_month_year(timestamp: &str) -> String {
    let month_year = format_description!("[month repr:long] [year]");

    let date = OffsetDateTime::parse(timestamp, &Rfc3339)
        .map(|dt| dt.date())
        .or_else(|_| {
            let prefix = timestamp.get(..10).unwrap_or(timestamp);
            Date::parse(prefix, format_description!("[year]-[month]-[day]"))
        });

    date.ok()
        .and_then(|d| d.format(month_year).ok())
        .unwrap_or_else(|| timestamp.to_string())
}
