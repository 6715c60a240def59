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

use thiserror::Error;

/// Failures talking to the cassette server.
///
/// The browser view only ever shows the `Display` text, so the variants exist
/// for logging and tests rather than for branching in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ApiError {
    #[error("invalid server address {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed catalog: {0}")]
    Body(String),

    #[error("malformed catalog entry {0}")]
    MalformedEntry(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => ApiError::Status(code),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Body(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_is_passed_through() {
        let err = ApiError::Transport("Network down".into());
        assert_eq!(err.to_string(), "Network down");
    }

    #[test]
    fn status_code_errors_keep_the_code() {
        let err: ApiError = ureq::Error::StatusCode(502).into();
        assert_eq!(err, ApiError::Status(502));
        assert_eq!(err.to_string(), "server responded with status 502");
    }
}
