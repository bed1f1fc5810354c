// Copyright 2025 The chat-sdk Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Classification of notice messages into widget categories.

use serde_json::Value as JsonValue;

use super::diagnostics::{Diagnostic, DiagnosticSink};

/// What widget, if any, a notice message should render as.
///
/// Bot-sent notices may smuggle structured payloads in their event source;
/// currently the only recognized payload is a weather report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeCategory {
    /// A plain notice, rendered as text.
    Basic,

    /// A weather report.
    Weather {
        /// The raw weather payload. Deliberately left unparsed; the
        /// weather widget validates it lazily when rendering.
        data: Option<String>,
    },
}

impl NoticeCategory {
    /// Classifies a notice from the raw JSON source of its event.
    ///
    /// Anything that isn't a JSON object with a `weather` key under
    /// `content` classifies as [`NoticeCategory::Basic`]; parse failures
    /// are reported to `diagnostics` and never raised to the caller.
    pub fn classify(raw_json: Option<&str>, diagnostics: &dyn DiagnosticSink) -> Self {
        let Some(raw_json) = raw_json else {
            return Self::Basic;
        };

        let value: JsonValue = match serde_json::from_str(raw_json) {
            Ok(value) => value,
            Err(error) => {
                diagnostics.emit(Diagnostic {
                    context: "notice",
                    message: format!("failed to parse notice event source: {error}"),
                });
                return Self::Basic;
            }
        };

        let Some(content) = value.get("content").and_then(JsonValue::as_object) else {
            return Self::Basic;
        };

        match content.get("weather") {
            Some(weather) => {
                Self::Weather { data: weather.as_str().map(ToOwned::to_owned) }
            }
            None => Self::Basic,
        }
    }
}
