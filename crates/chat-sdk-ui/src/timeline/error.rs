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

/// Errors encountered while building timeline items.
///
/// None of these ever escape the factory: a failing event still yields an
/// item, with the error rendered into its diagnostic payload.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sticker media URL did not parse.
    #[error("invalid sticker URL: {0}")]
    InvalidStickerUrl(url::ParseError),

    /// The shared location's `geo:` URI did not parse.
    #[error("invalid geo URI: {0}")]
    InvalidGeoUri(url::ParseError),
}
