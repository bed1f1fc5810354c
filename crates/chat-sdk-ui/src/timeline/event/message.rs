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

//! Raw message payloads for `m.room.message`-like events.

use std::time::Duration;

use super::InReplyToDetails;

/// The payload of a regular room message, with relations already resolved
/// by the sync engine (the `msgtype` reflects the latest edit, if any).
#[derive(Clone, Debug, PartialEq)]
pub struct MessageContent {
    /// The `msgtype`-specific content.
    pub msgtype: MessageType,

    /// The event this message replies to, if any.
    pub in_reply_to: Option<InReplyToDetails>,

    /// Whether the message is part of a thread.
    pub is_threaded: bool,

    /// Whether the message has been edited.
    pub is_edited: bool,
}

/// The `msgtype`-specific content of a room message.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageType {
    /// A plain or formatted text message.
    Text(TextMessageContent),

    /// An image message.
    Image(ImageMessageContent),

    /// A video message.
    Video(VideoMessageContent),

    /// An audio message, possibly a voice message.
    Audio(AudioMessageContent),

    /// A file message.
    File(FileMessageContent),

    /// An automated notice.
    Notice(NoticeMessageContent),

    /// An emote, the `/me` kind of message.
    Emote(EmoteMessageContent),

    /// A shared location.
    Location(LocationMessageContent),

    /// A message type this crate doesn't know how to render.
    Other {
        /// The raw `msgtype` string.
        msgtype: String,
        /// The fallback body.
        body: String,
    },
}

/// The formatted variant of a message body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedBody {
    /// The format of `body`.
    pub format: MessageFormat,
    /// The formatted body itself.
    pub body: String,
}

/// The format of a [`FormattedBody`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageFormat {
    /// `org.matrix.custom.html`-style HTML.
    Html,
    /// Some other, unhandled format.
    Other(String),
}

/// An opaque handle to a piece of media, resolved by the media engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSource {
    /// The URL the media can be fetched from.
    pub url: String,
}

/// The payload of a text message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMessageContent {
    /// The plain-text body.
    pub body: String,
    /// The formatted body, if the sender supplied one.
    pub formatted: Option<FormattedBody>,
}

/// The payload of a notice message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeMessageContent {
    /// The plain-text body.
    pub body: String,
    /// The formatted body, if the sender supplied one.
    pub formatted: Option<FormattedBody>,
}

/// The payload of an emote message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmoteMessageContent {
    /// The plain-text body, without the sender's name.
    pub body: String,
    /// The formatted body, if the sender supplied one.
    pub formatted: Option<FormattedBody>,
}

/// The payload of an image message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMessageContent {
    /// A textual representation of the image, usually the file name.
    pub body: String,
    /// Where to fetch the image from.
    pub source: MediaSource,
    /// Metadata about the image.
    pub info: Option<ImageInfo>,
}

/// Metadata about an image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageInfo {
    /// The width of the image in pixels.
    pub width: Option<u64>,
    /// The height of the image in pixels.
    pub height: Option<u64>,
    /// The MIME type of the image.
    pub mimetype: Option<String>,
    /// The size of the image file in bytes.
    pub size: Option<u64>,
    /// A BlurHash placeholder for the image.
    pub blurhash: Option<String>,
    /// Where to fetch a thumbnail from, if one exists.
    pub thumbnail_source: Option<MediaSource>,
    /// Metadata about the thumbnail.
    pub thumbnail_info: Option<ThumbnailInfo>,
}

/// Metadata about a media thumbnail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailInfo {
    /// The width of the thumbnail in pixels.
    pub width: Option<u64>,
    /// The height of the thumbnail in pixels.
    pub height: Option<u64>,
    /// The MIME type of the thumbnail.
    pub mimetype: Option<String>,
    /// The size of the thumbnail file in bytes.
    pub size: Option<u64>,
}

/// The payload of a video message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoMessageContent {
    /// A textual representation of the video, usually the file name.
    pub body: String,
    /// Where to fetch the video from.
    pub source: MediaSource,
    /// Metadata about the video.
    pub info: Option<VideoInfo>,
}

/// Metadata about a video.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoInfo {
    /// The duration of the video.
    pub duration: Option<Duration>,
    /// The width of the video in pixels.
    pub width: Option<u64>,
    /// The height of the video in pixels.
    pub height: Option<u64>,
    /// The MIME type of the video.
    pub mimetype: Option<String>,
    /// The size of the video file in bytes.
    pub size: Option<u64>,
    /// A BlurHash placeholder for the video.
    pub blurhash: Option<String>,
    /// Where to fetch a thumbnail from, if one exists.
    pub thumbnail_source: Option<MediaSource>,
    /// Metadata about the thumbnail.
    pub thumbnail_info: Option<ThumbnailInfo>,
}

/// The payload of an audio message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioMessageContent {
    /// A textual representation of the clip, usually the file name.
    pub body: String,
    /// Where to fetch the clip from.
    pub source: MediaSource,
    /// Metadata about the clip.
    pub info: Option<AudioInfo>,
    /// The extensible audio block, carrying duration and waveform data.
    pub audio: Option<AudioDetails>,
    /// Whether the clip carries the voice-message marker. Voice messages
    /// render as their own item variant.
    pub voice: bool,
}

/// Metadata about an audio clip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioInfo {
    /// The duration of the clip.
    pub duration: Option<Duration>,
    /// The MIME type of the clip.
    pub mimetype: Option<String>,
    /// The size of the clip file in bytes.
    pub size: Option<u64>,
}

/// The extensible audio block of an audio message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioDetails {
    /// The duration of the clip.
    pub duration: Duration,
    /// The amplitude samples used to draw an estimated waveform.
    pub waveform: Vec<u16>,
}

/// The payload of a file message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMessageContent {
    /// A textual representation of the file, usually the file name.
    pub body: String,
    /// Where to fetch the file from.
    pub source: MediaSource,
    /// Metadata about the file.
    pub info: Option<FileInfo>,
}

/// Metadata about a file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The MIME type of the file.
    pub mimetype: Option<String>,
    /// The size of the file in bytes.
    pub size: Option<u64>,
    /// Where to fetch a thumbnail from, if one exists.
    pub thumbnail_source: Option<MediaSource>,
    /// Metadata about the thumbnail.
    pub thumbnail_info: Option<ThumbnailInfo>,
}

/// The payload of a shared location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationMessageContent {
    /// A textual representation of the location.
    pub body: String,
    /// The location itself, as a `geo:` URI string.
    pub geo_uri: String,
    /// An optional description of the location.
    pub description: Option<String>,
}
