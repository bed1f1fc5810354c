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

//! The UI-ready timeline item model.

use std::time::Duration;

use url::Url;

use super::{
    event::{message::MediaSource, DeliveryStatus, UtdCause},
    formatted::FormattedText,
    notice::NoticeCategory,
    polls::Poll,
    reactions::AggregatedReaction,
    read_receipts::ReadReceipt,
    reply::TimelineItemReplyDetails,
    shields::EncryptionAuthenticity,
};

/// A single renderable entry of a room timeline.
///
/// One item is built per raw timeline event; its identity is the source
/// event's ID. Items are immutable: when the underlying event changes, the
/// factory is invoked again and the item is replaced wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineItem {
    /// The ID of the event this item was built from.
    pub id: String,

    /// The time the event was sent, formatted for display.
    pub timestamp: String,

    /// Whether the item was sent by the account viewing the timeline.
    pub is_outgoing: bool,

    /// Whether the item can still be edited.
    pub is_editable: bool,

    /// Whether the item is a valid reply target.
    pub can_be_replied_to: bool,

    /// Whether the item is part of a thread.
    pub is_threaded: bool,

    /// The sender of the item.
    pub sender: TimelineItemSender,

    /// The event this item replies to, if any.
    pub reply_details: Option<TimelineItemReplyDetails>,

    /// Presentation metadata shared by all item kinds.
    pub properties: TimelineItemProperties,

    /// The kind-specific payload.
    pub content: TimelineItemContent,
}

/// The sender of a timeline item, with enough profile data to render an
/// avatar row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimelineItemSender {
    /// The sender's user ID.
    pub id: String,

    /// The sender's display name, if set.
    pub display_name: Option<String>,

    /// Whether the display name is ambiguous within the room.
    pub display_name_ambiguous: bool,

    /// The sender's avatar URL, if set.
    pub avatar_url: Option<String>,
}

/// Presentation metadata shared by all timeline item kinds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineItemProperties {
    /// Whether the underlying event has been edited.
    pub is_edited: bool,

    /// Reactions to the item, aggregated by key and deterministically
    /// ordered.
    pub reactions: Vec<AggregatedReaction>,

    /// Read receipts on the item, most recent first.
    pub read_receipts: Vec<ReadReceipt>,

    /// Local send state, for items originating from this client.
    pub delivery_status: Option<DeliveryStatus>,

    /// How confident the encryption layer is in the sender of the item.
    pub encryption_authenticity: Option<EncryptionAuthenticity>,
}

/// The kind-specific payload of a timeline item.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineItemContent {
    /// A text message.
    Text(TextContent),

    /// An image message.
    Image(ImageContent),

    /// A video message.
    Video(VideoContent),

    /// An audio message.
    Audio(AudioContent),

    /// A voice message. Shares the audio payload shape but renders
    /// differently.
    Voice(AudioContent),

    /// A file message.
    File(FileContent),

    /// An automated notice.
    Notice(NoticeContent),

    /// An emote.
    Emote(EmoteContent),

    /// A shared location.
    Location(LocationContent),

    /// A sticker.
    Sticker(StickerContent),

    /// A poll.
    Poll(Poll),

    /// An event that could not be decrypted.
    Encrypted(EncryptedContent),

    /// A message that was redacted.
    Redacted,

    /// An event that could not be parsed, kept in the timeline for
    /// completeness.
    Unsupported(UnsupportedContent),

    /// A room state change, already described in human-readable form.
    State {
        /// The description of the state change.
        body: String,
    },

    /// A legacy 1:1 call invite.
    CallInvite,

    /// A notification that a group call started.
    CallNotification,
}

/// The payload of a text item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextContent {
    /// The plain-text body.
    pub body: String,
    /// The rich-text rendition of the body.
    pub formatted_body: Option<FormattedText>,
    /// The HTML the rich text was built from, if the message had any.
    pub formatted_body_html: Option<String>,
}

/// The payload of a notice item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeContent {
    /// The plain-text body.
    pub body: String,
    /// The rich-text rendition of the body.
    pub formatted_body: Option<FormattedText>,
    /// What widget, if any, the notice should render as.
    pub category: NoticeCategory,
}

/// The payload of an emote item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmoteContent {
    /// The plain-text body, without the sender's name.
    pub body: String,
    /// The rich-text rendition of the body, with the sender's name merged
    /// onto the first line.
    pub formatted_body: Option<FormattedText>,
    /// The HTML the rich text was built from, if the message had any.
    pub formatted_body_html: Option<String>,
}

/// A media thumbnail reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    /// Where to fetch the thumbnail from.
    pub source: MediaSource,
    /// The MIME type of the thumbnail.
    pub mimetype: Option<String>,
}

/// The payload of an image item.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageContent {
    /// A textual representation of the image.
    pub body: String,
    /// Where to fetch the image from.
    pub source: MediaSource,
    /// The MIME type of the image.
    pub mimetype: Option<String>,
    /// A thumbnail, if one exists.
    pub thumbnail: Option<Thumbnail>,
    /// The width of the image in pixels.
    pub width: Option<u64>,
    /// The height of the image in pixels.
    pub height: Option<u64>,
    /// Width divided by height, when both are known and positive.
    pub aspect_ratio: Option<f64>,
    /// A BlurHash placeholder for the image.
    pub blurhash: Option<String>,
}

/// The payload of a video item.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoContent {
    /// A textual representation of the video.
    pub body: String,
    /// The duration of the video; zero when unknown.
    pub duration: Duration,
    /// Where to fetch the video from.
    pub source: MediaSource,
    /// The MIME type of the video.
    pub mimetype: Option<String>,
    /// A thumbnail, if one exists.
    pub thumbnail: Option<Thumbnail>,
    /// The width of the video in pixels.
    pub width: Option<u64>,
    /// The height of the video in pixels.
    pub height: Option<u64>,
    /// Width divided by height, when both are known and positive.
    pub aspect_ratio: Option<f64>,
    /// A BlurHash placeholder for the video.
    pub blurhash: Option<String>,
}

/// The payload of an audio or voice item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioContent {
    /// A textual representation of the clip.
    pub body: String,
    /// The duration of the clip; zero when unknown.
    pub duration: Duration,
    /// Amplitude samples used to draw an estimated waveform.
    pub waveform: Option<Vec<u16>>,
    /// Where to fetch the clip from.
    pub source: MediaSource,
    /// The MIME type of the clip.
    pub mimetype: Option<String>,
}

/// The payload of a file item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileContent {
    /// A textual representation of the file.
    pub body: String,
    /// Where to fetch the file from.
    pub source: MediaSource,
    /// The MIME type of the file.
    pub mimetype: Option<String>,
    /// A thumbnail, if one exists.
    pub thumbnail: Option<Thumbnail>,
}

/// The payload of a location item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationContent {
    /// A textual representation of the location.
    pub body: String,
    /// The shared location; `None` when the `geo:` URI didn't parse.
    pub geo_uri: Option<Url>,
    /// An optional description of the location.
    pub description: Option<String>,
}

/// The payload of a sticker item.
#[derive(Clone, Debug, PartialEq)]
pub struct StickerContent {
    /// The textual representation of the sticker.
    pub body: String,
    /// Where to fetch the sticker image from.
    pub url: Url,
    /// The width of the sticker in pixels.
    pub width: Option<u64>,
    /// The height of the sticker in pixels.
    pub height: Option<u64>,
    /// Width divided by height, when both are known and positive.
    pub aspect_ratio: Option<f64>,
    /// A BlurHash placeholder for the sticker.
    pub blurhash: Option<String>,
}

/// The payload of an item that could not be decrypted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedContent {
    /// The user-facing explanation of why nothing can be shown.
    pub body: String,
    /// The encryption scheme of the event, kept for diagnostics.
    pub encryption_type: EncryptionType,
}

/// The encryption scheme of an undecryptable event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncryptionType {
    /// A group-session encrypted event.
    MegolmV1AesSha2 {
        /// The ID of the session used to encrypt the event.
        session_id: String,
        /// Why decryption failed.
        cause: UtdCause,
    },
    /// A one-to-one session encrypted event.
    OlmV1Curve25519AesSha2 {
        /// The Curve25519 key of the sender.
        sender_key: String,
    },
    /// An unknown encryption scheme.
    Unknown,
}

/// The payload of an item the pipeline could not interpret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedContent {
    /// The user-facing fallback body.
    pub body: String,
    /// The `type` of the original event.
    pub event_type: String,
    /// A diagnostic description of what went wrong.
    pub error: String,
}
