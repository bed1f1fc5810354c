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

//! Construction of UI-ready timeline items from raw timeline events.
//!
//! The central type is the [`TimelineItemFactory`]. It is created once per
//! room with the user ID of the account viewing the timeline and two
//! collaborator seams supplied by the embedding client: a
//! [`FormattedTextBuilder`] that renders HTML and plain-text bodies into
//! rich text, and a [`StateEventTextBuilder`] that describes room state
//! changes in human-readable form. Every call to
//! [`TimelineItemFactory::build_timeline_item`] is independent; repeated
//! calls with the same input produce the same output.

use chrono::DateTime;

mod diagnostics;
mod error;
mod event;
mod factory;
mod formatted;
mod item;
mod notice;
mod polls;
mod reactions;
mod read_receipts;
mod reply;
mod shields;
mod state_events;

#[cfg(test)]
mod tests;

pub use self::{
    diagnostics::{BufferedDiagnostics, Diagnostic, DiagnosticSink, TracingDiagnostics},
    error::Error,
    event::{
        message::{
            AudioDetails, AudioInfo, AudioMessageContent, EmoteMessageContent, FileInfo,
            FileMessageContent, FormattedBody, ImageInfo, ImageMessageContent,
            LocationMessageContent, MediaSource, MessageContent, MessageFormat, MessageType,
            NoticeMessageContent, TextMessageContent, ThumbnailInfo, VideoInfo,
            VideoMessageContent,
        },
        DeliveryStatus, EmbeddedEvent, EmbeddedEventKind, EmbeddedMessage, EncryptedMessage,
        InReplyToDetails, PollAnswer, PollStart, Profile, ReactionInfo, ReactionsByKeyBySender,
        Receipt, TimelineDetails, TimelineEvent, TimelineEventKind, UtdCause,
    },
    factory::TimelineItemFactory,
    formatted::{FormattedText, FormattedTextBuilder, Fragment, Markup},
    item::{
        AudioContent, EmoteContent, EncryptedContent, EncryptionType, FileContent, ImageContent,
        LocationContent, NoticeContent, StickerContent, TextContent, Thumbnail, TimelineItem,
        TimelineItemContent, TimelineItemProperties, TimelineItemSender, UnsupportedContent,
    },
    notice::NoticeCategory,
    polls::{Poll, PollKind, PollOption},
    reactions::{AggregatedReaction, ReactionSenderData},
    read_receipts::ReadReceipt,
    reply::{ReplyContent, TimelineItemReply, TimelineItemReplyDetails},
    shields::{EncryptionAuthenticity, ShieldColor, ShieldState, ShieldStateCode},
    state_events::{MembershipChange, OtherState, ProfileChange, StateEventTextBuilder},
};

/// Renders a millisecond timestamp as the short time-of-day string shown
/// next to timeline items and read receipts.
///
/// Out-of-range timestamps render as an empty string rather than failing
/// the whole item.
pub(crate) fn format_timestamp(timestamp: u64) -> String {
    DateTime::from_timestamp_millis(timestamp as i64)
        .map(|datetime| datetime.format("%H:%M").to_string())
        .unwrap_or_default()
}
