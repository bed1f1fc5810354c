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

//! Resolution of reply references into renderable reply previews.

use super::{
    event::{
        message::MessageType, EmbeddedEvent, EmbeddedEventKind, InReplyToDetails, TimelineDetails,
    },
    factory::{TimelineItemFactory, UNSUPPORTED_EVENT_BODY},
    item::{
        AudioContent, EmoteContent, FileContent, ImageContent, LocationContent, NoticeContent,
        TextContent, TimelineItemSender, VideoContent,
    },
};

/// A resolved reply reference.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineItemReply {
    /// The state of the replied-to event.
    pub details: TimelineItemReplyDetails,

    /// Whether the replied-to message is part of a thread.
    pub is_threaded: bool,
}

/// The state of a replied-to event.
///
/// Exactly one state is ever populated; a reply preview is never partial.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineItemReplyDetails {
    /// The event has not been fetched yet.
    NotLoaded {
        /// The ID of the replied-to event.
        event_id: String,
    },

    /// The event is being fetched.
    Loading {
        /// The ID of the replied-to event.
        event_id: String,
    },

    /// The event is available.
    Loaded {
        /// The sender of the replied-to event.
        sender: TimelineItemSender,
        /// The ID of the replied-to event.
        event_id: String,
        /// The preview content of the replied-to event.
        content: ReplyContent,
    },

    /// Fetching the event failed.
    Error {
        /// The ID of the replied-to event.
        event_id: String,
        /// What went wrong.
        message: String,
    },
}

/// The preview content of a replied-to event.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyContent {
    /// A text message.
    Text(TextContent),
    /// An image message.
    Image(ImageContent),
    /// A video message.
    Video(VideoContent),
    /// An audio message.
    Audio(AudioContent),
    /// A voice message.
    Voice(AudioContent),
    /// A file message.
    File(FileContent),
    /// An automated notice.
    Notice(NoticeContent),
    /// An emote.
    Emote(EmoteContent),
    /// A shared location.
    Location(LocationContent),
    /// A poll, previewed by its question.
    Poll {
        /// The question being asked.
        question: String,
    },
    /// A message that was redacted.
    Redacted,
}

impl TimelineItemFactory {
    /// Resolves a reply reference into a renderable preview.
    ///
    /// This is total: every resolution state of the target maps onto
    /// exactly one [`TimelineItemReplyDetails`] state.
    pub fn build_reply(&self, details: &InReplyToDetails) -> TimelineItemReply {
        let event_id = details.event_id.clone();

        let is_threaded = match &details.event {
            TimelineDetails::Ready(embedded) => match &embedded.kind {
                EmbeddedEventKind::Message(message) => message.is_threaded,
                _ => false,
            },
            _ => false,
        };

        let details = match &details.event {
            TimelineDetails::Unavailable => TimelineItemReplyDetails::NotLoaded { event_id },
            TimelineDetails::Pending => TimelineItemReplyDetails::Loading { event_id },
            TimelineDetails::Ready(embedded) => {
                let sender = resolve_sender(embedded);
                let content = self.reply_content(&sender, &embedded.kind);
                TimelineItemReplyDetails::Loaded { sender, event_id, content }
            }
            TimelineDetails::Error(message) => {
                TimelineItemReplyDetails::Error { event_id, message: message.clone() }
            }
        };

        TimelineItemReply { details, is_threaded }
    }

    fn reply_content(
        &self,
        sender: &TimelineItemSender,
        kind: &EmbeddedEventKind,
    ) -> ReplyContent {
        match kind {
            EmbeddedEventKind::Message(message) => {
                self.reply_message_content(sender, &message.msgtype)
            }
            EmbeddedEventKind::Poll { question } => {
                ReplyContent::Poll { question: question.clone() }
            }
            EmbeddedEventKind::Sticker { body } => ReplyContent::Text(plain_text(body.clone())),
            EmbeddedEventKind::RedactedMessage => ReplyContent::Redacted,
            EmbeddedEventKind::Other => {
                ReplyContent::Text(plain_text(UNSUPPORTED_EVENT_BODY.to_owned()))
            }
        }
    }

    fn reply_message_content(
        &self,
        sender: &TimelineItemSender,
        msgtype: &MessageType,
    ) -> ReplyContent {
        match msgtype {
            MessageType::Text(content) => ReplyContent::Text(self.text_content(content)),
            MessageType::Image(content) => ReplyContent::Image(self.image_content(content)),
            MessageType::Video(content) => ReplyContent::Video(self.video_content(content)),
            MessageType::Audio(content) if content.voice => {
                ReplyContent::Voice(self.audio_content(content))
            }
            MessageType::Audio(content) => ReplyContent::Audio(self.audio_content(content)),
            MessageType::File(content) => ReplyContent::File(self.file_content(content)),
            MessageType::Notice(content) => {
                // The preview of a notice never renders a widget.
                ReplyContent::Notice(self.notice_content(content, None))
            }
            MessageType::Emote(content) => ReplyContent::Emote(self.emote_content(
                sender.display_name.as_deref(),
                &sender.id,
                content,
            )),
            MessageType::Location(content) => {
                ReplyContent::Location(self.location_content(content))
            }
            MessageType::Other { .. } => {
                ReplyContent::Text(plain_text(UNSUPPORTED_EVENT_BODY.to_owned()))
            }
        }
    }
}

/// Resolves the sender of an embedded event, synthesizing a profile-less
/// sender when the profile hasn't loaded.
fn resolve_sender(embedded: &EmbeddedEvent) -> TimelineItemSender {
    match &embedded.sender_profile {
        TimelineDetails::Ready(profile) => TimelineItemSender {
            id: embedded.sender_id.clone(),
            display_name: profile.display_name.clone(),
            display_name_ambiguous: profile.display_name_ambiguous,
            avatar_url: profile.avatar_url.clone(),
        },
        _ => TimelineItemSender {
            id: embedded.sender_id.clone(),
            display_name: None,
            display_name_ambiguous: false,
            avatar_url: None,
        },
    }
}

fn plain_text(body: String) -> TextContent {
    TextContent { body, formatted_body: None, formatted_body_html: None }
}
