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

//! The timeline item factory.

use std::sync::Arc;

use url::Url;

use super::{
    diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics},
    error::Error,
    event::{
        message::{
            AudioMessageContent, EmoteMessageContent, FileMessageContent, FormattedBody,
            ImageInfo, ImageMessageContent, LocationMessageContent, MessageContent,
            MessageFormat, MessageType, NoticeMessageContent, TextMessageContent,
            VideoMessageContent,
        },
        EncryptedMessage, InReplyToDetails, PollStart, TimelineEvent, TimelineEventKind,
        UtdCause,
    },
    format_timestamp,
    formatted::{FormattedText, FormattedTextBuilder},
    item::{
        AudioContent, EmoteContent, EncryptedContent, EncryptionType, FileContent, ImageContent,
        LocationContent, NoticeContent, StickerContent, TextContent, Thumbnail, TimelineItem,
        TimelineItemContent, TimelineItemProperties, UnsupportedContent, VideoContent,
    },
    notice::NoticeCategory,
    polls::Poll,
    reactions::aggregate_reactions,
    read_receipts::order_read_receipts,
    reply::TimelineItemReplyDetails,
    shields::EncryptionAuthenticity,
    state_events::{MembershipChange, OtherState, ProfileChange, StateEventTextBuilder},
};

/// Fallback body for events the pipeline cannot interpret.
pub(super) const UNSUPPORTED_EVENT_BODY: &str = "Unsupported event";

/// Body shown while an event still waits for its decryption key.
const WAITING_FOR_DECRYPTION_KEY_BODY: &str = "Waiting for this message";

/// Body shown when the key was withheld because of room membership.
const NO_ACCESS_BODY: &str = "You don't have access to this message";

/// The event `type` of stickers, used to tag degraded sticker items.
const STICKER_EVENT_TYPE: &str = "m.sticker";

/// The placeholder substituted by the rendered HTML body when merging an
/// emote's sender name into its first line.
const EMOTE_BODY_PLACEHOLDER: &str = "{body}";

/// Builds UI-ready [`TimelineItem`]s from raw timeline events.
///
/// The factory holds no mutable state: every call is a pure function of
/// its arguments and of the user ID captured at construction, so a single
/// factory can serve concurrent timelines.
pub struct TimelineItemFactory {
    /// The user ID of the account viewing the timeline.
    own_user_id: String,

    formatted_text_builder: Arc<dyn FormattedTextBuilder>,
    state_text_builder: Arc<dyn StateEventTextBuilder>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl TimelineItemFactory {
    /// Creates a factory for the account with the given user ID.
    ///
    /// Diagnostics go to [`tracing::warn!`] unless redirected with
    /// [`with_diagnostics`](Self::with_diagnostics).
    pub fn new(
        own_user_id: impl Into<String>,
        formatted_text_builder: Arc<dyn FormattedTextBuilder>,
        state_text_builder: Arc<dyn StateEventTextBuilder>,
    ) -> Self {
        Self {
            own_user_id: own_user_id.into(),
            formatted_text_builder,
            state_text_builder,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Redirects the factory's diagnostics to the given sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Builds the timeline item for a raw event.
    ///
    /// Returns `None` when the event should be suppressed from the
    /// rendered timeline: direct-message noise (the room creation event,
    /// the own user's join), state changes the
    /// [`StateEventTextBuilder`] declines to describe, and message types
    /// nobody knows how to render. This is a designed absence, not a
    /// failure; malformed events degrade into diagnostic items instead.
    pub fn build_timeline_item(
        &self,
        event: &TimelineEvent,
        is_direct_message: bool,
    ) -> Option<TimelineItem> {
        match &event.kind {
            TimelineEventKind::UnableToDecrypt(encrypted) => {
                Some(self.encrypted_item(event, encrypted))
            }

            TimelineEventKind::RedactedMessage => Some(self.redacted_item(event)),

            TimelineEventKind::Sticker { body, info, source } => {
                match Url::parse(&source.url) {
                    Ok(url) => Some(self.sticker_item(event, body, info, url)),
                    Err(parse_error) => {
                        let error = Error::InvalidStickerUrl(parse_error);
                        self.diagnostics.emit(Diagnostic {
                            context: "sticker",
                            message: format!("{error}: {}", source.url),
                        });
                        Some(self.unsupported_item(event, STICKER_EVENT_TYPE, &error.to_string()))
                    }
                }
            }

            TimelineEventKind::FailedToParseMessageLike { event_type, error } => {
                Some(self.unsupported_item(event, event_type, error))
            }

            TimelineEventKind::FailedToParseState { event_type, error, .. } => {
                Some(self.unsupported_item(event, event_type, error))
            }

            TimelineEventKind::Message(message) => self.message_item(event, message),

            TimelineEventKind::State { content, .. } => {
                if is_direct_message && *content == OtherState::RoomCreate {
                    return None;
                }
                self.other_state_item(event, content)
            }

            TimelineEventKind::RoomMembership { user_id, display_name, change } => {
                if is_direct_message
                    && *change == Some(MembershipChange::Joined)
                    && *user_id == self.own_user_id
                {
                    return None;
                }
                self.membership_item(event, user_id, display_name.as_deref(), *change)
            }

            TimelineEventKind::ProfileChange(change) => self.profile_change_item(event, change),

            TimelineEventKind::Poll(start) => Some(self.poll_item(event, start)),

            TimelineEventKind::CallInvite => {
                Some(self.plain_item(event, TimelineItemContent::CallInvite))
            }

            TimelineEventKind::CallNotify => {
                Some(self.plain_item(event, TimelineItemContent::CallNotification))
            }
        }
    }

    // Message events.

    fn message_item(
        &self,
        event: &TimelineEvent,
        message: &MessageContent,
    ) -> Option<TimelineItem> {
        let content = match &message.msgtype {
            MessageType::Text(content) => TimelineItemContent::Text(self.text_content(content)),
            MessageType::Image(content) => {
                TimelineItemContent::Image(self.image_content(content))
            }
            MessageType::Video(content) => {
                TimelineItemContent::Video(self.video_content(content))
            }
            MessageType::Audio(content) if content.voice => {
                TimelineItemContent::Voice(self.audio_content(content))
            }
            MessageType::Audio(content) => {
                TimelineItemContent::Audio(self.audio_content(content))
            }
            MessageType::File(content) => TimelineItemContent::File(self.file_content(content)),
            MessageType::Notice(content) => TimelineItemContent::Notice(
                self.notice_content(content, event.original_json.as_deref()),
            ),
            MessageType::Emote(content) => TimelineItemContent::Emote(self.emote_content(
                event.sender.display_name.as_deref(),
                &event.sender.id,
                content,
            )),
            MessageType::Location(content) => {
                TimelineItemContent::Location(self.location_content(content))
            }
            MessageType::Other { .. } => return None,
        };

        Some(TimelineItem {
            id: event.event_id.clone(),
            timestamp: format_timestamp(event.timestamp),
            is_outgoing: event.is_own,
            is_editable: event.is_editable,
            can_be_replied_to: event.can_be_replied_to,
            is_threaded: message.is_threaded,
            sender: event.sender.clone(),
            reply_details: self.reply_details(message.in_reply_to.as_ref()),
            properties: self.full_properties(event, message.is_edited),
            content,
        })
    }

    fn sticker_item(
        &self,
        event: &TimelineEvent,
        body: &str,
        info: &ImageInfo,
        url: Url,
    ) -> TimelineItem {
        let content = StickerContent {
            body: body.to_owned(),
            url,
            width: info.width,
            height: info.height,
            aspect_ratio: aspect_ratio(info.width, info.height),
            blurhash: info.blurhash.clone(),
        };

        TimelineItem {
            properties: self.full_properties(event, false),
            ..self.plain_item(event, TimelineItemContent::Sticker(content))
        }
    }

    fn poll_item(&self, event: &TimelineEvent, start: &PollStart) -> TimelineItem {
        let poll = Poll::from_start(start, &self.own_user_id, &event.sender.id);

        TimelineItem {
            properties: self.full_properties(event, start.has_been_edited),
            ..self.plain_item(event, TimelineItemContent::Poll(poll))
        }
    }

    fn encrypted_item(
        &self,
        event: &TimelineEvent,
        encrypted: &EncryptedMessage,
    ) -> TimelineItem {
        let (encryption_type, body) = match encrypted {
            EncryptedMessage::MegolmV1AesSha2 { session_id, cause } => {
                let body = match cause {
                    UtdCause::Unknown => WAITING_FOR_DECRYPTION_KEY_BODY,
                    UtdCause::Membership => NO_ACCESS_BODY,
                };
                (
                    EncryptionType::MegolmV1AesSha2 {
                        session_id: session_id.clone(),
                        cause: *cause,
                    },
                    body,
                )
            }
            EncryptedMessage::OlmV1Curve25519AesSha2 { sender_key } => (
                EncryptionType::OlmV1Curve25519AesSha2 { sender_key: sender_key.clone() },
                WAITING_FOR_DECRYPTION_KEY_BODY,
            ),
            EncryptedMessage::Unknown => {
                (EncryptionType::Unknown, WAITING_FOR_DECRYPTION_KEY_BODY)
            }
        };

        let content =
            EncryptedContent { body: body.to_owned(), encryption_type };
        self.plain_item(event, TimelineItemContent::Encrypted(content))
    }

    fn redacted_item(&self, event: &TimelineEvent) -> TimelineItem {
        self.plain_item(event, TimelineItemContent::Redacted)
    }

    fn unsupported_item(
        &self,
        event: &TimelineEvent,
        event_type: &str,
        error: &str,
    ) -> TimelineItem {
        let content = UnsupportedContent {
            body: UNSUPPORTED_EVENT_BODY.to_owned(),
            event_type: event_type.to_owned(),
            error: error.to_owned(),
        };
        self.plain_item(event, TimelineItemContent::Unsupported(content))
    }

    // State events.

    fn other_state_item(
        &self,
        event: &TimelineEvent,
        content: &OtherState,
    ) -> Option<TimelineItem> {
        let body =
            self.state_text_builder.other_state_text(content, &event.sender, event.is_own)?;
        Some(self.state_item(event, body))
    }

    fn membership_item(
        &self,
        event: &TimelineEvent,
        member_user_id: &str,
        member_display_name: Option<&str>,
        change: Option<MembershipChange>,
    ) -> Option<TimelineItem> {
        let body = self.state_text_builder.membership_change_text(
            member_user_id,
            member_display_name,
            change,
            &event.sender,
            event.is_own,
        )?;
        Some(self.state_item(event, body))
    }

    fn profile_change_item(
        &self,
        event: &TimelineEvent,
        change: &ProfileChange,
    ) -> Option<TimelineItem> {
        let body = self.state_text_builder.profile_change_text(
            change,
            &event.sender.id,
            event.is_own,
        )?;
        Some(self.state_item(event, body))
    }

    fn state_item(&self, event: &TimelineEvent, body: String) -> TimelineItem {
        TimelineItem {
            // State items are never editable, whatever the event says.
            is_editable: false,
            ..self.plain_item(event, TimelineItemContent::State { body })
        }
    }

    // Message event contents.

    pub(super) fn text_content(&self, content: &TextMessageContent) -> TextContent {
        let html_body = html_body(content.formatted.as_ref());
        let formatted_body = match html_body {
            Some(html) => self.formatted_text_builder.from_html(html),
            None => self.formatted_text_builder.from_plain(&content.body),
        };

        TextContent {
            body: content.body.clone(),
            formatted_body,
            formatted_body_html: html_body.map(ToOwned::to_owned),
        }
    }

    pub(super) fn notice_content(
        &self,
        content: &NoticeMessageContent,
        raw_json: Option<&str>,
    ) -> NoticeContent {
        let html_body = html_body(content.formatted.as_ref());
        let formatted_body = match html_body {
            Some(html) => self.formatted_text_builder.from_html(html),
            None => self.formatted_text_builder.from_plain(&content.body),
        };

        NoticeContent {
            body: content.body.clone(),
            formatted_body,
            category: NoticeCategory::classify(raw_json, &*self.diagnostics),
        }
    }

    pub(super) fn emote_content(
        &self,
        sender_display_name: Option<&str>,
        sender_id: &str,
        content: &EmoteMessageContent,
    ) -> EmoteContent {
        let name = sender_display_name.unwrap_or(sender_id);
        let html_body = html_body(content.formatted.as_ref());

        let formatted_body = match html_body {
            Some(html) => self.emote_body_from_html(html, name),
            None => {
                self.formatted_text_builder.from_plain(&format!("* {name} {}", content.body))
            }
        };

        EmoteContent {
            body: content.body.clone(),
            formatted_body,
            formatted_body_html: html_body.map(ToOwned::to_owned),
        }
    }

    /// Merges the sender's name onto the first rendered line of an HTML
    /// emote body.
    ///
    /// Naively prepending the name to the rendered rich text would leave
    /// it visually detached from the body's first paragraph, so the name
    /// is laid out with a placeholder first and the rendered body is then
    /// substituted into it.
    fn emote_body_from_html(&self, html: &str, name: &str) -> Option<FormattedText> {
        let template = FormattedText::plain(format!("* {name} {EMOTE_BODY_PLACEHOLDER}"));
        let html_body = self.formatted_text_builder.from_html(html)?;
        Some(template.replace(EMOTE_BODY_PLACEHOLDER, &html_body))
    }

    pub(super) fn image_content(&self, content: &ImageMessageContent) -> ImageContent {
        let info = content.info.as_ref();
        let width = info.and_then(|info| info.width);
        let height = info.and_then(|info| info.height);

        ImageContent {
            body: content.body.clone(),
            source: content.source.clone(),
            mimetype: info.and_then(|info| info.mimetype.clone()),
            thumbnail: info.and_then(|info| {
                Some(Thumbnail {
                    source: info.thumbnail_source.clone()?,
                    mimetype: info.thumbnail_info.as_ref().and_then(|t| t.mimetype.clone()),
                })
            }),
            width,
            height,
            aspect_ratio: aspect_ratio(width, height),
            blurhash: info.and_then(|info| info.blurhash.clone()),
        }
    }

    pub(super) fn video_content(&self, content: &VideoMessageContent) -> VideoContent {
        let info = content.info.as_ref();
        let width = info.and_then(|info| info.width);
        let height = info.and_then(|info| info.height);

        VideoContent {
            body: content.body.clone(),
            duration: info.and_then(|info| info.duration).unwrap_or_default(),
            source: content.source.clone(),
            mimetype: info.and_then(|info| info.mimetype.clone()),
            thumbnail: info.and_then(|info| {
                Some(Thumbnail {
                    source: info.thumbnail_source.clone()?,
                    mimetype: info.thumbnail_info.as_ref().and_then(|t| t.mimetype.clone()),
                })
            }),
            width,
            height,
            aspect_ratio: aspect_ratio(width, height),
            blurhash: info.and_then(|info| info.blurhash.clone()),
        }
    }

    pub(super) fn audio_content(&self, content: &AudioMessageContent) -> AudioContent {
        AudioContent {
            body: content.body.clone(),
            duration: content
                .audio
                .as_ref()
                .map(|audio| audio.duration)
                .or_else(|| content.info.as_ref().and_then(|info| info.duration))
                .unwrap_or_default(),
            waveform: content
                .audio
                .as_ref()
                .filter(|audio| !audio.waveform.is_empty())
                .map(|audio| audio.waveform.clone()),
            source: content.source.clone(),
            mimetype: content.info.as_ref().and_then(|info| info.mimetype.clone()),
        }
    }

    pub(super) fn file_content(&self, content: &FileMessageContent) -> FileContent {
        let info = content.info.as_ref();

        FileContent {
            body: content.body.clone(),
            source: content.source.clone(),
            mimetype: info.and_then(|info| info.mimetype.clone()),
            thumbnail: info.and_then(|info| {
                Some(Thumbnail {
                    source: info.thumbnail_source.clone()?,
                    mimetype: info.thumbnail_info.as_ref().and_then(|t| t.mimetype.clone()),
                })
            }),
        }
    }

    pub(super) fn location_content(&self, content: &LocationMessageContent) -> LocationContent {
        let geo_uri = match Url::parse(&content.geo_uri) {
            Ok(uri) => Some(uri),
            Err(parse_error) => {
                let error = Error::InvalidGeoUri(parse_error);
                self.diagnostics.emit(Diagnostic {
                    context: "location",
                    message: format!("{error}: {}", content.geo_uri),
                });
                None
            }
        };

        LocationContent {
            body: content.body.clone(),
            geo_uri,
            description: content.description.clone(),
        }
    }

    // Shared pieces.

    /// Builds an item with default properties: no reactions, no receipts,
    /// no reply. Used for items that only exist as timeline annotations
    /// (state changes, calls) or as diagnostic stand-ins.
    fn plain_item(&self, event: &TimelineEvent, content: TimelineItemContent) -> TimelineItem {
        TimelineItem {
            id: event.event_id.clone(),
            timestamp: format_timestamp(event.timestamp),
            is_outgoing: event.is_own,
            is_editable: event.is_editable,
            can_be_replied_to: event.can_be_replied_to,
            is_threaded: false,
            sender: event.sender.clone(),
            reply_details: None,
            properties: TimelineItemProperties::default(),
            content,
        }
    }

    fn full_properties(&self, event: &TimelineEvent, is_edited: bool) -> TimelineItemProperties {
        TimelineItemProperties {
            is_edited,
            reactions: aggregate_reactions(&event.reactions, &self.own_user_id),
            read_receipts: order_read_receipts(&event.read_receipts),
            delivery_status: event.delivery_status.clone(),
            encryption_authenticity: event
                .shield
                .as_ref()
                .and_then(EncryptionAuthenticity::from_shield),
        }
    }

    fn reply_details(
        &self,
        in_reply_to: Option<&InReplyToDetails>,
    ) -> Option<TimelineItemReplyDetails> {
        in_reply_to.map(|details| self.build_reply(details).details)
    }
}

/// Computes width divided by height, but only when both dimensions are
/// known and strictly positive; a zero dimension must not produce an
/// infinite or NaN ratio.
fn aspect_ratio(width: Option<u64>, height: Option<u64>) -> Option<f64> {
    match (width, height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            Some(width as f64 / height as f64)
        }
        _ => None,
    }
}

fn html_body(formatted: Option<&FormattedBody>) -> Option<&str> {
    formatted
        .filter(|formatted| formatted.format == MessageFormat::Html)
        .map(|formatted| formatted.body.as_str())
}
