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

//! Raw timeline events, as handed over by the sync engine.
//!
//! These types are thin, immutable data-transfer records: decryption,
//! relation bundling and edit reconciliation have already happened by the
//! time an event reaches this crate. The factory never mutates them.

use indexmap::IndexMap;

use super::{
    item::TimelineItemSender,
    polls::PollKind,
    shields::ShieldState,
    state_events::{MembershipChange, OtherState, ProfileChange},
};

pub mod message;

use self::message::{ImageInfo, MediaSource, MessageContent, MessageType};

/// A single event of a room timeline, decrypted (or not) and normalized by
/// the sync engine.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEvent {
    /// The globally unique identifier of the event.
    pub event_id: String,

    /// Origin server timestamp, in milliseconds since the Unix epoch.
    pub timestamp: u64,

    /// The sender of the event.
    pub sender: TimelineItemSender,

    /// Whether the event was sent by the account viewing the timeline.
    pub is_own: bool,

    /// Whether the event can still be edited by its sender.
    pub is_editable: bool,

    /// Whether the event is a valid reply target.
    pub can_be_replied_to: bool,

    /// What the event is.
    pub kind: TimelineEventKind,

    /// Raw reactions to this event: reaction key, then sender, then the
    /// time the sender reacted.
    pub reactions: ReactionsByKeyBySender,

    /// Read receipts attached to this event, keyed by user ID.
    pub read_receipts: IndexMap<String, Receipt>,

    /// Local send state, for events originating from this client.
    pub delivery_status: Option<DeliveryStatus>,

    /// Cryptographic verification signal for the sending device, if the
    /// room is encrypted.
    pub shield: Option<ShieldState>,

    /// The JSON source of the event, kept around for diagnostics and for
    /// the notice payload classifier.
    pub original_json: Option<String>,
}

/// Raw reactions, keyed by reaction key and then by sender.
pub type ReactionsByKeyBySender = IndexMap<String, IndexMap<String, ReactionInfo>>;

/// Metadata about a single sender's reaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionInfo {
    /// When the reaction was sent, in milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// A read receipt as reported by the sync engine.
///
/// Receipts from old servers may lack a timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Receipt {
    /// When the user read the event, in milliseconds since the Unix epoch.
    pub timestamp: Option<u64>,
}

/// Local send state of an event originating from this client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The event is waiting in the send queue.
    Sending,
    /// The server acknowledged the event.
    Sent,
    /// Sending failed.
    SendingFailed {
        /// The error reported by the send queue.
        error: String,
    },
}

/// The kind of a raw timeline event.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineEventKind {
    /// An encrypted event that could not be decrypted.
    UnableToDecrypt(EncryptedMessage),

    /// A message that was redacted.
    RedactedMessage,

    /// A sticker.
    Sticker {
        /// The textual representation of the sticker.
        body: String,
        /// Metadata about the sticker image.
        info: ImageInfo,
        /// Where to fetch the sticker image from.
        source: MediaSource,
    },

    /// A message-like event that the engine failed to deserialize.
    FailedToParseMessageLike {
        /// The event `type`.
        event_type: String,
        /// The stringified deserialization error.
        error: String,
    },

    /// A state event that the engine failed to deserialize.
    FailedToParseState {
        /// The event `type`.
        event_type: String,
        /// The state key.
        state_key: String,
        /// The stringified deserialization error.
        error: String,
    },

    /// A regular room message.
    Message(MessageContent),

    /// A room state change other than memberships and profiles.
    State {
        /// The state key.
        state_key: String,
        /// The state content.
        content: OtherState,
    },

    /// A change of a member's room membership.
    RoomMembership {
        /// The member whose membership changed.
        user_id: String,
        /// The member's display name, if known.
        display_name: Option<String>,
        /// What changed, `None` when the engine could not classify it.
        change: Option<MembershipChange>,
    },

    /// A change of a member's profile.
    ProfileChange(ProfileChange),

    /// The start of a poll.
    Poll(PollStart),

    /// A legacy 1:1 call invite.
    CallInvite,

    /// A notification that a group call started.
    CallNotify,
}

/// Metadata of an event that could not be decrypted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncryptedMessage {
    /// A group-session encrypted event.
    MegolmV1AesSha2 {
        /// The ID of the session used to encrypt the event.
        session_id: String,
        /// Why decryption failed, as far as the engine can tell.
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

/// Why an event could not be decrypted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UtdCause {
    /// No clear cause; the key may still arrive.
    Unknown,
    /// The event was sent before this user joined the room, so the key was
    /// intentionally withheld.
    Membership,
}

/// The immutable description of a poll start event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollStart {
    /// The question being asked.
    pub question: String,

    /// Whether votes are visible before the poll ends.
    pub kind: PollKind,

    /// How many options one user may select.
    pub max_selections: u64,

    /// The options voters can pick, in the order the creator defined them.
    pub answers: Vec<PollAnswer>,

    /// Votes cast so far: option ID to the users who picked it.
    pub votes: IndexMap<String, Vec<String>>,

    /// When the poll ended, in milliseconds since the Unix epoch, if it
    /// has ended.
    pub end_time: Option<u64>,

    /// Whether the poll question or options have been edited.
    pub has_been_edited: bool,
}

/// One selectable option of a poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollAnswer {
    /// The stable identifier of the option.
    pub id: String,
    /// The text shown to voters.
    pub text: String,
}

/// The resolution lifecycle of data that may require a round trip to the
/// server, such as the event a message replies to.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineDetails<T> {
    /// The details are not available yet, and have not been requested from
    /// the server.
    Unavailable,

    /// The details are not available yet, but have been requested.
    Pending,

    /// The details are available.
    Ready(T),

    /// An error occurred when fetching the details.
    Error(String),
}

impl<T> TimelineDetails<T> {
    /// Whether the details are available.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// The profile of an event sender.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    /// The display name, if set.
    pub display_name: Option<String>,

    /// Whether the display name is ambiguous within the room.
    pub display_name_ambiguous: bool,

    /// The avatar URL, if set.
    pub avatar_url: Option<String>,
}

/// Details about an event being replied to.
#[derive(Clone, Debug, PartialEq)]
pub struct InReplyToDetails {
    /// The ID of the replied-to event.
    pub event_id: String,

    /// The replied-to event itself, once resolved.
    pub event: TimelineDetails<Box<EmbeddedEvent>>,
}

/// An event embedded in another event, such as the target of a reply.
///
/// Embedded events carry no reply reference of their own, so reply
/// resolution is bounded to a single level by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedEvent {
    /// What the embedded event is.
    pub kind: EmbeddedEventKind,

    /// The user ID of the sender of the embedded event.
    pub sender_id: String,

    /// The profile of the sender of the embedded event.
    pub sender_profile: TimelineDetails<Profile>,
}

/// The kind of an embedded event.
#[derive(Clone, Debug, PartialEq)]
pub enum EmbeddedEventKind {
    /// A regular room message.
    Message(EmbeddedMessage),

    /// The start of a poll.
    Poll {
        /// The question being asked.
        question: String,
    },

    /// A sticker.
    Sticker {
        /// The textual representation of the sticker.
        body: String,
    },

    /// A message that was redacted.
    RedactedMessage,

    /// Any other event kind; rendered with a generic fallback.
    Other,
}

/// The message payload of an embedded event.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedMessage {
    /// The `msgtype`-specific content.
    pub msgtype: MessageType,

    /// Whether the embedded message is part of a thread.
    pub is_threaded: bool,
}
