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

use std::sync::Arc;

use super::{
    FormattedText, FormattedTextBuilder, MembershipChange, MessageContent, MessageType,
    OtherState, ProfileChange, StateEventTextBuilder, TextMessageContent, TimelineEvent,
    TimelineEventKind, TimelineItemFactory, TimelineItemSender,
};

mod polls;
mod reactions;
mod read_receipts;
mod shields;

pub(crate) const ALICE: &str = "@alice:example.org";
pub(crate) const BOB: &str = "@bob:example.org";

/// 2017-07-14 02:40:00 UTC, in milliseconds.
pub(crate) const DEFAULT_TS: u64 = 1_500_000_000_000;

/// A deterministic rich-text builder: the "rendered" rich text is simply
/// the input string as a single unstyled run, so assertions can compare
/// plain strings.
pub(crate) struct TestTextBuilder;

impl FormattedTextBuilder for TestTextBuilder {
    fn from_html(&self, html: &str) -> Option<FormattedText> {
        Some(FormattedText::plain(html))
    }

    fn from_plain(&self, plain: &str) -> Option<FormattedText> {
        Some(FormattedText::plain(plain))
    }
}

/// A deterministic state-text builder. Unhandled state event types and
/// unclassified membership changes are suppressed, everything else gets a
/// stable machine-generated sentence.
pub(crate) struct TestStateTextBuilder;

impl StateEventTextBuilder for TestStateTextBuilder {
    fn other_state_text(
        &self,
        state: &OtherState,
        sender: &TimelineItemSender,
        _is_outgoing: bool,
    ) -> Option<String> {
        match state {
            OtherState::Custom { .. } => None,
            _ => Some(format!("{} changed {state:?}", sender.id)),
        }
    }

    fn membership_change_text(
        &self,
        member_user_id: &str,
        _member_display_name: Option<&str>,
        change: Option<MembershipChange>,
        _sender: &TimelineItemSender,
        _is_outgoing: bool,
    ) -> Option<String> {
        change.map(|change| format!("{member_user_id} {change:?}"))
    }

    fn profile_change_text(
        &self,
        change: &ProfileChange,
        member_user_id: &str,
        _member_is_own_user: bool,
    ) -> Option<String> {
        Some(format!("{member_user_id} is now known as {:?}", change.display_name))
    }
}

/// A factory for the account of [`ALICE`], wired to the deterministic test
/// builders.
pub(crate) fn test_factory() -> TimelineItemFactory {
    TimelineItemFactory::new(ALICE, Arc::new(TestTextBuilder), Arc::new(TestStateTextBuilder))
}

pub(crate) fn sender(user_id: &str) -> TimelineItemSender {
    TimelineItemSender {
        id: user_id.to_owned(),
        display_name: None,
        display_name_ambiguous: false,
        avatar_url: None,
    }
}

/// An event from [`BOB`] with unremarkable defaults.
pub(crate) fn event(kind: TimelineEventKind) -> TimelineEvent {
    TimelineEvent {
        event_id: "$event_0:example.org".to_owned(),
        timestamp: DEFAULT_TS,
        sender: sender(BOB),
        is_own: false,
        is_editable: true,
        can_be_replied_to: true,
        kind,
        reactions: Default::default(),
        read_receipts: Default::default(),
        delivery_status: None,
        shield: None,
        original_json: None,
    }
}

pub(crate) fn message(msgtype: MessageType) -> TimelineEventKind {
    TimelineEventKind::Message(MessageContent {
        msgtype,
        in_reply_to: None,
        is_threaded: false,
        is_edited: false,
    })
}

pub(crate) fn text_message(body: &str) -> TimelineEventKind {
    message(MessageType::Text(TextMessageContent { body: body.to_owned(), formatted: None }))
}
