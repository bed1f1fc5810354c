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

//! Room state change descriptions and the seam that verbalizes them.

use super::item::TimelineItemSender;

/// A room state change other than memberships and profiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OtherState {
    /// A moderation policy rule targeting rooms changed.
    PolicyRuleRoom,
    /// A moderation policy rule targeting servers changed.
    PolicyRuleServer,
    /// A moderation policy rule targeting users changed.
    PolicyRuleUser,
    /// The room's avatar changed.
    RoomAvatar,
    /// The room's canonical alias changed.
    RoomCanonicalAlias,
    /// The room was created.
    RoomCreate,
    /// Encryption was enabled in the room.
    RoomEncryption,
    /// Guest access to the room changed.
    RoomGuestAccess,
    /// The visibility of the room's history changed.
    RoomHistoryVisibility,
    /// The rules to join the room changed.
    RoomJoinRules,
    /// The room's display name changed.
    RoomName,
    /// The room's pinned events changed.
    RoomPinnedEvents,
    /// The room's power levels changed.
    RoomPowerLevels,
    /// The room's server access control list changed.
    RoomServerAcl,
    /// A third-party user was invited to the room.
    RoomThirdPartyInvite,
    /// The room was upgraded and tombstoned.
    RoomTombstone,
    /// The room's topic changed.
    RoomTopic,
    /// A child room was added to or removed from a space.
    SpaceChild,
    /// A parent space of the room changed.
    SpaceParent,
    /// A state event this crate has no special handling for.
    Custom {
        /// The `type` of the event.
        event_type: String,
    },
}

/// A change of a member's room membership, as classified by the sync
/// engine from the previous and current membership states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipChange {
    /// No change at all.
    None,
    /// The membership data was inconsistent.
    Error,
    /// The member joined.
    Joined,
    /// The member left on their own.
    Left,
    /// The member was banned.
    Banned,
    /// The member was unbanned.
    Unbanned,
    /// The member was kicked.
    Kicked,
    /// The member was invited.
    Invited,
    /// The member was kicked and banned in one step.
    KickedAndBanned,
    /// The member accepted an invitation.
    InvitationAccepted,
    /// The member rejected an invitation.
    InvitationRejected,
    /// An invitation to the member was revoked.
    InvitationRevoked,
    /// The member knocked on the room.
    Knocked,
    /// The member's knock was accepted.
    KnockAccepted,
    /// The member retracted their knock.
    KnockRetracted,
    /// The member's knock was denied.
    KnockDenied,
    /// A transition this crate doesn't model.
    NotImplemented,
}

/// A change of a member's profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileChange {
    /// The new display name.
    pub display_name: Option<String>,
    /// The previous display name.
    pub prev_display_name: Option<String>,
    /// The new avatar URL.
    pub avatar_url: Option<String>,
    /// The previous avatar URL.
    pub prev_avatar_url: Option<String>,
}

/// Renders room state changes in human-readable form.
///
/// Implemented by the embedding client, which owns localization. Returning
/// `None` from any method suppresses the event from the timeline; that is
/// how state changes not worth surfacing are filtered out.
pub trait StateEventTextBuilder: Send + Sync {
    /// Describes a state change other than memberships and profiles.
    fn other_state_text(
        &self,
        state: &OtherState,
        sender: &TimelineItemSender,
        is_outgoing: bool,
    ) -> Option<String>;

    /// Describes a membership change.
    fn membership_change_text(
        &self,
        member_user_id: &str,
        member_display_name: Option<&str>,
        change: Option<MembershipChange>,
        sender: &TimelineItemSender,
        is_outgoing: bool,
    ) -> Option<String>;

    /// Describes a profile change.
    fn profile_change_text(
        &self,
        change: &ProfileChange,
        member_user_id: &str,
        member_is_own_user: bool,
    ) -> Option<String>;
}
