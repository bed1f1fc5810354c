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

//! Mapping of the encryption layer's shield signal onto the user-facing
//! authenticity classification.
//!
//! The shield enumeration is owned by the sync engine's crypto layer; its
//! code set is reproduced here one-to-one and must not be reinterpreted.

/// The verification signal the crypto layer computed for an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShieldState {
    /// A red shield, a strong warning.
    Red {
        /// The machine-readable reason.
        code: ShieldStateCode,
        /// The crypto layer's human-readable reason.
        message: String,
    },
    /// A grey shield, an informational warning.
    Grey {
        /// The machine-readable reason.
        code: ShieldStateCode,
        /// The crypto layer's human-readable reason.
        message: String,
    },
    /// No shield: nothing worth warning about.
    None,
}

/// The machine-readable reason of a [`ShieldState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShieldStateCode {
    /// The sending device is not cross-signed, so authenticity cannot be
    /// guaranteed.
    AuthenticityNotGuaranteed,
    /// The sending device is not known.
    UnknownDevice,
    /// The sending device has not been signed by its owner.
    UnsignedDevice,
    /// The sender's identity is not verified.
    UnverifiedIdentity,
    /// The event was sent unencrypted in an encrypted room.
    SentInClear,
    /// The sender was previously verified but no longer is.
    VerificationViolation,
    /// The event claims a different sender than the session it was
    /// encrypted with.
    MismatchedSender,
}

/// The severity a shield renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShieldColor {
    /// A strong warning.
    Red,
    /// An informational warning.
    Grey,
}

/// User-facing classification of how trustworthy an event's sender is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncryptionAuthenticity {
    /// Authenticity of the message cannot be guaranteed.
    NotGuaranteed(ShieldColor),
    /// The message was sent from an unknown device.
    UnknownDevice(ShieldColor),
    /// The message was sent from an unsigned device.
    UnsignedDevice(ShieldColor),
    /// The sender's identity is not verified.
    UnverifiedIdentity(ShieldColor),
    /// The message was sent unencrypted in an encrypted room.
    SentInClear(ShieldColor),
    /// The sender's verification state changed since they were verified.
    VerificationViolation(ShieldColor),
    /// The message claims a sender it was not encrypted for.
    MismatchedSender(ShieldColor),
}

impl EncryptionAuthenticity {
    /// Classifies a shield; `ShieldState::None` yields `None`.
    pub fn from_shield(shield: &ShieldState) -> Option<Self> {
        let (code, color) = match shield {
            ShieldState::Red { code, .. } => (code, ShieldColor::Red),
            ShieldState::Grey { code, .. } => (code, ShieldColor::Grey),
            ShieldState::None => return None,
        };

        Some(match code {
            ShieldStateCode::AuthenticityNotGuaranteed => Self::NotGuaranteed(color),
            ShieldStateCode::UnknownDevice => Self::UnknownDevice(color),
            ShieldStateCode::UnsignedDevice => Self::UnsignedDevice(color),
            ShieldStateCode::UnverifiedIdentity => Self::UnverifiedIdentity(color),
            ShieldStateCode::SentInClear => Self::SentInClear(color),
            ShieldStateCode::VerificationViolation => Self::VerificationViolation(color),
            ShieldStateCode::MismatchedSender => Self::MismatchedSender(color),
        })
    }
}
