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

use super::{event, test_factory, text_message};
use crate::timeline::{
    EncryptionAuthenticity, ShieldColor, ShieldState, ShieldStateCode,
};

fn build_authenticity(shield: Option<ShieldState>) -> Option<EncryptionAuthenticity> {
    let factory = test_factory();
    let mut event = event(text_message("hello"));
    event.shield = shield;
    factory.build_timeline_item(&event, false).unwrap().properties.encryption_authenticity
}

#[test]
fn test_no_shield_means_no_authenticity_warning() {
    assert_eq!(build_authenticity(None), None);
    assert_eq!(build_authenticity(Some(ShieldState::None)), None);
}

#[test]
fn test_a_red_shield_keeps_its_severity() {
    let shield = ShieldState::Red {
        code: ShieldStateCode::UnverifiedIdentity,
        message: "Encrypted by an unverified user.".to_owned(),
    };

    assert_eq!(
        build_authenticity(Some(shield)),
        Some(EncryptionAuthenticity::UnverifiedIdentity(ShieldColor::Red))
    );
}

#[test]
fn test_a_grey_shield_keeps_its_severity() {
    let shield = ShieldState::Grey {
        code: ShieldStateCode::AuthenticityNotGuaranteed,
        message: "The authenticity of this encrypted message can't be guaranteed.".to_owned(),
    };

    assert_eq!(
        build_authenticity(Some(shield)),
        Some(EncryptionAuthenticity::NotGuaranteed(ShieldColor::Grey))
    );
}

#[test]
fn test_every_shield_code_maps_onto_a_distinct_classification() {
    let codes = [
        ShieldStateCode::AuthenticityNotGuaranteed,
        ShieldStateCode::UnknownDevice,
        ShieldStateCode::UnsignedDevice,
        ShieldStateCode::UnverifiedIdentity,
        ShieldStateCode::SentInClear,
        ShieldStateCode::VerificationViolation,
        ShieldStateCode::MismatchedSender,
    ];

    let classified = codes
        .into_iter()
        .map(|code| {
            EncryptionAuthenticity::from_shield(&ShieldState::Red {
                code,
                message: String::new(),
            })
            .unwrap()
        })
        .collect::<Vec<_>>();

    assert_eq!(
        classified,
        [
            EncryptionAuthenticity::NotGuaranteed(ShieldColor::Red),
            EncryptionAuthenticity::UnknownDevice(ShieldColor::Red),
            EncryptionAuthenticity::UnsignedDevice(ShieldColor::Red),
            EncryptionAuthenticity::UnverifiedIdentity(ShieldColor::Red),
            EncryptionAuthenticity::SentInClear(ShieldColor::Red),
            EncryptionAuthenticity::VerificationViolation(ShieldColor::Red),
            EncryptionAuthenticity::MismatchedSender(ShieldColor::Red),
        ]
    );
}
