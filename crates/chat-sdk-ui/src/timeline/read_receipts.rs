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

//! Ordering of per-user read receipts.

use std::cmp::Reverse;

use indexmap::IndexMap;
use itertools::Itertools as _;

use super::{event::Receipt, format_timestamp};

/// A read receipt ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadReceipt {
    /// The user the receipt belongs to.
    pub user_id: String,

    /// The receipt's time of day, formatted for display; `None` when the
    /// receipt carried no timestamp.
    pub formatted_timestamp: Option<String>,
}

/// Sorts receipts by timestamp descending; receipts without a timestamp
/// are treated as epoch zero and therefore sort last.
pub(super) fn order_read_receipts(receipts: &IndexMap<String, Receipt>) -> Vec<ReadReceipt> {
    receipts
        .iter()
        .sorted_by_key(|(_, receipt)| Reverse(receipt.timestamp.unwrap_or(0)))
        .map(|(user_id, receipt)| ReadReceipt {
            user_id: user_id.clone(),
            formatted_timestamp: receipt.timestamp.map(format_timestamp),
        })
        .collect()
}
