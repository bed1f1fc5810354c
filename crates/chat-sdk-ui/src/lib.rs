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

//! High level, UI-ready timeline item model for federated chat clients.
//!
//! The sync engine hands this crate one already-decrypted (or
//! failed-to-decrypt) timeline event at a time; the
//! [`TimelineItemFactory`] turns each of them into an immutable
//! [`TimelineItem`](timeline::TimelineItem) with deterministic ordering of
//! reactions, read receipts, replies and poll results. Everything here is
//! synchronous and free of side effects; networking, decryption and
//! persistence live in the engine, rendering lives in the client app.

pub mod timeline;

pub use self::timeline::TimelineItemFactory;
