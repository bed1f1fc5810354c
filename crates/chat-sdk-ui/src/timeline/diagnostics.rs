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

//! The diagnostic channel of the item factory.
//!
//! The factory never fails on malformed input; it degrades and reports
//! what it saw through a [`DiagnosticSink`] chosen by the embedding layer.
//! This keeps the pipeline a pure function of its inputs, which matters
//! for property-based testing and for concurrent use.

use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

/// A single degradation notice emitted while building an item.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    /// Which part of the pipeline emitted the diagnostic.
    pub context: &'static str,

    /// What happened.
    pub message: String,
}

/// Receives diagnostics emitted by the factory.
pub trait DiagnosticSink: Send + Sync {
    /// Handles one diagnostic.
    fn emit(&self, diagnostic: Diagnostic);
}

/// The default sink: forwards every diagnostic to [`tracing::warn!`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        warn!(context = diagnostic.context, "{}", diagnostic.message);
    }
}

/// A sink that buffers diagnostics, e.g. to attach them to a bug report.
#[derive(Debug, Default)]
pub struct BufferedDiagnostics {
    buffer: Mutex<Vec<Diagnostic>>,
}

impl BufferedDiagnostics {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns the buffered diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.buffer.lock().unwrap())
    }
}

impl DiagnosticSink for BufferedDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.buffer.lock().unwrap().push(diagnostic);
    }
}
