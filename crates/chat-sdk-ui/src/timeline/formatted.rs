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

//! Rich text values and the builder seam that produces them.
//!
//! Rendering HTML is the embedding client's business (it knows its fonts,
//! colors and sanitization rules), so the factory only depends on the
//! [`FormattedTextBuilder`] trait. The [`FormattedText`] value it produces
//! is a flat sequence of marked-up fragments, enough for the factory to
//! perform the emote name merge without understanding HTML itself.

/// A structured rich-text value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedText {
    fragments: Vec<Fragment>,
}

/// A run of text with a single markup applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// The text of the run.
    pub text: String,
    /// The markup applied to the run.
    pub markup: Markup,
}

/// The markup of a [`Fragment`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Markup {
    /// Unstyled text.
    #[default]
    None,
    /// Bold text.
    Strong,
    /// Italic text.
    Emphasis,
    /// Struck-through text.
    Strikethrough,
    /// Monospaced text.
    Code,
    /// A hyperlink.
    Link {
        /// The link target.
        href: String,
    },
}

impl FormattedText {
    /// Creates a rich-text value holding a single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { fragments: vec![Fragment { text: text.into(), markup: Markup::None }] }
    }

    /// Creates a rich-text value from pre-built fragments.
    pub fn from_fragments(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// The fragments of this value, in display order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Concatenates the fragments back into plain text, dropping markup.
    pub fn to_plain(&self) -> String {
        self.fragments.iter().map(|fragment| fragment.text.as_str()).collect()
    }

    /// Returns a copy of this value in which every occurrence of
    /// `placeholder` has been substituted by the fragments of
    /// `replacement`.
    ///
    /// Occurrences are only recognized within a single fragment; the
    /// fragment is split around them and keeps its markup on both sides.
    /// This is what lets the emote builder merge the sender's name into
    /// the first rendered line of an HTML body instead of prepending it as
    /// a detached paragraph.
    pub fn replace(&self, placeholder: &str, replacement: &FormattedText) -> FormattedText {
        if placeholder.is_empty() {
            return self.clone();
        }

        let mut fragments = Vec::with_capacity(self.fragments.len());
        for fragment in &self.fragments {
            if !fragment.text.contains(placeholder) {
                fragments.push(fragment.clone());
                continue;
            }

            let mut pieces = fragment.text.split(placeholder).peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    fragments
                        .push(Fragment { text: piece.to_owned(), markup: fragment.markup.clone() });
                }
                if pieces.peek().is_some() {
                    fragments.extend(replacement.fragments.iter().cloned());
                }
            }
        }

        FormattedText { fragments }
    }
}

/// Converts message bodies into rich text.
///
/// Implemented by the embedding client; both methods return `None` when
/// the input cannot be rendered, in which case the factory falls back to
/// the plain-text body.
pub trait FormattedTextBuilder: Send + Sync {
    /// Renders an HTML body into rich text.
    fn from_html(&self, html: &str) -> Option<FormattedText>;

    /// Renders a plain-text body into rich text, linkifying as the client
    /// sees fit.
    fn from_plain(&self, plain: &str) -> Option<FormattedText>;
}

#[cfg(test)]
mod tests {
    use super::{FormattedText, Fragment, Markup};

    #[test]
    fn test_replace_splits_the_surrounding_fragment() {
        let template = FormattedText::plain("* alice {body}");
        let body = FormattedText::from_fragments(vec![
            Fragment { text: "hello ".to_owned(), markup: Markup::None },
            Fragment { text: "world".to_owned(), markup: Markup::Strong },
        ]);

        let merged = template.replace("{body}", &body);

        assert_eq!(
            merged.fragments(),
            &[
                Fragment { text: "* alice ".to_owned(), markup: Markup::None },
                Fragment { text: "hello ".to_owned(), markup: Markup::None },
                Fragment { text: "world".to_owned(), markup: Markup::Strong },
            ]
        );
        assert_eq!(merged.to_plain(), "* alice hello world");
    }

    #[test]
    fn test_replace_keeps_markup_on_both_sides_of_the_split() {
        let template = FormattedText::from_fragments(vec![Fragment {
            text: "a {x} b".to_owned(),
            markup: Markup::Emphasis,
        }]);
        let replacement = FormattedText::plain("-");

        let merged = template.replace("{x}", &replacement);

        assert_eq!(
            merged.fragments(),
            &[
                Fragment { text: "a ".to_owned(), markup: Markup::Emphasis },
                Fragment { text: "-".to_owned(), markup: Markup::None },
                Fragment { text: " b".to_owned(), markup: Markup::Emphasis },
            ]
        );
    }

    #[test]
    fn test_replace_without_occurrence_is_identity() {
        let template = FormattedText::plain("no placeholder here");
        let merged = template.replace("{body}", &FormattedText::plain("x"));
        assert_eq!(merged, template);
    }
}
