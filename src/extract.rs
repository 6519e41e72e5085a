//! Tag extractor — finds `# PUBLIC` blocks and splits them into signature
//! and documentation with a small line-classification state machine.
//!
//! Documentation may be written in three styles, freely mixed:
//!
//! ```text
//! # PUBLIC
//! # Line comments directly under the tag
//! func thing(a, b):
//!     """Double-quoted text block,
//!     closing it ends the block"""
//! ```
//!
//! `'''` text blocks behave like `"""` ones except that closing them does not
//! end the block: scanning continues until a blank line.

use crate::config::SignatureMode;
use crate::model::TaggedBlock;

const DOUBLE_QUOTES: &str = "\"\"\"";
const SINGLE_QUOTES: &str = "'''";

// -- Line classification ------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Double,
    Single,
}

impl Quote {
    fn marker(self) -> &'static str {
        match self {
            Quote::Double => DOUBLE_QUOTES,
            Quote::Single => SINGLE_QUOTES,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// Starts with `#`; carries the text after the marker, trimmed.
    Comment(&'a str),
    /// Contains a text-block marker; `markers` counts its occurrences.
    TextMarker { quote: Quote, markers: usize },
    Blank,
    Code,
}

fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix('#') {
        return LineKind::Comment(rest.trim());
    }
    // Double quotes take priority when a line carries both markers.
    for quote in [Quote::Double, Quote::Single] {
        let markers = line.matches(quote.marker()).count();
        if markers > 0 {
            return LineKind::TextMarker { quote, markers };
        }
    }
    // Indented "blank" lines inside a body are still code.
    if line.is_empty() || line == "\r" {
        LineKind::Blank
    } else {
        LineKind::Code
    }
}

// -- Block state machine ------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Plain,
    TextBlock,
}

enum Step {
    Continue,
    Stop,
}

fn push_doc(block: &mut TaggedBlock, text: &str) {
    block.documentation.push_str(text);
    block.documentation.push('\n');
}

/// Build one block from the lines following a tag line.
fn consume_block(body: &str) -> TaggedBlock {
    let mut block = TaggedBlock::default();
    let mut state = State::Plain;

    for line in body.lines() {
        let step = match classify(line) {
            LineKind::Comment(text) => {
                push_doc(&mut block, text);
                Step::Continue
            }
            LineKind::TextMarker { quote, markers } => {
                let text = line.replace(quote.marker(), "");
                push_doc(&mut block, text.trim());
                let closes = state == State::TextBlock || markers >= 2;
                match (quote, closes) {
                    // `"""` close: the block is complete.
                    (Quote::Double, true) => Step::Stop,
                    // `'''` close: leave the text block, keep scanning.
                    (Quote::Single, true) => {
                        state = State::Plain;
                        Step::Continue
                    }
                    (_, false) => {
                        state = State::TextBlock;
                        Step::Continue
                    }
                }
            }
            LineKind::Blank | LineKind::Code if state == State::TextBlock => {
                push_doc(&mut block, line.trim());
                Step::Continue
            }
            LineKind::Code => {
                block.signature.push_str(line);
                Step::Continue
            }
            LineKind::Blank => Step::Stop,
        };
        if let Step::Stop = step {
            break;
        }
    }

    block
}

fn record(blocks: &mut Vec<TaggedBlock>, block: TaggedBlock, mode: SignatureMode) {
    if mode == SignatureMode::LastWins {
        if let Some(existing) = blocks.iter_mut().find(|b| b.signature == block.signature) {
            existing.documentation = block.documentation;
            return;
        }
    }
    blocks.push(block);
}

// -- Public API ---------------------------------------------------------------

/// Extract every tagged block from a script.
///
/// An empty result means the tag never occurs; a file with at least one tag
/// always yields at least one block, even if its documentation is empty.
pub fn extract(input: &str, tag: &str, mode: SignatureMode) -> Vec<TaggedBlock> {
    let mut blocks = Vec::new();
    let Some(first_char) = tag.chars().next() else {
        return blocks;
    };

    let mut search_from = 0;
    while let Some(offset) = input[search_from..].find(tag) {
        let start = search_from + offset;
        let after_tag = &input[start + tag.len()..];
        let body = match after_tag.find('\n') {
            Some(newline) => &after_tag[newline + 1..],
            None => "",
        };
        record(&mut blocks, consume_block(body), mode);
        search_from = start + first_char.len_utf8();
    }

    blocks
}
