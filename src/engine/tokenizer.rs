//! Line tokenization.
//!
//! A line is split into alternating word and separator pieces:
//!
//! ```text
//! "Help me, Obi-Wan"
//!  ^^^^ ^^ ^^^ ^ ^^^
//!  Word Sep Word Sep Word Sep Word
//!      " "   ", "  "-"
//! ```
//!
//! Words are maximal runs of letters (any script), optionally joined by a
//! word-internal apostrophe so that contractions stay whole. Everything else
//! (whitespace, digits, punctuation, hyphens) is separator text and is never
//! inspected or altered downstream.

use crate::{Piece, Range, Token};

/// Split `line` into pieces; concatenating their text restores `line`.
pub fn tokenize(line: &str) -> Vec<Piece<'_>> {
    let spans: Vec<(usize, usize)> =
        regex!(r"\p{L}+(?:['’]\p{L}+)*").find_iter(line).map(|m| (m.start(), m.end())).collect();

    let mut pieces = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for (idx, &(start, end)) in spans.iter().enumerate() {
        if start > cursor {
            pieces.push(Piece::Separator(&line[cursor..start]));
        }
        let next = spans.get(idx + 1).map_or(line.len(), |&(s, _)| s);
        pieces.push(Piece::Word(Token {
            text: &line[start..end],
            range: Range { start, end },
            trailing: &line[end..next],
        }));
        cursor = end;
    }

    if cursor < line.len() {
        pieces.push(Piece::Separator(&line[cursor..]));
    }

    pieces
}
