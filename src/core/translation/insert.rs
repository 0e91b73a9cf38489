//! Sorted, comment-aware insertion of a new property into a translation object.
//!
//! The insertion slot is expressed as an index into the object's *members*: every
//! property plus every comment that sits on its own line inside the object body.
//! Comments have no name and take part in the ordering as `""`, so a key lands on
//! the correct side of a comment that introduces a group of keys.

use std::ops::Range;

use swc_common::Spanned;
use swc_ecma_ast::{ObjectLit, Prop, PropOrSpread};
use tracing::debug;

use super::QuoteKind;
use crate::config::IndentationType;
use crate::core::parsers::ts::ParsedSource;
use crate::utils::{match_strings, remove_quotes};

/// One entry of an object body, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Member {
    /// De-quoted key for `name: value` properties, `""` for anything else.
    pub name: String,
    /// Byte range in the source text.
    pub range: Range<usize>,
    pub is_comment: bool,
}

/// Collect the properties and own-line comments of `object` in source order.
pub(crate) fn collect_members(object: &ObjectLit, parsed: &ParsedSource, source: &str) -> Vec<Member> {
    let mut members: Vec<Member> = object
        .props
        .iter()
        .map(|prop| Member {
            name: property_name(prop, parsed, source).unwrap_or_default(),
            range: parsed.range(prop.span()),
            is_comment: false,
        })
        .collect();

    let object_range = parsed.range(object.span);
    let body = object_range.start + 1..object_range.end.saturating_sub(1);
    let comments: Vec<Member> = parsed
        .comments_within(body)
        .map(|cmt| parsed.range(cmt.span))
        .filter(|range| !members.iter().any(|m| contains(&m.range, range)))
        .filter(|range| is_own_line(source, range))
        .map(|range| Member {
            name: String::new(),
            range,
            is_comment: true,
        })
        .collect();

    members.extend(comments);
    members.sort_by_key(|m| m.range.start);
    members
}

/// Raw key text of a `name: value` property with one layer of quotes stripped.
fn property_name(prop: &PropOrSpread, parsed: &ParsedSource, source: &str) -> Option<String> {
    let PropOrSpread::Prop(prop) = prop else {
        return None;
    };
    let Prop::KeyValue(kv) = &**prop else {
        return None;
    };
    Some(remove_quotes(&source[parsed.range(kv.key.span())]).to_string())
}

/// Quote convention of a translation object, taken from the first `name: value` key.
pub fn quote_kind(object: &ObjectLit, parsed: &ParsedSource, source: &str) -> QuoteKind {
    let first_key = object.props.iter().find_map(|prop| match prop {
        PropOrSpread::Prop(prop) => match &**prop {
            Prop::KeyValue(kv) => Some(&source[parsed.range(kv.key.span())]),
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    });

    match first_key {
        Some(key) if key.starts_with('\'') => QuoteKind::Single,
        _ => QuoteKind::Double,
    }
}

/// Prefix every occurrence of the active quote character with a backslash.
///
/// ```
/// use translately::core::translation::{QuoteKind, escape_translation};
///
/// assert_eq!(escape_translation("it's ok", QuoteKind::Single), r"it\'s ok");
/// assert_eq!(escape_translation("it's ok", QuoteKind::Double), "it's ok");
/// ```
pub fn escape_translation(translation: &str, quote: QuoteKind) -> String {
    let quote = quote.as_char();
    let mut escaped = String::with_capacity(translation.len());
    for ch in translation.chars() {
        if ch == quote {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Compute the member index at which `key` should be inserted.
///
/// `names` are the member names in source order (`""` for comments and non
/// key/value properties). The key is ranked among the sorted names, then anchored
/// to whichever sorted neighbour shares the longer prefix with it; a tie anchors to
/// the successor. The anchor's first position in `names` gives the slot: right after
/// a predecessor, or at the successor's own position. Without a successor the key
/// is appended.
pub fn find_index_for_new_key<S: AsRef<str>>(names: &[S], key: &str) -> usize {
    let mut sorted: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    sorted.push(key);
    sorted.sort_unstable();

    let new_key_index = sorted.iter().position(|name| *name == key).unwrap_or(0);
    let prev = new_key_index
        .checked_sub(1)
        .and_then(|idx| sorted.get(idx))
        .copied();
    let next = sorted.get(new_key_index + 1).copied();

    let prev_match = match_strings(key, prev.unwrap_or(""));
    let next_match = match_strings(key, next.unwrap_or(""));
    let position_of = |anchor: &str| names.iter().position(|name| name.as_ref() == anchor);

    if prev_match > next_match
        && let Some(anchor) = prev
        && let Some(idx) = position_of(anchor)
    {
        debug!(key, anchor, "anchoring new key to predecessor");
        return idx + 1;
    }

    match next.and_then(|anchor| position_of(anchor).map(|idx| (anchor, idx))) {
        Some((anchor, idx)) => {
            debug!(key, anchor, "anchoring new key to successor");
            idx
        }
        None => names.len(),
    }
}

/// A pending text insertion, applied in order of position then creation.
struct Insertion {
    at: Range<usize>,
    text: String,
}

/// Text layout of an object body, derived from its source.
struct ObjectLayout<'s> {
    source: &'s str,
    open: usize,
    close: usize,
    multiline: bool,
    /// Line break used inside the body.
    eol: &'static str,
}

impl<'s> ObjectLayout<'s> {
    fn new(source: &'s str, range: Range<usize>) -> Self {
        let open = range.start;
        let close = range.end.saturating_sub(1);
        Self {
            source,
            open,
            close,
            multiline: source[open..close].contains('\n'),
            eol: if source[open..close].contains("\r\n") { "\r\n" } else { "\n" },
        }
    }

    fn line_start(&self, pos: usize) -> usize {
        self.source[..pos].rfind('\n').map_or(0, |idx| idx + 1)
    }

    /// Leading whitespace of the line containing `pos`.
    fn indent_at(&self, pos: usize) -> &'s str {
        let start = self.line_start(pos);
        let line = &self.source[start..];
        let width = line
            .find(|ch: char| ch != ' ' && ch != '\t')
            .unwrap_or(line.len());
        &line[..width]
    }

    fn starts_line(&self, pos: usize) -> bool {
        self.source[self.line_start(pos)..pos].trim().is_empty()
    }

    /// Position of a comma following `pos`, allowing whitespace and comments in between.
    fn comma_after(&self, pos: usize) -> Option<usize> {
        let mut cursor = pos;
        loop {
            let rest = &self.source[cursor..self.close];
            let trimmed = rest.trim_start();
            cursor += rest.len() - trimmed.len();
            if let Some(comment) = trimmed.strip_prefix("/*") {
                cursor += 2 + comment.find("*/")? + 2;
            } else if trimmed.starts_with("//") {
                cursor += trimmed.find('\n')?;
            } else {
                return trimmed.starts_with(',').then_some(cursor);
            }
        }
    }

    /// First line break at or after `pos` that is still inside the object body.
    fn newline_after(&self, pos: usize) -> Option<usize> {
        let offset = self.source[pos..self.close].find('\n')?;
        let newline = pos + offset;
        if offset > 0 && self.source.as_bytes()[newline - 1] == b'\r' {
            Some(newline - 1)
        } else {
            Some(newline)
        }
    }
}

/// Insert `property` (already quoted and escaped) at member `index`.
///
/// Returns the new source text. Only the new property, its separator and, when it
/// becomes the last property, a comma after the previous last property are added;
/// every other byte is kept.
pub(crate) fn insert_property_text(
    source: &str,
    object_range: Range<usize>,
    members: &[Member],
    index: usize,
    property: &str,
    indentation: IndentationType,
) -> String {
    let layout = ObjectLayout::new(source, object_range);
    let eol = layout.eol;
    let index = index.min(members.len());
    let mut insertions: Vec<Insertion> = Vec::new();

    let is_property = |m: &&Member| !m.is_comment;
    let has_property_after = members[index..].iter().any(|m| !m.is_comment);
    let last_property = members.iter().rfind(is_property);
    let trailing_comma = last_property.is_some_and(|m| layout.comma_after(m.range.end).is_some());

    let needs_comma = has_property_after || trailing_comma;
    let comma = if needs_comma { "," } else { "" };

    if !has_property_after
        && let Some(previous) = members[..index].iter().rfind(is_property)
        && layout.comma_after(previous.range.end).is_none()
    {
        insertions.push(Insertion {
            at: previous.range.end..previous.range.end,
            text: ",".to_string(),
        });
    }

    if members.is_empty() {
        let base_indent = layout.indent_at(layout.open);
        let indent = format!("{}{}", base_indent, indentation.unit());
        match layout.newline_after(layout.open) {
            Some(newline) => insertions.push(Insertion {
                at: newline..newline,
                text: format!("{eol}{indent}{property}"),
            }),
            None => {
                // keep inline comments of an otherwise empty `{ /* ... */ }`
                let interior = layout.open + 1..layout.close;
                let at = if source[interior.clone()].trim().is_empty() {
                    interior
                } else {
                    layout.close..layout.close
                };
                insertions.push(Insertion {
                    at,
                    text: format!("{eol}{indent}{property}{eol}{base_indent}"),
                });
            }
        }
    } else if let Some(target) = members.get(index) {
        let start = target.range.start;
        if layout.multiline && layout.starts_line(start) {
            let line_start = layout.line_start(start);
            let indent = layout.indent_at(start);
            insertions.push(Insertion {
                at: line_start..line_start,
                text: format!("{indent}{property}{comma}{eol}"),
            });
        } else {
            insertions.push(Insertion {
                at: start..start,
                text: format!("{property}{comma} "),
            });
        }
    } else if let Some(anchor) = members.last() {
        let after = if anchor.is_comment {
            anchor.range.end
        } else {
            layout
                .comma_after(anchor.range.end)
                .map_or(anchor.range.end, |idx| idx + 1)
        };
        match layout.newline_after(after) {
            Some(newline) if layout.multiline => {
                let indent = if layout.starts_line(anchor.range.start) {
                    layout.indent_at(anchor.range.start).to_string()
                } else {
                    format!("{}{}", layout.indent_at(layout.open), indentation.unit())
                };
                insertions.push(Insertion {
                    at: newline..newline,
                    text: format!("{eol}{indent}{property}{comma}"),
                });
            }
            _ => insertions.push(Insertion {
                at: after..after,
                text: format!(" {property}{comma}"),
            }),
        }
    }

    apply_insertions(source, insertions)
}

fn apply_insertions(source: &str, mut insertions: Vec<Insertion>) -> String {
    // Stable sort keeps creation order for insertions at the same position.
    insertions.sort_by_key(|ins| ins.at.start);

    let mut output = String::with_capacity(source.len() + 64);
    let mut cursor = 0;
    for ins in insertions {
        output.push_str(&source[cursor..ins.at.start]);
        output.push_str(&ins.text);
        cursor = ins.at.end;
    }
    output.push_str(&source[cursor..]);
    output
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    inner.start >= outer.start && inner.end <= outer.end
}

/// A comment is a member of its own when nothing but whitespace shares its line.
fn is_own_line(source: &str, range: &Range<usize>) -> bool {
    let line_start = source[..range.start].rfind('\n').map_or(0, |idx| idx + 1);
    let line_end = source[range.end..]
        .find('\n')
        .map_or(source.len(), |idx| range.end + idx);
    source[line_start..range.start].trim().is_empty() && source[range.end..line_end].trim().is_empty()
}
