//! Marshal name expansion for CSV imports.
//!
//! Organisers often put several people in one "name" cell of their volunteer
//! spreadsheet:
//!
//! ```text
//! Mike and Jenna Jones, Killian Murphy + 1, Sarah Bridges, +2
//! ```
//!
//! [`expand_marshal_names`] turns such a cell into one display name per
//! person. Commas separate people; `&` and the word `and` join people who
//! may share a surname; a trailing `+N` adds N unnamed helpers for the most
//! recently named person.
//!
//! ```
//! use marshal_checkin_core::names::expand_marshal_names;
//!
//! assert_eq!(
//!     expand_marshal_names("Kelly Temple +2"),
//!     vec!["Kelly Temple", "Kelly Temple's (+1)", "Kelly Temple's (+2)"],
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::{decode_entities, sanitize_plain, strip_tags};

/// Maximum length of a single marshal display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Upper bound on helpers generated from one `+N` suffix.
pub const MAX_HELPERS_PER_TOKEN: usize = 50;

/// Matches a trailing `+N`, with optional whitespace either side of the `+`.
static HELPER_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\+\s*(\d+)$").expect("Invalid regex"));

/// Matches `&` (with any entity it starts) or the whole word `and`,
/// case-insensitively. Capture 1 is the entity name, if any.
static CONJUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&(?:(#?[a-z0-9]+);)?|\band\b").expect("Invalid regex")
});

/// Matches an entity body (`lt;`, `#39;`) at the start of the text.
static ENTITY_BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#?[a-z0-9]+;").expect("Invalid regex"));

/// One comma-separated segment of a names cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameToken<'a> {
    /// The segment with any `+N` suffix removed. May be empty for a bare `+N`.
    pub text: &'a str,
    /// The `N` of a trailing `+N`, or 0.
    pub extra_helpers: usize,
}

impl<'a> NameToken<'a> {
    /// Split a trimmed segment into its name text and helper count.
    ///
    /// A count too large for `usize` saturates; it is capped later anyway.
    #[must_use]
    pub fn parse(segment: &'a str) -> Self {
        let segment = segment.trim();
        HELPER_SUFFIX_RE
            .captures(segment)
            .and_then(|caps| {
                let text = caps.get(1)?.as_str();
                let count = caps
                    .get(2)?
                    .as_str()
                    .parse::<usize>()
                    .unwrap_or(usize::MAX);
                Some(Self {
                    text,
                    extra_helpers: count,
                })
            })
            .unwrap_or(Self {
                text: segment,
                extra_helpers: 0,
            })
    }
}

/// The person unnamed helpers are attached to.
struct Anchor {
    name: String,
    helpers: usize,
}

impl Anchor {
    fn push_helpers(&mut self, count: usize, out: &mut Vec<String>) {
        let possessive = possessive(&self.name);
        for _ in 0..count {
            self.helpers += 1;
            out.push(format!("{possessive} (+{})", self.helpers));
        }
    }
}

/// `Kelly Temple` → `Kelly Temple's`, `Sarah Bridges` → `Sarah Bridges'`.
fn possessive(name: &str) -> String {
    if name.ends_with(['s', 'S']) {
        format!("{name}'")
    } else {
        format!("{name}'s")
    }
}

/// Split `text` (tags removed, entities still encoded) at conjunctions.
///
/// A bare `&`, an encoded `&amp;` and the word `and` join people. Other
/// entities, and `&amp;` that escapes an entity (`&amp;lt;`), are text.
fn split_conjunctions(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for caps in CONJUNCTION_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let joins = match caps.get(1) {
            None => true,
            Some(entity) if entity.as_str().eq_ignore_ascii_case("amp") => !text
                .get(whole.end()..)
                .is_some_and(|rest| ENTITY_BODY_RE.is_match(rest)),
            Some(_) => false,
        };
        if joins {
            parts.extend(text.get(start..whole.start()));
            start = whole.end();
        }
    }
    parts.extend(text.get(start..));
    parts
}

/// Split conjunction-joined people, sharing the final surname.
///
/// In `Mike and Jenna Jones` the final person has a surname (`Jones`), so
/// every earlier first-name-only person inherits it.
fn split_people(text: &str) -> Vec<String> {
    let parts: Vec<&str> = split_conjunctions(text)
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let surname = parts
        .last()
        .and_then(|last| last.split_once(char::is_whitespace))
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty());

    parts
        .iter()
        .map(|part| match surname {
            Some(surname) if !part.contains(char::is_whitespace) => format!("{part} {surname}"),
            _ => (*part).to_string(),
        })
        .collect()
}

/// Expand a combined names cell into individual display names.
///
/// Order follows the cell; repeated names are kept. Each `+N` emits N
/// placeholders (`"<Name>'s (+1)"` .. `"<Name>'s (+N)"`) after the most
/// recently named person, continuing the numbering if that person already
/// has helpers. A `+N` before any name has nobody to attach to and is
/// dropped. Never fails; unparseable text is kept as a literal name.
#[must_use]
pub fn expand_marshal_names(raw: &str) -> Vec<String> {
    // Entities stay encoded until each person is split out, so an escaped
    // `&lt;` or `&amp;lt;` is never read as markup or as a conjunction.
    let cleaned = strip_tags(raw);
    let mut names = Vec::new();
    let mut anchor: Option<Anchor> = None;

    for segment in cleaned.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let token = NameToken::parse(segment);
        for person in split_people(token.text) {
            let name = sanitize_plain(&decode_entities(&person), MAX_NAME_LENGTH);
            if name.is_empty() {
                continue;
            }
            names.push(name.clone());
            anchor = Some(Anchor { name, helpers: 0 });
        }

        if token.extra_helpers == 0 {
            continue;
        }
        let count = token.extra_helpers.min(MAX_HELPERS_PER_TOKEN);
        match anchor.as_mut() {
            Some(anchor) => anchor.push_helpers(count, &mut names),
            None => tracing::debug!(
                helpers = token.extra_helpers,
                "Dropping helper count with no preceding name"
            ),
        }
    }

    names
}
