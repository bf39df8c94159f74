//! XSS scrubbing for a single string.
//!
//! One pass runs four steps in a fixed order:
//!
//! 1. remove `<script ...>...</script>` blocks (case-insensitive, multi-line)
//! 2. trim surrounding whitespace
//! 3. decode HTML entities (`&lt;` becomes `<`)
//! 4. drop NUL characters
//!
//! Decoding can reveal new markup (`&lt;script&gt;...`) and new edge whitespace
//! (`&#32;`), so passes repeat until the output stops changing. Each pass is
//! linear, but nested input (`&amp;amp;...lt;`, `<scr<script></script>ipt>`)
//! peels one layer per pass. After [`MAX_PASSES`] passes without settling, the
//! remaining `<`, `&` and NUL characters are dropped, which leaves a string no
//! further pass can change.
//!
//! Step 3 decodes every `;`-terminated reference. It also decodes numeric
//! references without `;`, and the markup-significant legacy names `&amp`,
//! `&lt`, `&gt` and `&quot` without `;`, as browsers do. Numeric references to
//! U+0000 or to invalid code points become U+FFFD. Other legacy names
//! (`&copy`, `&eacute`) are kept as written.

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

static SCRIPT_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// Pattern matching a complete script block, lazily, across lines.
pub const SCRIPT_TAG_PATTERN: &str = r"(?is)<script.*?>.*?</script>";

/// Passes run before falling back to dropping markup and entity delimiters.
pub const MAX_PASSES: usize = 8;

/// Legacy entity names decoded without a closing `;`.
const LEGACY_NAMES: [(&str, char); 4] = [("quot", '"'), ("amp", '&'), ("lt", '<'), ("gt", '>')];

fn script_tag_regex() -> &'static Regex {
    SCRIPT_TAG_REGEX
        .get_or_init(|| Regex::new(SCRIPT_TAG_PATTERN).expect("script tag pattern is valid"))
}

/// Returns `true` if `input` still contains a complete script block.
pub fn contains_script_block(input: &str) -> bool {
    script_tag_regex().is_match(input)
}

/// Cleans a string of script blocks, edge whitespace, entities and NUL bytes.
///
/// Total over all inputs, linear in the input length, and idempotent:
/// `sanitize_string(&sanitize_string(s)) == sanitize_string(s)`.
///
/// ```rust
/// use sanitizable::sanitize_string;
///
/// assert_eq!(sanitize_string("  Hello\0World  "), "HelloWorld");
/// assert_eq!(sanitize_string("&lt;b&gt;hi&lt;/b&gt;"), "<b>hi</b>");
/// assert_eq!(sanitize_string("<script>alert(1)</script>ok"), "ok");
/// ```
pub fn sanitize_string(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    match scrub_to_fixed_point(input, MAX_PASSES) {
        Ok(clean) => clean,
        Err(unsettled) => {
            tracing::debug!(
                len = input.len(),
                passes = MAX_PASSES,
                "text did not settle, dropping markup and entity delimiters"
            );
            strip_delimiters(&unsettled)
        }
    }
}

/// Repeats [`scrub_pass`] until it leaves the text unchanged.
///
/// Returns `Err` with the latest text when `budget` further passes still
/// change it.
fn scrub_to_fixed_point(input: &str, budget: usize) -> Result<String, String> {
    let mut current = scrub_pass(input).into_owned();
    for _ in 0..budget {
        let next = match scrub_pass(&current) {
            next if *next == *current => None,
            next => Some(next.into_owned()),
        };
        match next {
            Some(next) => current = next,
            None => return Ok(current),
        }
    }
    Err(current)
}

/// Drops every `<`, `&` and NUL, then trims. The result is a fixed point of
/// [`scrub_pass`].
fn strip_delimiters(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|c| !matches!(c, '<' | '&' | '\0'))
        .collect();
    stripped.trim().to_owned()
}

/// Runs the four steps once. Borrows when nothing changed.
fn scrub_pass(input: &str) -> Cow<'_, str> {
    let without_scripts = script_tag_regex().replace_all(input, "");
    let trimmed = trim_cow(without_scripts);
    let decoded = match html_escape::decode_html_entities(trimmed.as_ref()) {
        Cow::Borrowed(_) => None,
        Cow::Owned(decoded) => Some(decoded),
    };
    let decoded = decoded.map_or(trimmed, Cow::Owned);
    let unterminated = match decode_unterminated_references(&decoded) {
        Cow::Borrowed(_) => None,
        Cow::Owned(more) => Some(more),
    };
    let decoded = unterminated.map_or(decoded, Cow::Owned);
    if decoded.contains('\0') {
        Cow::Owned(decoded.replace('\0', ""))
    } else {
        decoded
    }
}

/// Decodes the references `html_escape` leaves alone: numeric references
/// without `;` or naming U+0000, and the legacy names in [`LEGACY_NAMES`].
fn decode_unterminated_references(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut changed = false;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        let tail = &rest[at + 1..];
        match decode_reference(tail) {
            Some((decoded, used)) => {
                out.push(decoded);
                rest = &tail[used..];
                changed = true;
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    if !changed {
        return Cow::Borrowed(input);
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decodes the reference starting right after an `&`.
///
/// Returns the character and the bytes consumed, including a trailing `;`.
fn decode_reference(tail: &str) -> Option<(char, usize)> {
    let (decoded, len) = match tail.strip_prefix('#') {
        Some(number) => {
            let (skip, radix) = match number.as_bytes().first() {
                Some(b'x' | b'X') => (2, 16),
                _ => (1, 10),
            };
            let digits = &tail[skip..];
            let end = digits
                .find(|c: char| !c.is_digit(radix))
                .unwrap_or(digits.len());
            if end == 0 {
                return None;
            }
            let decoded = u32::from_str_radix(&digits[..end], radix)
                .ok()
                .and_then(char::from_u32)
                .filter(|c| *c != '\0')
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            (decoded, skip + end)
        }
        None => LEGACY_NAMES
            .iter()
            .find(|(name, _)| tail.starts_with(*name))
            .map(|(name, decoded)| (*decoded, name.len()))?,
    };
    let len = if tail[len..].starts_with(';') { len + 1 } else { len };
    Some((decoded, len))
}

fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(borrowed) => Cow::Borrowed(borrowed.trim()),
        Cow::Owned(owned) => {
            let trimmed = owned.trim();
            if trimmed.len() == owned.len() {
                Cow::Owned(owned)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}
