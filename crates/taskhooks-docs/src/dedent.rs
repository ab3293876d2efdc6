//! Whitespace normalisation for hook doc text.
//!
//! All functions are pure and never fail: input they cannot improve comes
//! back unchanged.

use std::borrow::Cow;

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

fn leading_whitespace(line: &str) -> &str {
    let body = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - body.len()]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count();
    &a[..len]
}

/// Longest leading whitespace shared by every non-blank line.
///
/// `None` when there are no non-blank lines. Spaces and tabs are compared
/// literally, so a tab never matches spaces.
fn common_margin<'a>(lines: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    lines
        .filter(|line| !is_blank(line))
        .map(leading_whitespace)
        .reduce(|margin, indent| common_prefix(margin, indent))
}

/// Removes the whitespace margin shared by all non-blank lines.
///
/// Whitespace-only lines become empty and do not constrain the margin.
/// Applying it to its own output changes nothing.
pub fn dedent(text: &str) -> String {
    let margin = common_margin(text.split('\n')).unwrap_or("");

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Gives a flush first line the indentation of the lines after it.
///
/// Doc text is often written with its first line right after the opening
/// quote and the rest indented to the surrounding code:
///
/// ```text
/// First line.
///
///     Indented body.
/// ```
///
/// Plain [`dedent`] can strip nothing from that. Prefixing the first line
/// with the margin of the remaining lines makes the whole text dedent
/// uniformly. Text that is empty, has a single line, already starts with
/// whitespace, or whose later lines share no margin is returned unchanged.
pub fn fix_first_line_indent(text: &str) -> Cow<'_, str> {
    let Some((first, rest)) = text.split_once('\n') else {
        return Cow::Borrowed(text);
    };

    if first.is_empty() || first.starts_with([' ', '\t']) {
        return Cow::Borrowed(text);
    }

    match common_margin(rest.split('\n')) {
        Some(margin) if !margin.is_empty() => Cow::Owned(format!("{margin}{text}")),
        _ => Cow::Borrowed(text),
    }
}

/// Prefixes every non-blank line with `prefix`.
pub fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                Cow::Borrowed(line)
            } else {
                Cow::Owned(format!("{prefix}{line}"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalises raw doc text: first-line fix, then dedent.
pub fn clean_doc(text: &str) -> String {
    dedent(&fix_first_line_indent(text))
}
