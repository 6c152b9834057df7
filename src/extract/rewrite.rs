//! The ref-forwarding migration.
//!
//! Converts the deprecated `forwardRef` wrapper into a plain function taking
//! props as its only parameter, and makes sure the component's props interface
//! declares a `ref` field so the ref can arrive as an ordinary named prop.
//! The match is intentionally narrow: anything that does not fit the exact
//! call shape passes through byte-identical.

use regex::Regex;
use std::sync::LazyLock;

// `forwardRef<Ref, Props>((props, ref) =>` with an optional `React.` qualifier
// and optional type arguments. The props parameter may be an identifier or a
// destructuring pattern; nested generics in the type arguments are out of
// scope for this rewrite.
static FORWARD_REF_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:React\.)?forwardRef\s*(?:<(?P<generics>[^<>]*)>)?\(\s*\(\s*(?P<props>\{[^}]*\}|[A-Za-z_$][\w$]*)\s*,\s*ref\s*\)\s*=>",
    )
    .expect("invalid regex")
});

static PROPS_INTERFACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"interface\s+(?:[A-Za-z_$][\w$]*)?Props\b[^{]*\{").expect("invalid regex"));

static REF_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bref\s*\??\s*:").expect("invalid regex"));

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][\w$]*$").expect("invalid regex"));

/// Apply the migration to one file's source text.
///
/// Returns the input unchanged when no `forwardRef` call matches. When a call
/// is rewritten, the wrapped callback keeps its props parameter (annotated
/// with the props type argument when one was present), the `ref` parameter is
/// dropped, and the wrapper call's parentheses are removed.
pub(crate) fn migrate_forward_ref(source: &str) -> String {
    let mut text = source.to_string();
    let mut search_from = 0;
    let mut rewrote = false;

    loop {
        let Some((start, end, replacement)) = next_rewrite(&text, search_from) else {
            break;
        };

        // The wrapper call's opening parenthesis is the first one in the match.
        let Some(open_offset) = text[start..end].find('(') else {
            break;
        };
        let Some(close_idx) = matching_delimiter(&text, start + open_offset, '(', ')') else {
            // Unbalanced call, leave this site alone and keep scanning.
            search_from = end;
            continue;
        };

        let mut rebuilt = String::with_capacity(text.len());
        rebuilt.push_str(&text[..start]);
        rebuilt.push_str(&replacement);
        rebuilt.push_str(&text[end..close_idx]);
        rebuilt.push_str(&text[close_idx + 1..]);

        search_from = start + replacement.len();
        text = rebuilt;
        rewrote = true;
    }

    if rewrote { ensure_ref_field(&text) } else { text }
}

/// Find the next `forwardRef` call at or after `search_from` and build the
/// plain-function head that replaces it.
fn next_rewrite(text: &str, search_from: usize) -> Option<(usize, usize, String)> {
    let cap = FORWARD_REF_CALL.captures_at(text, search_from)?;
    let whole = cap.get(0)?;
    let props = cap.name("props")?.as_str();

    // The props type is the last type argument, when the argument list has the
    // expected `<Ref, Props>` shape.
    let props_type = cap
        .name("generics")
        .and_then(|g| g.as_str().rsplit(',').next())
        .map(str::trim)
        .filter(|ty| IDENTIFIER.is_match(ty));

    let replacement = match props_type {
        Some(ty) => format!("({props}: {ty}) =>"),
        None => format!("({props}) =>"),
    };

    Some((whole.start(), whole.end(), replacement))
}

/// Insert a `ref` field into the first `...Props` interface when it lacks one.
fn ensure_ref_field(source: &str) -> String {
    let Some(m) = PROPS_INTERFACE.find(source) else {
        return source.to_string();
    };

    let open_idx = m.end() - 1;
    let Some(close_idx) = matching_delimiter(source, open_idx, '{', '}') else {
        return source.to_string();
    };

    if REF_FIELD.is_match(&source[open_idx + 1..close_idx]) {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len() + 40);
    out.push_str(&source[..close_idx]);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("  ref?: React.Ref<HTMLElement>;\n");
    out.push_str(&source[close_idx..]);
    out
}

/// Index of the delimiter closing the one at `open_idx`, by plain character
/// balance. The rewrite is narrow enough that delimiters inside string
/// literals are not a practical concern.
fn matching_delimiter(text: &str, open_idx: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0_usize;

    for (i, c) in text[open_idx..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_idx + i);
            }
        }
    }

    None
}
