//! URL path token encoding for collection and chart addressing.
//!
//! A path token packs a UUID and a human-readable name into one URL-safe
//! segment: `"<id>-<slug>"`. Decoding splits on the UUID's fixed width
//! and returns `None` for anything structurally malformed; callers decide
//! the user-visible response.

use uuid::Uuid;

/// String length of a hyphenated UUID.
const UUID_LEN: usize = 36;

/// Decoded parts of a path token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    pub id: Uuid,
    /// The normalized (slugified) name segment. May be empty.
    pub name: String,
}

/// Normalize a name into URL-safe slug form.
///
/// Converts to lowercase, maps every character outside `[a-z0-9]` to a
/// hyphen, collapses consecutive hyphens, and trims leading/trailing
/// hyphens. Lossy: case and stripped characters are not recoverable.
pub fn slugify(name: &str) -> String {
    let mapped: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    // Collapse consecutive hyphens.
    let mut slug = String::with_capacity(mapped.len());
    let mut prev_hyphen = false;
    for c in mapped.chars() {
        if c == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(c);
            prev_hyphen = false;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Encode an id and name into a single URL path segment.
pub fn encode_path(id: Uuid, name: &str) -> String {
    format!("{id}-{}", slugify(name))
}

/// Decode a path token produced by [`encode_path`].
///
/// The first 36 characters must be a hyphenated UUID, followed by a `-`
/// separator; the remainder is the name. Returns `None` for any
/// structurally malformed token (too short, bad UUID, missing
/// separator). Never panics.
pub fn decode_path(token: &str) -> Option<PathParts> {
    if token.len() <= UUID_LEN || !token.is_char_boundary(UUID_LEN) {
        return None;
    }
    let (id_part, rest) = token.split_at(UUID_LEN);
    let name = rest.strip_prefix('-')?;
    let id = Uuid::try_parse(id_part).ok()?;
    Some(PathParts {
        id,
        name: name.to_string(),
    })
}
