//! Identifier normalization for user-entered collection labels.
//!
//! Every generated artifact derives its identifiers from the same two forms:
//! a capitalized compound (`Blog_Post` -> `BlogPost`) and a lower camel
//! compound (`Blog_Post` -> `blogPost`).

/// Convert a label to a capitalized compound (e.g., "blog_post" -> "BlogPost").
///
/// Segments are split on underscores and whitespace. Each segment gets an
/// upper-cased first letter and a lower-cased remainder, and the segments are
/// joined without a separator, so inner capitals of a single segment are
/// folded (`BlogPost` -> `Blogpost`, `URL` -> `Url`).
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a label to a lower camel compound (e.g., "Blog_Post" -> "blogPost").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Path segment a collection is mounted under (e.g., "Blog_Post" -> "blogPosts").
///
/// The plural is a verbatim trailing `s`; irregular plurals are not handled.
pub fn route_segment(s: &str) -> String {
    format!("{}s", to_camel_case(s))
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
