//! Tokenizes route patterns into segments.
//!
//! A pattern is trimmed of ASCII whitespace, checked against the tree's
//! separator and variable characters, and broken into [`Segment`]s. All
//! structural validation of a pattern happens here, before the tree is
//! touched.

use crate::error::TreeError;

/// One piece of a route pattern, between two separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'p> {
    /// Raw text, stored without its leading separator.
    Literal(&'p str),
    /// A single-segment binding, introduced by the variable character.
    Parameter(&'p str),
    /// A rest-of-path binding, introduced by `*`. Always last.
    Catchall(&'p str),
}

fn invalid(path: &str, reason: impl Into<String>) -> TreeError {
    TreeError::InvalidPath {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Parses a route pattern into segments.
///
/// The empty segment list is the root route (the pattern that is exactly one
/// separator). Parameter and catch-all names must be non-empty, free of
/// reserved characters, and unique within the pattern; a catch-all may only
/// close the pattern.
pub(crate) fn parse<'p>(
    path: &'p str,
    variable: char,
    separator: char,
) -> Result<Vec<Segment<'p>>, TreeError> {
    let trimmed = path.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(invalid(path, "path is empty or whitespace-only"));
    }

    let Some(rest) = trimmed.strip_prefix(separator) else {
        return Err(invalid(
            path,
            format!("path must start with the separator {separator:?}"),
        ));
    };
    if rest.is_empty() {
        // the root route
        return Ok(Vec::new());
    }
    if trimmed.ends_with(separator) {
        return Err(invalid(
            path,
            format!("path must not end with the separator {separator:?}"),
        ));
    }

    let raw: Vec<&str> = rest.split(separator).collect();
    let mut segments = Vec::with_capacity(raw.len());
    let mut names: Vec<&str> = Vec::new();

    for (i, piece) in raw.iter().copied().enumerate() {
        if piece.is_empty() {
            return Err(invalid(path, "path contains consecutive separators"));
        }

        if let Some(name) = piece.strip_prefix(variable) {
            check_name(path, variable, name, &mut names)?;
            segments.push(Segment::Parameter(name));
        } else if let Some(name) = piece.strip_prefix('*') {
            if i + 1 != raw.len() {
                return Err(invalid(path, "a catch-all must be the last segment"));
            }
            check_name(path, variable, name, &mut names)?;
            segments.push(Segment::Catchall(name));
        } else {
            if piece.contains(variable) || piece.contains('*') {
                return Err(invalid(
                    path,
                    format!(
                        "segment {piece:?} uses {variable:?} or '*' past the first character"
                    ),
                ));
            }
            segments.push(Segment::Literal(piece));
        }
    }

    Ok(segments)
}

fn check_name<'p>(
    path: &str,
    variable: char,
    name: &'p str,
    names: &mut Vec<&'p str>,
) -> Result<(), TreeError> {
    if name.is_empty() {
        return Err(invalid(path, "parameter and catch-all names must not be empty"));
    }
    if name.contains(variable) || name.contains('*') {
        return Err(invalid(
            path,
            format!("name {name:?} contains a reserved character"),
        ));
    }
    if names.contains(&name) {
        return Err(TreeError::ConflictingParameter {
            path: path.to_string(),
            name: name.to_string(),
            reason: "the name is already used earlier in this path".to_string(),
        });
    }
    names.push(name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(path: &str) -> Result<Vec<Segment<'_>>, TreeError> {
        parse(path, ':', '/')
    }

    #[test]
    fn parses_literals_and_parameters() {
        assert_eq!(
            parse_default("/foo/:bar").unwrap(),
            vec![Segment::Literal("foo"), Segment::Parameter("bar")]
        );
        assert_eq!(
            parse_default("/static/*rest").unwrap(),
            vec![Segment::Literal("static"), Segment::Catchall("rest")]
        );
        assert_eq!(parse_default("/").unwrap(), Vec::new());
    }

    #[test]
    fn trims_ascii_whitespace() {
        assert_eq!(
            parse_default("  /foo  ").unwrap(),
            vec![Segment::Literal("foo")]
        );
    }

    #[test]
    fn honors_custom_characters() {
        assert_eq!(
            parse(".foo.$bar", '$', '.').unwrap(),
            vec![Segment::Literal("foo"), Segment::Parameter("bar")]
        );
        assert_eq!(
            parse("|hello|.bar", '.', '|').unwrap(),
            vec![Segment::Literal("hello"), Segment::Parameter("bar")]
        );
    }

    #[test]
    fn rejects_malformed_paths() {
        for path in ["", "   ", "foo", "   foo   ", "f/oo/", "/foo/", "/a//b", "//"] {
            assert!(
                matches!(parse_default(path), Err(TreeError::InvalidPath { .. })),
                "expected InvalidPath for {path:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_names_and_placement() {
        for path in ["/:", "/*", "/foo/:", "/*a/b", "/a:b", "/a*b", "/:a:b"] {
            assert!(
                matches!(parse_default(path), Err(TreeError::InvalidPath { .. })),
                "expected InvalidPath for {path:?}"
            );
        }
    }

    #[test]
    fn rejects_repeated_names() {
        for path in ["/a/:x/:x", "/a/:x/b/:x", "/a/:x/b/*x"] {
            assert!(
                matches!(
                    parse_default(path),
                    Err(TreeError::ConflictingParameter { .. })
                ),
                "expected ConflictingParameter for {path:?}"
            );
        }
    }
}
