//! The insert walk.
//!
//! Insertion runs in two passes over the parsed segments. [`validate`]
//! walks the existing tree read-only and surfaces every conflict the
//! insertion could hit; [`place`] then descends again, appending and
//! splitting nodes, and returns the terminal node for the caller to bind.
//! Because nothing is created until validation has passed, a failed insert
//! leaves the tree exactly as it was.

use crate::error::TreeError;
use crate::node::Node;
use crate::segment::Segment;

/// Checks an insertion against the current tree without mutating it.
///
/// Stops early as soon as the walk leaves existing structure: everything
/// below a fresh or about-to-be-split node is new and cannot conflict.
/// When the walk lands exactly on an existing node, endpoint insertions are
/// additionally checked for method collisions there.
pub(crate) fn validate<T>(
    root: &Node<T>,
    separator: char,
    path: &str,
    segments: &[Segment<'_>],
    methods: &[&str],
    middleware: bool,
) -> Result<(), TreeError> {
    let mut node = root;
    for segment in segments {
        match *segment {
            Segment::Parameter(name) => match node.param_child.as_deref() {
                Some(child) if child.name != name => {
                    return Err(conflicting(path, name, &child.name, "parameter"));
                }
                Some(child) => node = child,
                None => return Ok(()),
            },
            Segment::Catchall(name) => match node.catchall_child.as_deref() {
                Some(child) if child.name != name => {
                    return Err(conflicting(path, name, &child.name, "catch-all"));
                }
                Some(child) => node = child,
                None => return Ok(()),
            },
            Segment::Literal(text) => {
                let full = format!("{separator}{text}");
                let mut rest = full.as_str();
                while !rest.is_empty() {
                    let Some(first) = rest.chars().next() else {
                        break;
                    };
                    let Some(child) = node.literal_child(first) else {
                        return Ok(());
                    };
                    match rest.strip_prefix(child.fragment.as_str()) {
                        Some(tail) => {
                            node = child;
                            rest = tail;
                        }
                        // the edge will be split; the terminal is a new node
                        None => return Ok(()),
                    }
                }
            }
        }
    }

    if !middleware {
        for method in methods {
            if node.endpoints.contains_key(*method) {
                return Err(TreeError::EndpointConflict {
                    path: path.to_string(),
                    method: (*method).to_string(),
                });
            }
        }
    }
    Ok(())
}

fn conflicting(path: &str, name: &str, existing: &str, what: &str) -> TreeError {
    TreeError::ConflictingParameter {
        path: path.to_string(),
        name: name.to_string(),
        reason: format!("a {what} named {existing:?} is already registered at this position"),
    }
}

/// Descends from the root, creating nodes as needed, and returns the
/// terminal node for the segments. Must only run after [`validate`].
pub(crate) fn place<'t, T>(
    root: &'t mut Node<T>,
    separator: char,
    segments: &[Segment<'_>],
) -> &'t mut Node<T> {
    let mut node = root;
    for segment in segments {
        match *segment {
            Segment::Parameter(name) => {
                node = &mut **node
                    .param_child
                    .get_or_insert_with(|| Box::new(Node::parameter(name.to_string())));
            }
            Segment::Catchall(name) => {
                node = &mut **node
                    .catchall_child
                    .get_or_insert_with(|| Box::new(Node::catchall(name.to_string())));
            }
            Segment::Literal(text) => {
                let full = format!("{separator}{text}");
                node = place_literal(node, &full);
            }
        }
    }
    node
}

/// Places one segment's worth of literal text under `node`, splitting
/// existing edges at the longest common prefix where necessary.
fn place_literal<'t, T>(mut node: &'t mut Node<T>, mut text: &str) -> &'t mut Node<T> {
    loop {
        let Some(first) = text.chars().next() else {
            return node;
        };
        match node.literal_child_index(first) {
            None => return node.add_literal_child(Node::literal(text.to_string())),
            Some(i) => {
                let at = common_prefix(&node.literal_children[i].fragment, text);
                if at < node.literal_children[i].fragment.len() {
                    node.literal_children[i].split_fragment(at);
                }
                node = &mut *node.literal_children[i];
                if at == text.len() {
                    return node;
                }
                text = &text[at..];
            }
        }
    }
}

/// Byte length of the longest common prefix, kept on character boundaries.
fn common_prefix(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_prefix_stays_on_char_boundaries() {
        assert_eq!(common_prefix("/foo", "/foooo"), 4);
        assert_eq!(common_prefix("/ab", "/cd"), 1);
        assert_eq!(common_prefix("abc", "abc"), 3);
        assert_eq!(common_prefix("über", "übel"), 4);
        assert_eq!(common_prefix("x", "y"), 0);
    }

    #[test]
    fn place_splits_shared_prefixes() {
        let mut root: Node<&str> = Node::root();
        place(&mut root, '/', &[Segment::Literal("foo")]).endpoints
            .insert("GET".to_string(), "foo");
        place(&mut root, '/', &[Segment::Literal("bar")]).endpoints
            .insert("GET".to_string(), "bar");

        // "/foo" and "/bar" share the separator, so the root now holds a
        // one-character inner node with two children
        assert_eq!(root.indices, "/");
        let inner = &root.literal_children[0];
        assert_eq!(inner.fragment, "/");
        assert_eq!(inner.indices, "fb");
    }
}
