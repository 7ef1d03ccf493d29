//! The lookup walk shared by `get` and `methods_for`.
//!
//! The walk consumes the concrete path against the tree with a fixed
//! candidate order at every node: a literal child whose fragment prefixes
//! the remaining path, then the parameter child (one non-empty segment),
//! then the catch-all child (the non-empty remainder, terminal). There is
//! no backtracking: a taken branch is committed.

use crate::node::Node;
use crate::types::Params;

/// A successful walk: the terminal node, every node the walk entered in
/// root-to-leaf order, and the captured parameter bindings.
pub(crate) struct Walk<'t, T> {
    pub(crate) node: &'t Node<T>,
    pub(crate) visited: Vec<&'t Node<T>>,
    pub(crate) params: Params,
}

/// Walks `path` from the root. `None` means the path matched no route;
/// bindings accumulated along a failed walk are dropped with it.
pub(crate) fn walk<'t, T>(
    root: &'t Node<T>,
    separator: char,
    path: &str,
) -> Option<Walk<'t, T>> {
    let mut sep_buf = [0u8; 4];
    let sep: &str = separator.encode_utf8(&mut sep_buf);
    if !path.starts_with(sep) {
        return None;
    }

    let mut node = root;
    let mut visited = vec![root];
    let mut params = Params::default();
    // the lone separator addresses the root route
    let mut rest = if path == sep { "" } else { path };

    loop {
        if rest.is_empty() {
            return Some(Walk {
                node,
                visited,
                params,
            });
        }

        if let Some(first) = rest.chars().next() {
            if let Some(child) = node.literal_child(first) {
                if let Some(tail) = rest.strip_prefix(child.fragment.as_str()) {
                    node = child;
                    visited.push(child);
                    rest = tail;
                    continue;
                }
            }
        }

        // dynamic children only apply at a segment boundary
        let Some(tail) = rest.strip_prefix(sep) else {
            return None;
        };
        if let Some(param) = node.param_child.as_deref() {
            let end = tail.find(separator).unwrap_or(tail.len());
            if end > 0 {
                params.insert(param.name.clone(), tail[..end].to_string());
                node = param;
                visited.push(param);
                rest = &tail[end..];
                continue;
            }
        }
        if let Some(catchall) = node.catchall_child.as_deref() {
            // a catch-all needs content; a bare trailing separator is a miss
            if !tail.is_empty() {
                params.insert(catchall.name.clone(), tail.to_string());
                visited.push(catchall);
                return Some(Walk {
                    node: catchall,
                    visited,
                    params,
                });
            }
        }
        return None;
    }
}
