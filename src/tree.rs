//! The public radix-tree container.
//!
//! [`RadixTree`] owns the root node and the two configurable special
//! characters. It is a single-owner structure: insertion takes `&mut self`,
//! lookups take `&self`, and there is no interior mutability, so a tree
//! behind a shared reference is safe to read from any number of threads.

use std::fmt;

use ahash::AHashSet;

use crate::error::TreeError;
use crate::node::Node;
use crate::operations::find::walk;
use crate::operations::insert::{place, validate};
use crate::segment;
use crate::types::{RouteMatch, TreeConfig};

/// The default parameter-introducing character.
pub const DEFAULT_VARIABLE: char = ':';
/// The default segment separator.
pub const DEFAULT_SEPARATOR: char = '/';

/// A radix tree mapping paths to per-method endpoints and middlewares.
///
/// Endpoints are bound uniquely per `(route, method)`; middlewares
/// accumulate per `(route, method)` and are inherited by every route below
/// their registration point. The endpoint and middleware values are opaque
/// to the tree.
#[derive(Clone)]
pub struct RadixTree<T> {
    root: Node<T>,
    variable: char,
    separator: char,
}

impl<T> Default for RadixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RadixTree<T> {
    /// Constructs an empty tree with the default `:` variable and `/`
    /// separator characters.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            variable: DEFAULT_VARIABLE,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Constructs an empty tree with custom special characters. `None`
    /// selects the default for that slot.
    ///
    /// Each character must be ASCII punctuation other than `*`, and the two
    /// must differ.
    pub fn with_config(
        variable: Option<char>,
        separator: Option<char>,
    ) -> Result<Self, TreeError> {
        let variable = variable.unwrap_or(DEFAULT_VARIABLE);
        let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
        check_config(variable, separator)?;
        Ok(Self {
            root: Node::root(),
            variable,
            separator,
        })
    }

    /// The character that introduces a parameter segment.
    pub fn variable(&self) -> char {
        self.variable
    }

    /// The character that separates segments.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> TreeConfig {
        TreeConfig {
            variable: self.variable,
            separator: self.separator,
        }
    }

    /// Whether the tree holds no routes, middlewares, or nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_unused()
    }

    /// Changes the variable character; `None` restores the default.
    ///
    /// Fails once any route or middleware has been inserted: the stored
    /// fragments are tokenized under the old characters and cannot be
    /// reinterpreted.
    pub fn set_variable(&mut self, variable: Option<char>) -> Result<(), TreeError> {
        self.ensure_unfrozen("variable")?;
        let variable = variable.unwrap_or(DEFAULT_VARIABLE);
        check_config(variable, self.separator)?;
        self.variable = variable;
        Ok(())
    }

    /// Changes the separator character; `None` restores the default.
    ///
    /// Same freezing rule as [`set_variable`](Self::set_variable).
    pub fn set_separator(&mut self, separator: Option<char>) -> Result<(), TreeError> {
        self.ensure_unfrozen("separator")?;
        let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
        check_config(self.variable, separator)?;
        self.separator = separator;
        Ok(())
    }

    fn ensure_unfrozen(&self, what: &str) -> Result<(), TreeError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(TreeError::InvalidConfig {
                reason: format!(
                    "cannot change the {what} character once the tree contains routes"
                ),
            })
        }
    }

    /// Resolves `path` for `method`.
    ///
    /// Walks the tree from the root, matching literal children first, then
    /// the parameter child, then the catch-all child, and collecting the
    /// middlewares registered for `method` at every node the walk enters.
    /// A committed branch is never revisited; lookups do not error.
    ///
    /// # Arguments
    /// * `path`: The concrete path to resolve (e.g. `/users/42`). It is
    ///   taken as-is: no trimming or normalization is applied.
    /// * `method`: The method label to resolve for, compared
    ///   case-sensitively.
    ///
    /// # Returns
    /// * [`RouteMatch::Found`] with the endpoint, the middlewares in
    ///   root-to-leaf order, and the captured parameters, when the terminal
    ///   node has an endpoint for `method`.
    /// * [`RouteMatch::MethodNotAllowed`] when the terminal node has
    ///   endpoints only for other methods.
    /// * [`RouteMatch::NotFound`] when no route matches, including the
    ///   middleware-only case: middlewares never make a route resolvable on
    ///   their own.
    pub fn get(&self, path: &str, method: &str) -> RouteMatch<'_, T> {
        let Some(found) = walk(&self.root, self.separator, path) else {
            return RouteMatch::NotFound;
        };
        let Some(endpoint) = found.node.endpoints.get(method) else {
            if found.node.has_endpoints() {
                return RouteMatch::MethodNotAllowed;
            }
            return RouteMatch::NotFound;
        };
        let mut middlewares = Vec::new();
        for node in &found.visited {
            if let Some(chain) = node.middlewares.get(method) {
                middlewares.extend(chain.iter());
            }
        }
        RouteMatch::Found {
            endpoint,
            middlewares,
            params: found.params,
        }
    }

    /// The methods for which an endpoint is registered at `path`.
    ///
    /// Performs the same walk as [`get`](Self::get), without a method.
    ///
    /// # Arguments
    /// * `path`: The concrete path to resolve, taken as-is.
    ///
    /// # Returns
    /// * The endpoint method labels of the matched route. Methods that only
    ///   carry middlewares there are not reported; an unmatched path yields
    ///   the empty set.
    pub fn methods_for(&self, path: &str) -> AHashSet<&str> {
        match walk(&self.root, self.separator, path) {
            Some(found) => found.node.endpoints.keys().map(String::as_str).collect(),
            None => AHashSet::default(),
        }
    }
}

impl<T: Clone> RadixTree<T> {
    /// Binds `endpoint` at `path` for each of `methods`.
    ///
    /// Walks the tree segment by segment, creating nodes and splitting
    /// literal edges as needed, and stores `endpoint` at the terminal node
    /// once per method. Validation runs before any node is touched, so a
    /// failed insert leaves the tree exactly as it was.
    ///
    /// # Arguments
    /// * `path`: The route pattern (e.g. `/users/:id`, `/static/*rest`).
    ///   Must start with the separator and must not end with it, except for
    ///   the root route.
    /// * `endpoint`: The value to bind. Cloned once per method.
    /// * `methods`: The method labels to bind under; must be non-empty.
    ///   Labels are opaque and compared case-sensitively.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * [`TreeError::InvalidPath`] on a malformed pattern,
    ///   [`TreeError::ConflictingParameter`] if a dynamic segment clashes
    ///   with an existing one or a name repeats within `path`,
    ///   [`TreeError::EndpointConflict`] if any of `methods` is already
    ///   bound at that route, and [`TreeError::NoMethods`] when `methods`
    ///   is empty.
    pub fn insert(&mut self, path: &str, endpoint: T, methods: &[&str]) -> Result<(), TreeError> {
        let segments = segment::parse(path, self.variable, self.separator)?;
        check_methods(path, methods)?;
        validate(&self.root, self.separator, path, &segments, methods, false)?;
        let node = place(&mut self.root, self.separator, &segments);
        for method in methods {
            node.endpoints.insert((*method).to_string(), endpoint.clone());
        }
        Ok(())
    }
}

impl<T: Clone + PartialEq> RadixTree<T> {
    /// Appends `middleware` to each method's chain at `path`.
    ///
    /// Middlewares never conflict with endpoints: the two live in separate
    /// per-method tables and coexist on a node. The route need not have an
    /// endpoint, but a middleware alone does not make it resolvable.
    ///
    /// # Arguments
    /// * `path`: The route pattern, as in [`insert`](Self::insert).
    /// * `middleware`: The value to append. A value already present in a
    ///   method's chain is not appended again.
    /// * `methods`: The method labels whose chains receive the middleware;
    ///   must be non-empty.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * [`TreeError::InvalidPath`], [`TreeError::ConflictingParameter`],
    ///   or [`TreeError::NoMethods`] as for [`insert`](Self::insert).
    ///   Middleware insertion never raises
    ///   [`TreeError::EndpointConflict`].
    pub fn insert_middleware(
        &mut self,
        path: &str,
        middleware: T,
        methods: &[&str],
    ) -> Result<(), TreeError> {
        let segments = segment::parse(path, self.variable, self.separator)?;
        check_methods(path, methods)?;
        validate(&self.root, self.separator, path, &segments, methods, true)?;
        let node = place(&mut self.root, self.separator, &segments);
        for method in methods {
            let chain = node.middlewares.entry((*method).to_string()).or_default();
            if !chain.contains(&middleware) {
                chain.push(middleware.clone());
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for RadixTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTree")
            .field("variable", &self.variable)
            .field("separator", &self.separator)
            .field("root", &self.root)
            .finish()
    }
}

fn check_methods(path: &str, methods: &[&str]) -> Result<(), TreeError> {
    if methods.is_empty() {
        return Err(TreeError::NoMethods {
            path: path.to_string(),
        });
    }
    Ok(())
}

fn check_config(variable: char, separator: char) -> Result<(), TreeError> {
    for (what, c) in [("variable", variable), ("separator", separator)] {
        if c == '*' {
            return Err(TreeError::InvalidConfig {
                reason: format!("the {what} character must not be '*'"),
            });
        }
        if !c.is_ascii_punctuation() {
            return Err(TreeError::InvalidConfig {
                reason: format!("the {what} character must be ASCII punctuation, got {c:?}"),
            });
        }
    }
    if variable == separator {
        return Err(TreeError::InvalidConfig {
            reason: "the variable and separator characters must differ".to_string(),
        });
    }
    Ok(())
}
