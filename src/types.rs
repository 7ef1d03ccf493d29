//! Public auxiliary types: the lookup result, parameter bindings, and the
//! configuration snapshot.

use ahash::AHashMap;

/// Parameter bindings extracted from a matched path.
///
/// Keys are the names declared in the route pattern (e.g. `id` for `/:id`),
/// values are the substrings captured from the concrete path.
pub type Params = AHashMap<String, String>;

/// A snapshot of a tree's configured special characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// The character that introduces a parameter segment.
    pub variable: char,
    /// The character that separates segments.
    pub separator: char,
}

/// The outcome of [`RadixTree::get`](crate::tree::RadixTree::get).
///
/// The three variants are mutually distinguishable by construction:
/// a route with an endpoint for the requested method, a route whose
/// endpoints all belong to other methods, and no route at all. Middlewares
/// and parameters are only ever delivered together with an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch<'t, T> {
    /// The path matched a route with an endpoint for the requested method.
    Found {
        /// The endpoint bound to `(route, method)`.
        endpoint: &'t T,
        /// Middlewares registered for the method along the walk, outermost
        /// first.
        middlewares: Vec<&'t T>,
        /// Parameter and catch-all bindings captured from the path.
        params: Params,
    },
    /// The path matched a route, but no endpoint is bound for the requested
    /// method. The method-not-allowed marker.
    MethodNotAllowed,
    /// The path matched no route.
    NotFound,
}

impl<'t, T> RouteMatch<'t, T> {
    /// The matched endpoint, if any.
    pub fn endpoint(&self) -> Option<&'t T> {
        match self {
            RouteMatch::Found { endpoint, .. } => Some(*endpoint),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteMatch::Found { .. })
    }

    pub fn is_method_not_allowed(&self) -> bool {
        matches!(self, RouteMatch::MethodNotAllowed)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteMatch::NotFound)
    }
}
