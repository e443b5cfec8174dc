//! Depth-first traversal and visitor dispatch over parse trees.

use std::collections::HashMap;

use crate::node::{for_each_node, Child, NodeRef, NodeTag};
use crate::proto;

/// Traverse a tree in depth-first pre-order.
///
/// Yields `(field_name, node)` pairs for every node encountered. The field
/// name is the one that led to the node on its parent (`"where_clause"`,
/// `"target_list"`, ...), or the empty string for the root. Union wrappers
/// never appear in the output, only concrete shapes.
///
/// # Example
///
/// ```no_run
/// use postgast::NodeTag;
///
/// let tree = postgast::parse("SELECT 1")?;
/// let tags: Vec<NodeTag> = postgast::walk(&tree).map(|(_, n)| n.tag()).collect();
/// assert_eq!(
///     tags,
///     [
///         NodeTag::ParseResult,
///         NodeTag::RawStmt,
///         NodeTag::SelectStmt,
///         NodeTag::ResTarget,
///         NodeTag::AConst,
///         NodeTag::Integer,
///     ],
/// );
/// # Ok::<(), postgast::Error>(())
/// ```
pub fn walk<'a, N>(root: N) -> Walk<'a>
where
    N: Into<NodeRef<'a>>,
{
    Walk {
        stack: vec![("", root.into())],
    }
}

/// Iterator returned by [`walk`].
///
/// Holds an explicit stack instead of recursing, so arbitrarily deep trees
/// cannot overflow the call stack. Restartable: building a fresh iterator
/// over the same tree yields the same sequence.
pub struct Walk<'a> {
    stack: Vec<Child<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Child<'a>;

    fn next(&mut self) -> Option<Child<'a>> {
        let (field, node) = self.stack.pop()?;
        let mut children = node.children();
        children.reverse();
        self.stack.extend(children);
        Some((field, node))
    }
}

/// Handler invoked for one node. Receives the caller state, the node, and
/// the dispatching visitor; call [`Visitor::generic_visit`] to continue into
/// the node's children, or skip it to prune the subtree.
pub type Handler<S> = for<'a> fn(&mut S, NodeRef<'a>, &Visitor<S>);

/// Table-driven visitor: handlers registered per [`NodeTag`], with unhandled
/// shapes falling through to a recursion into children.
///
/// Suited to dispatch decided at runtime. For a fixed set of handlers known
/// at compile time, implement [`Visit`] instead.
///
/// # Example
///
/// ```no_run
/// use postgast::{NodeRef, NodeTag, Visitor};
///
/// let tree = postgast::parse("SELECT a, b FROM t")?;
/// let counter = Visitor::new().on(NodeTag::ColumnRef, |count: &mut usize, _, _| *count += 1);
/// let mut count = 0;
/// counter.visit(&mut count, NodeRef::from(&tree));
/// assert_eq!(count, 2);
/// # Ok::<(), postgast::Error>(())
/// ```
pub struct Visitor<S> {
    handlers: HashMap<NodeTag, Handler<S>>,
}

impl<S> Visitor<S> {
    /// A visitor with no handlers; every node recurses into its children.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for nodes tagged `tag`, replacing any previous
    /// registration for that tag.
    pub fn on(mut self, tag: NodeTag, handler: Handler<S>) -> Self {
        self.handlers.insert(tag, handler);
        self
    }

    /// Dispatch `node` to its registered handler, or recurse into its
    /// children when none is registered.
    pub fn visit(&self, state: &mut S, node: NodeRef<'_>) {
        match self.handlers.get(&node.tag()) {
            Some(handler) => handler(state, node, self),
            None => self.generic_visit(state, node),
        }
    }

    /// Visit every child of `node`. Handlers call this to continue the
    /// traversal below the node they handled.
    pub fn generic_visit(&self, state: &mut S, node: NodeRef<'_>) {
        for (_, child) in node.children() {
            self.visit(state, child);
        }
    }
}

impl<S> Default for Visitor<S> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! declare_visit {
    ($(($variant:ident, $snake:ident, $visit:ident)),+ $(,)?) => {
        /// Statically dispatched visitor over concrete node shapes.
        ///
        /// Every `visit_*` method defaults to recursing into the node's
        /// children; override the ones you care about. An override prunes
        /// its subtree unless it calls [`Visit::generic_visit`] itself.
        ///
        /// # Example
        ///
        /// ```no_run
        /// use postgast::{proto, NodeRef, Visit};
        ///
        /// struct Tables(Vec<String>);
        ///
        /// impl Visit for Tables {
        ///     fn visit_range_var(&mut self, node: &proto::RangeVar) {
        ///         self.0.push(node.relname.clone());
        ///     }
        /// }
        ///
        /// let tree = postgast::parse("SELECT * FROM users")?;
        /// let mut tables = Tables(Vec::new());
        /// tables.visit(NodeRef::from(&tree));
        /// assert_eq!(tables.0, ["users"]);
        /// # Ok::<(), postgast::Error>(())
        /// ```
        pub trait Visit {
            /// Dispatch `node` to the method for its concrete shape.
            fn visit(&mut self, node: NodeRef<'_>) {
                match node {
                    NodeRef::Empty => {}
                    NodeRef::ParseResult(n) => self.visit_parse_result(n),
                    $(NodeRef::$variant(n) => self.$visit(n),)+
                }
            }

            /// Visit every child of `node`. Overrides call this to keep
            /// recursing below the node they handled.
            fn generic_visit(&mut self, node: NodeRef<'_>) {
                for (_, child) in node.children() {
                    self.visit(child);
                }
            }

            fn visit_parse_result(&mut self, node: &proto::ParseResult) {
                self.generic_visit(NodeRef::ParseResult(node));
            }

            $(
                fn $visit(&mut self, node: &proto::$variant) {
                    self.generic_visit(NodeRef::$variant(node));
                }
            )+
        }
    };
}
for_each_node!(declare_visit);
