//! Convenience extraction over parse trees.

use crate::node::{NodeRef, NodeTag};
use crate::proto;
use crate::walk::walk;

/// All nodes tagged `tag`, in depth-first pre-order.
pub fn find_nodes<'a, N>(root: N, tag: NodeTag) -> impl Iterator<Item = NodeRef<'a>>
where
    N: Into<NodeRef<'a>>,
{
    walk(root).map(|(_, node)| node).filter(move |node| node.tag() == tag)
}

/// Table names referenced in a tree, dot-qualified with their schema when
/// one is written (`"public.users"`, `"users"`).
///
/// Encounter order, duplicates included. Collect into a set for uniques.
pub fn extract_tables<'a, N>(root: N) -> Vec<String>
where
    N: Into<NodeRef<'a>>,
{
    find_nodes(root, NodeTag::RangeVar)
        .filter_map(|node| match node {
            NodeRef::RangeVar(rv) => Some(rv),
            _ => None,
        })
        .map(|rv| {
            if rv.schemaname.is_empty() {
                rv.relname.clone()
            } else {
                format!("{}.{}", rv.schemaname, rv.relname)
            }
        })
        .collect()
}

/// Column references found in a tree, as dot-joined strings.
///
/// `SELECT *` produces `"*"`; `t.*` produces `"t.*"`. Encounter order,
/// duplicates included.
pub fn extract_columns<'a, N>(root: N) -> Vec<String>
where
    N: Into<NodeRef<'a>>,
{
    find_nodes(root, NodeTag::ColumnRef)
        .filter_map(|node| match node {
            NodeRef::ColumnRef(cr) => Some(cr),
            _ => None,
        })
        .map(|cr| dotted(&cr.fields, true))
        .collect()
}

/// Function call names found in a tree, dot-qualified with their schema
/// when one is written. Encounter order, duplicates included.
pub fn extract_functions<'a, N>(root: N) -> Vec<String>
where
    N: Into<NodeRef<'a>>,
{
    find_nodes(root, NodeTag::FuncCall)
        .filter_map(|node| match node {
            NodeRef::FuncCall(fc) => Some(fc),
            _ => None,
        })
        .map(|fc| dotted(&fc.funcname, false))
        .collect()
}

fn dotted(parts: &[proto::Node], stars: bool) -> String {
    let mut joined = Vec::with_capacity(parts.len());
    for part in parts {
        match NodeRef::from_node(part) {
            NodeRef::String(s) => joined.push(s.sval.as_str()),
            NodeRef::AStar(_) if stars => joined.push("*"),
            _ => {}
        }
    }
    joined.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::testutil::{select_one, select_with_table};
    use crate::proto::*;

    fn string_node(value: &str) -> Node {
        Node {
            node: Some(node::Node::String(Box::new(String { sval: value.into() }))),
        }
    }

    #[test]
    fn test_find_nodes_matches_in_pre_order() {
        let tree = select_with_table();
        let columns: Vec<_> = find_nodes(&tree, NodeTag::ColumnRef).collect();
        assert_eq!(columns.len(), 2);
        assert!(find_nodes(&tree, NodeTag::JoinExpr).next().is_none());
    }

    #[test]
    fn test_extract_tables_includes_alias_carrying_range_vars() {
        let tree = select_with_table();
        assert_eq!(extract_tables(&tree), ["users"]);
        assert!(extract_tables(&select_one()).is_empty());
    }

    #[test]
    fn test_extract_tables_qualifies_schema() {
        let range_var = RangeVar {
            catalogname: Default::default(),
            schemaname: "public".into(),
            relname: "users".into(),
            inh: true,
            relpersistence: "p".into(),
            alias: None,
            location: 0,
        };
        assert_eq!(extract_tables(&range_var), ["public.users"]);
    }

    #[test]
    fn test_extract_columns_joins_parts_and_renders_stars() {
        let tree = select_with_table();
        assert_eq!(extract_columns(&tree), ["u.name", "u.id"]);

        let star = ColumnRef {
            fields: vec![
                string_node("t"),
                Node {
                    node: Some(node::Node::AStar(Box::new(AStar {}))),
                },
            ],
            location: 0,
        };
        assert_eq!(extract_columns(&star), ["t.*"]);
    }

    #[test]
    fn test_extract_functions_joins_qualified_names() {
        let call = FuncCall {
            funcname: vec![string_node("pg_catalog"), string_node("count")],
            ..Default::default()
        };
        assert_eq!(extract_functions(&call), ["pg_catalog.count"]);
    }
}
