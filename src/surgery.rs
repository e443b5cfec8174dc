//! Statement rewrites: derive a `DROP` from a `CREATE`, force `OR REPLACE`.
//!
//! These work entirely on the tree. Identity-relevant fields are copied into
//! a fresh statement and everything else is left behind; all text rendering
//! (quoting, type-name normalization) is deferred to [`deparse`], so this
//! module never formats SQL itself.

use crate::error::{Error, Result};
use crate::node::NodeRef;
use crate::proto::{
    self, node::Node as Inner, DropBehavior, FunctionParameterMode, Node, ObjectType, ParseResult,
    RawStmt,
};
use crate::{deparse, parse};

/// Rewrite a single `CREATE` statement into the `DROP` that undoes it.
///
/// Supports functions, procedures, triggers, views, materialized views,
/// tables (including `CREATE TABLE AS`), indexes, sequences, schemas, and
/// types. For functions and procedures the generated signature keeps input
/// parameter types in order and drops `OUT` parameters, parameter names,
/// and defaults.
///
/// Fails with [`Error::Domain`] when the input holds zero or more than one
/// statement, or the statement is not a supported `CREATE` shape.
///
/// # Example
///
/// ```no_run
/// let sql = "CREATE FUNCTION public.add(a integer, b integer) RETURNS integer
///            LANGUAGE sql AS $$ SELECT a + b $$";
/// assert_eq!(postgast::to_drop(sql)?, "DROP FUNCTION public.add(int, int)");
/// # Ok::<(), postgast::Error>(())
/// ```
pub fn to_drop(sql: &str) -> Result<String> {
    let tree = parse(sql)?;
    deparse(&to_drop_tree(&tree)?)
}

/// Tree-level form of [`to_drop`]: build the `DROP` statement tree without
/// deparsing it.
pub fn to_drop_tree(tree: &ParseResult) -> Result<ParseResult> {
    if tree.stmts.len() != 1 {
        return Err(Error::domain(format!(
            "expected exactly one statement, found {}",
            tree.stmts.len()
        )));
    }
    let stmt = tree.stmts[0]
        .stmt
        .as_deref()
        .ok_or_else(|| Error::domain("expected exactly one statement, found 0"))?;
    let drop = drop_for(stmt)?;
    Ok(ParseResult {
        version: tree.version,
        stmts: vec![RawStmt {
            stmt: Some(Box::new(wrap(Inner::DropStmt(Box::new(drop))))),
            stmt_location: 0,
            stmt_len: 0,
        }],
    })
}

/// Set the `OR REPLACE` flag on every top-level statement that supports it
/// (functions, procedures, views, triggers). Returns how many statements
/// were eligible.
pub fn set_or_replace(tree: &mut ParseResult) -> usize {
    let mut eligible = 0;
    for raw in &mut tree.stmts {
        let Some(stmt) = raw.stmt.as_deref_mut() else {
            continue;
        };
        match &mut stmt.node {
            Some(Inner::CreateFunctionStmt(n)) => {
                n.replace = true;
                eligible += 1;
            }
            Some(Inner::ViewStmt(n)) => {
                n.replace = true;
                eligible += 1;
            }
            Some(Inner::CreateTrigStmt(n)) => {
                n.replace = true;
                eligible += 1;
            }
            _ => {}
        }
    }
    eligible
}

/// Parse `sql`, run [`set_or_replace`] over it, and deparse the result.
/// Accepts multi-statement input; statements that do not support
/// `OR REPLACE` pass through unchanged.
pub fn ensure_or_replace(sql: &str) -> Result<String> {
    let mut tree = parse(sql)?;
    set_or_replace(&mut tree);
    deparse(&tree)
}

fn drop_for(stmt: &Node) -> Result<proto::DropStmt> {
    let resolved = NodeRef::from_node(stmt);
    let (remove_type, objects) = match resolved {
        NodeRef::CreateFunctionStmt(n) => {
            let remove_type = if n.is_procedure {
                ObjectType::ObjectProcedure
            } else {
                ObjectType::ObjectFunction
            };
            let with_args = proto::ObjectWithArgs {
                objname: n.funcname.clone(),
                objargs: signature_types(&n.parameters),
                objfuncargs: vec![],
                args_unspecified: false,
            };
            (
                remove_type,
                vec![wrap(Inner::ObjectWithArgs(Box::new(with_args)))],
            )
        }
        NodeRef::CreateTrigStmt(n) => {
            let relation = n
                .relation
                .as_ref()
                .ok_or_else(|| Error::domain("trigger statement has no relation"))?;
            let mut parts = qualified_parts(relation);
            parts.push(string_node(&n.trigname));
            (ObjectType::ObjectTrigger, vec![list_node(parts)])
        }
        NodeRef::ViewStmt(n) => {
            let view = n
                .view
                .as_ref()
                .ok_or_else(|| Error::domain("view statement has no target relation"))?;
            (ObjectType::ObjectView, vec![list_node(qualified_parts(view))])
        }
        NodeRef::CreateTableAsStmt(n) => {
            let rel = n
                .into
                .as_deref()
                .and_then(|into| into.rel.as_ref())
                .ok_or_else(|| Error::domain("CREATE TABLE AS has no target relation"))?;
            let remove_type = match ObjectType::try_from(n.objtype) {
                Ok(ObjectType::ObjectMatview) => ObjectType::ObjectMatview,
                _ => ObjectType::ObjectTable,
            };
            (remove_type, vec![list_node(qualified_parts(rel))])
        }
        NodeRef::CreateStmt(n) => {
            let relation = n
                .relation
                .as_ref()
                .ok_or_else(|| Error::domain("table statement has no relation"))?;
            (
                ObjectType::ObjectTable,
                vec![list_node(qualified_parts(relation))],
            )
        }
        NodeRef::IndexStmt(n) => {
            // Indexes live in the schema of their table.
            let mut parts = Vec::new();
            if let Some(relation) = &n.relation {
                if !relation.schemaname.is_empty() {
                    parts.push(string_node(&relation.schemaname));
                }
            }
            parts.push(string_node(&n.idxname));
            (ObjectType::ObjectIndex, vec![list_node(parts)])
        }
        NodeRef::CreateSeqStmt(n) => {
            let sequence = n
                .sequence
                .as_ref()
                .ok_or_else(|| Error::domain("sequence statement has no name"))?;
            (
                ObjectType::ObjectSequence,
                vec![list_node(qualified_parts(sequence))],
            )
        }
        NodeRef::CreateSchemaStmt(n) => {
            (ObjectType::ObjectSchema, vec![string_node(&n.schemaname)])
        }
        NodeRef::CreateEnumStmt(n) => {
            (ObjectType::ObjectType, vec![type_name_node(n.type_name.clone())])
        }
        NodeRef::CreateRangeStmt(n) => {
            (ObjectType::ObjectType, vec![type_name_node(n.type_name.clone())])
        }
        NodeRef::CompositeTypeStmt(n) => {
            let typevar = n
                .typevar
                .as_ref()
                .ok_or_else(|| Error::domain("composite type statement has no name"))?;
            (
                ObjectType::ObjectType,
                vec![type_name_node(qualified_parts(typevar))],
            )
        }
        other => {
            return Err(Error::domain(format!(
                "unsupported statement type: {:?}",
                other.tag()
            )));
        }
    };
    Ok(proto::DropStmt {
        objects,
        remove_type: remove_type as i32,
        behavior: DropBehavior::DropRestrict as i32,
        missing_ok: false,
        concurrent: false,
    })
}

/// Signature types for a `DROP FUNCTION`/`DROP PROCEDURE`: input parameter
/// types in declaration order. `OUT` and `TABLE` parameters do not take
/// part in the signature; names and defaults are left behind by copying
/// only the type.
fn signature_types(parameters: &[Node]) -> Vec<Node> {
    use FunctionParameterMode as Mode;
    let mut types = Vec::new();
    for parameter in parameters {
        let NodeRef::FunctionParameter(param) = NodeRef::from_node(parameter) else {
            continue;
        };
        let included = matches!(
            Mode::try_from(param.mode),
            Ok(Mode::FuncParamIn
                | Mode::FuncParamInout
                | Mode::FuncParamVariadic
                | Mode::FuncParamDefault)
        );
        if included {
            if let Some(arg_type) = &param.arg_type {
                types.push(wrap(Inner::TypeName(Box::new(arg_type.clone()))));
            }
        }
    }
    types
}

fn qualified_parts(relation: &proto::RangeVar) -> Vec<Node> {
    let mut parts = Vec::new();
    if !relation.schemaname.is_empty() {
        parts.push(string_node(&relation.schemaname));
    }
    parts.push(string_node(&relation.relname));
    parts
}

fn wrap(inner: Inner) -> Node {
    Node { node: Some(inner) }
}

fn string_node(value: &str) -> Node {
    wrap(Inner::String(Box::new(proto::String { sval: value.into() })))
}

fn list_node(items: Vec<Node>) -> Node {
    wrap(Inner::List(Box::new(proto::List { items })))
}

fn type_name_node(names: Vec<Node>) -> Node {
    wrap(Inner::TypeName(Box::new(proto::TypeName {
        names,
        type_oid: 0,
        setof: false,
        pct_type: false,
        typmods: vec![],
        typemod: -1,
        array_bounds: vec![],
        location: -1,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::testutil::select_one;
    use crate::node::NodeTag;

    fn tree_of(inner: Inner) -> ParseResult {
        ParseResult {
            version: 170004,
            stmts: vec![RawStmt {
                stmt: Some(Box::new(wrap(inner))),
                stmt_location: 0,
                stmt_len: 0,
            }],
        }
    }

    fn parameter(name: &str, type_parts: &[&str], mode: FunctionParameterMode) -> Node {
        wrap(Inner::FunctionParameter(Box::new(proto::FunctionParameter {
            name: name.into(),
            arg_type: Some(proto::TypeName {
                names: type_parts.iter().map(|p| string_node(p)).collect::<Vec<_>>(),
                type_oid: 0,
                setof: false,
                pct_type: false,
                typmods: vec![],
                typemod: -1,
                array_bounds: vec![],
                location: -1,
            }),
            mode: mode as i32,
            defexpr: None,
        })))
    }

    fn drop_of(tree: &ParseResult) -> proto::DropStmt {
        let rewritten = to_drop_tree(tree).unwrap();
        let stmt = rewritten.stmts[0].stmt.as_deref().unwrap();
        match NodeRef::from_node(stmt) {
            NodeRef::DropStmt(d) => d.clone(),
            other => panic!("expected DropStmt, got {:?}", other.tag()),
        }
    }

    #[test]
    fn test_function_drop_keeps_input_types_and_sheds_out_params() {
        let create = proto::CreateFunctionStmt {
            is_procedure: false,
            replace: false,
            funcname: vec![string_node("public"), string_node("get_pair")],
            parameters: vec![
                parameter("x", &["pg_catalog", "int4"], FunctionParameterMode::FuncParamIn),
                parameter("a", &["pg_catalog", "int4"], FunctionParameterMode::FuncParamOut),
                parameter("b", &["pg_catalog", "int4"], FunctionParameterMode::FuncParamOut),
            ],
            return_type: None,
            options: vec![],
            sql_body: None,
        };
        let drop = drop_of(&tree_of(Inner::CreateFunctionStmt(Box::new(create))));
        assert_eq!(drop.remove_type, ObjectType::ObjectFunction as i32);

        let NodeRef::ObjectWithArgs(with_args) = NodeRef::from_node(&drop.objects[0]) else {
            panic!("expected ObjectWithArgs");
        };
        assert_eq!(with_args.objname.len(), 2);
        // The two OUT parameters are not part of the signature.
        assert_eq!(with_args.objargs.len(), 1);
        assert_eq!(
            NodeRef::from_node(&with_args.objargs[0]).tag(),
            NodeTag::TypeName
        );
    }

    #[test]
    fn test_unmarked_parameters_count_as_inputs() {
        let create = proto::CreateFunctionStmt {
            is_procedure: false,
            replace: false,
            funcname: vec![string_node("add")],
            parameters: vec![
                parameter("a", &["pg_catalog", "int4"], FunctionParameterMode::FuncParamDefault),
                parameter("b", &["pg_catalog", "int4"], FunctionParameterMode::FuncParamDefault),
            ],
            return_type: None,
            options: vec![],
            sql_body: None,
        };
        let drop = drop_of(&tree_of(Inner::CreateFunctionStmt(Box::new(create))));
        let NodeRef::ObjectWithArgs(with_args) = NodeRef::from_node(&drop.objects[0]) else {
            panic!("expected ObjectWithArgs");
        };
        assert_eq!(with_args.objargs.len(), 2);
    }

    #[test]
    fn test_procedure_maps_to_drop_procedure() {
        let create = proto::CreateFunctionStmt {
            is_procedure: true,
            replace: false,
            funcname: vec![string_node("do_thing")],
            parameters: vec![],
            return_type: None,
            options: vec![],
            sql_body: None,
        };
        let drop = drop_of(&tree_of(Inner::CreateFunctionStmt(Box::new(create))));
        assert_eq!(drop.remove_type, ObjectType::ObjectProcedure as i32);
    }

    #[test]
    fn test_trigger_drop_names_relation_then_trigger() {
        let create = proto::CreateTrigStmt {
            trigname: "my_trg".into(),
            relation: Some(proto::RangeVar {
                catalogname: Default::default(),
                schemaname: "public".into(),
                relname: "t".into(),
                inh: true,
                relpersistence: "p".into(),
                alias: None,
                location: 0,
            }),
            ..Default::default()
        };
        let drop = drop_of(&tree_of(Inner::CreateTrigStmt(Box::new(create))));
        assert_eq!(drop.remove_type, ObjectType::ObjectTrigger as i32);

        let NodeRef::List(parts) = NodeRef::from_node(&drop.objects[0]) else {
            panic!("expected List");
        };
        let names: Vec<_> = parts
            .items
            .iter()
            .map(|n| match NodeRef::from_node(n) {
                NodeRef::String(s) => s.sval.clone(),
                other => panic!("expected String, got {:?}", other.tag()),
            })
            .collect();
        assert_eq!(names, ["public", "t", "my_trg"]);
    }

    #[test]
    fn test_index_drop_takes_schema_from_table() {
        let create = proto::IndexStmt {
            idxname: "my_idx".into(),
            relation: Some(proto::RangeVar {
                catalogname: Default::default(),
                schemaname: "public".into(),
                relname: "t".into(),
                inh: true,
                relpersistence: "p".into(),
                alias: None,
                location: 0,
            }),
            ..Default::default()
        };
        let drop = drop_of(&tree_of(Inner::IndexStmt(Box::new(create))));
        assert_eq!(drop.remove_type, ObjectType::ObjectIndex as i32);

        let NodeRef::List(parts) = NodeRef::from_node(&drop.objects[0]) else {
            panic!("expected List");
        };
        assert_eq!(parts.items.len(), 2);
    }

    #[test]
    fn test_schema_drop_uses_bare_string_object() {
        let create = proto::CreateSchemaStmt {
            schemaname: "myschema".into(),
            authrole: None,
            schema_elts: vec![],
            if_not_exists: false,
        };
        let drop = drop_of(&tree_of(Inner::CreateSchemaStmt(Box::new(create))));
        assert_eq!(drop.remove_type, ObjectType::ObjectSchema as i32);
        assert_eq!(NodeRef::from_node(&drop.objects[0]).tag(), NodeTag::String);
    }

    #[test]
    fn test_enum_type_drop_builds_a_type_name() {
        let create = proto::CreateEnumStmt {
            type_name: vec![string_node("public"), string_node("status")],
            vals: vec![string_node("active")],
        };
        let drop = drop_of(&tree_of(Inner::CreateEnumStmt(Box::new(create))));
        assert_eq!(drop.remove_type, ObjectType::ObjectType as i32);
        assert_eq!(NodeRef::from_node(&drop.objects[0]).tag(), NodeTag::TypeName);
    }

    #[test]
    fn test_materialized_view_objtype_is_honored() {
        let create = proto::CreateTableAsStmt {
            query: None,
            into: Some(Box::new(proto::IntoClause {
                rel: Some(proto::RangeVar {
                    catalogname: Default::default(),
                    schemaname: Default::default(),
                    relname: "mv".into(),
                    inh: true,
                    relpersistence: "p".into(),
                    alias: None,
                    location: 0,
                }),
                ..Default::default()
            })),
            objtype: ObjectType::ObjectMatview as i32,
            is_select_into: false,
            if_not_exists: false,
        };
        let drop = drop_of(&tree_of(Inner::CreateTableAsStmt(Box::new(create))));
        assert_eq!(drop.remove_type, ObjectType::ObjectMatview as i32);
    }

    #[test]
    fn test_unsupported_statement_is_a_domain_error() {
        let err = to_drop_tree(&select_one()).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
        assert!(err.to_string().contains("unsupported statement type"));
    }

    #[test]
    fn test_statement_count_is_enforced() {
        let mut two = select_one();
        two.stmts.extend(select_one().stmts);
        let err = to_drop_tree(&two).unwrap_err();
        assert!(err.to_string().contains("expected exactly one statement"));

        let none = ParseResult {
            version: 170004,
            stmts: vec![],
        };
        let err = to_drop_tree(&none).unwrap_err();
        assert!(err.to_string().contains("expected exactly one statement"));
    }

    #[test]
    fn test_set_or_replace_flags_eligible_statements() {
        let view = proto::ViewStmt {
            view: Some(proto::RangeVar {
                catalogname: Default::default(),
                schemaname: Default::default(),
                relname: "v".into(),
                inh: true,
                relpersistence: "p".into(),
                alias: None,
                location: 0,
            }),
            aliases: vec![],
            query: None,
            replace: false,
            options: vec![],
            with_check_option: 0,
        };
        let mut tree = tree_of(Inner::ViewStmt(Box::new(view)));
        tree.stmts.extend(select_one().stmts);

        assert_eq!(set_or_replace(&mut tree), 1);
        let stmt = tree.stmts[0].stmt.as_deref().unwrap();
        let NodeRef::ViewStmt(rewritten) = NodeRef::from_node(stmt) else {
            panic!("expected ViewStmt");
        };
        assert!(rewritten.replace);
    }
}
