//! Typed facade over the raw `Node` tagged union.
//!
//! Consumers never see a `Node` wrapper: [`NodeRef::from_node`] resolves the
//! populated oneof variant to a borrowed facade, and a slot with no variant
//! set resolves to the explicit [`NodeRef::Empty`] sentinel rather than an
//! error. Dispatch from tag to behavior is a `match` on [`NodeTag`] — a
//! constant-time jump the compiler keeps exhaustiveness-checked as shapes
//! are added to the one shared variant list below.

use crate::proto;

/// The single source of truth for the concrete node shapes this crate
/// models. Invokes `$callback` with `(VariantName, snake_name, visit_name)`
/// triples; `node.rs` expands it into the facade and tag enums, `walk.rs`
/// into the typed visitor trait.
macro_rules! for_each_node {
    ($callback:ident) => {
        $callback! {
            (Alias, alias, visit_alias),
            (RangeVar, range_var, visit_range_var),
            (IntoClause, into_clause, visit_into_clause),
            (BoolExpr, bool_expr, visit_bool_expr),
            (SubLink, sub_link, visit_sub_link),
            (CaseExpr, case_expr, visit_case_expr),
            (CaseWhen, case_when, visit_case_when),
            (NullTest, null_test, visit_null_test),
            (BooleanTest, boolean_test, visit_boolean_test),
            (JoinExpr, join_expr, visit_join_expr),
            (TypeName, type_name, visit_type_name),
            (ColumnRef, column_ref, visit_column_ref),
            (ParamRef, param_ref, visit_param_ref),
            (AExpr, a_expr, visit_a_expr),
            (TypeCast, type_cast, visit_type_cast),
            (RoleSpec, role_spec, visit_role_spec),
            (FuncCall, func_call, visit_func_call),
            (AStar, a_star, visit_a_star),
            (AArrayExpr, a_array_expr, visit_a_array_expr),
            (ResTarget, res_target, visit_res_target),
            (SortBy, sort_by, visit_sort_by),
            (WindowDef, window_def, visit_window_def),
            (RangeSubselect, range_subselect, visit_range_subselect),
            (RangeFunction, range_function, visit_range_function),
            (ColumnDef, column_def, visit_column_def),
            (IndexElem, index_elem, visit_index_elem),
            (DefElem, def_elem, visit_def_elem),
            (WithClause, with_clause, visit_with_clause),
            (CommonTableExpr, common_table_expr, visit_common_table_expr),
            (RawStmt, raw_stmt, visit_raw_stmt),
            (InsertStmt, insert_stmt, visit_insert_stmt),
            (DeleteStmt, delete_stmt, visit_delete_stmt),
            (UpdateStmt, update_stmt, visit_update_stmt),
            (SelectStmt, select_stmt, visit_select_stmt),
            (CreateSchemaStmt, create_schema_stmt, visit_create_schema_stmt),
            (ObjectWithArgs, object_with_args, visit_object_with_args),
            (CreateStmt, create_stmt, visit_create_stmt),
            (CreateTrigStmt, create_trig_stmt, visit_create_trig_stmt),
            (CreateSeqStmt, create_seq_stmt, visit_create_seq_stmt),
            (DropStmt, drop_stmt, visit_drop_stmt),
            (IndexStmt, index_stmt, visit_index_stmt),
            (CreateFunctionStmt, create_function_stmt, visit_create_function_stmt),
            (FunctionParameter, function_parameter, visit_function_parameter),
            (CompositeTypeStmt, composite_type_stmt, visit_composite_type_stmt),
            (CreateEnumStmt, create_enum_stmt, visit_create_enum_stmt),
            (CreateRangeStmt, create_range_stmt, visit_create_range_stmt),
            (ViewStmt, view_stmt, visit_view_stmt),
            (CreateTableAsStmt, create_table_as_stmt, visit_create_table_as_stmt),
            (Integer, integer, visit_integer),
            (Float, float, visit_float),
            (Boolean, boolean, visit_boolean),
            (String, string, visit_string),
            (BitString, bit_string, visit_bit_string),
            (List, list, visit_list),
            (IntList, int_list, visit_int_list),
            (OidList, oid_list, visit_oid_list),
            (AConst, a_const, visit_a_const),
        }
    };
}
pub(crate) use for_each_node;

macro_rules! declare_facade {
    ($(($variant:ident, $snake:ident, $visit:ident)),+ $(,)?) => {
        /// Borrowed facade over one concrete node shape.
        ///
        /// `ParseResult` appears here so a whole tree can be walked from its
        /// root; `Empty` is the sentinel for a union slot with no variant
        /// set. Equality is structural equality of the underlying message.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum NodeRef<'a> {
            /// A union slot with no variant populated.
            Empty,
            /// The root message of a parsed query.
            ParseResult(&'a proto::ParseResult),
            $($variant(&'a proto::$variant),)+
        }

        /// Discriminant of a [`NodeRef`], for table-driven dispatch.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeTag {
            Empty,
            ParseResult,
            $($variant,)+
        }

        impl NodeRef<'_> {
            /// The concrete shape tag of this node.
            pub fn tag(&self) -> NodeTag {
                match self {
                    Self::Empty => NodeTag::Empty,
                    Self::ParseResult(_) => NodeTag::ParseResult,
                    $(Self::$variant(_) => NodeTag::$variant,)+
                }
            }
        }

        impl<'a> NodeRef<'a> {
            fn from_oneof(inner: &'a proto::node::Node) -> Self {
                use proto::node::Node as N;
                match inner {
                    $(N::$variant(boxed) => Self::$variant(&**boxed),)+
                }
            }
        }

        $(
            impl<'a> From<&'a proto::$variant> for NodeRef<'a> {
                fn from(value: &'a proto::$variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}
for_each_node!(declare_facade);

impl<'a> From<&'a proto::ParseResult> for NodeRef<'a> {
    fn from(value: &'a proto::ParseResult) -> Self {
        Self::ParseResult(value)
    }
}

impl<'a> From<&'a proto::Node> for NodeRef<'a> {
    fn from(value: &'a proto::Node) -> Self {
        Self::from_node(value)
    }
}

/// One traversal edge: the field name on the parent through which the child
/// was reached, and the resolved child.
pub type Child<'a> = (&'static str, NodeRef<'a>);

impl<'a> NodeRef<'a> {
    /// Resolve a raw union slot to its concrete facade, or `Empty` when no
    /// variant is populated.
    pub fn from_node(node: &'a proto::Node) -> Self {
        match &node.node {
            Some(inner) => Self::from_oneof(inner),
            None => Self::Empty,
        }
    }

    /// Message-typed children in field-declaration order, with union slots
    /// resolved. Repeated fields contribute one entry per element, in
    /// sequence order.
    pub fn children(&self) -> Vec<Child<'a>> {
        let mut out = Vec::new();
        self.collect_children(&mut out);
        out
    }

    fn collect_children(&self, out: &mut Vec<Child<'a>>) {
        match *self {
            Self::Empty
            | Self::ParamRef(_)
            | Self::RoleSpec(_)
            | Self::AStar(_)
            | Self::Integer(_)
            | Self::Float(_)
            | Self::Boolean(_)
            | Self::String(_)
            | Self::BitString(_) => {}
            Self::ParseResult(n) => {
                for stmt in &n.stmts {
                    out.push(("stmts", NodeRef::RawStmt(stmt)));
                }
            }
            Self::RawStmt(n) => node(out, "stmt", &n.stmt),
            Self::Alias(n) => nodes(out, "colnames", &n.colnames),
            Self::RangeVar(n) => msg(out, "alias", &n.alias),
            Self::TypeName(n) => {
                nodes(out, "names", &n.names);
                nodes(out, "typmods", &n.typmods);
                nodes(out, "array_bounds", &n.array_bounds);
            }
            Self::ColumnRef(n) => nodes(out, "fields", &n.fields),
            Self::AExpr(n) => {
                nodes(out, "name", &n.name);
                node(out, "lexpr", &n.lexpr);
                node(out, "rexpr", &n.rexpr);
            }
            Self::TypeCast(n) => {
                node(out, "arg", &n.arg);
                msg(out, "type_name", &n.type_name);
            }
            Self::FuncCall(n) => {
                nodes(out, "funcname", &n.funcname);
                nodes(out, "args", &n.args);
                nodes(out, "agg_order", &n.agg_order);
                node(out, "agg_filter", &n.agg_filter);
                msg_box(out, "over", &n.over);
            }
            Self::AArrayExpr(n) => nodes(out, "elements", &n.elements),
            Self::ResTarget(n) => {
                nodes(out, "indirection", &n.indirection);
                node(out, "val", &n.val);
            }
            Self::SortBy(n) => {
                node(out, "node", &n.node);
                nodes(out, "use_op", &n.use_op);
            }
            Self::WindowDef(n) => {
                nodes(out, "partition_clause", &n.partition_clause);
                nodes(out, "order_clause", &n.order_clause);
                node(out, "start_offset", &n.start_offset);
                node(out, "end_offset", &n.end_offset);
            }
            Self::RangeSubselect(n) => {
                node(out, "subquery", &n.subquery);
                msg(out, "alias", &n.alias);
            }
            Self::RangeFunction(n) => {
                nodes(out, "functions", &n.functions);
                msg(out, "alias", &n.alias);
                nodes(out, "coldeflist", &n.coldeflist);
            }
            Self::BoolExpr(n) => {
                node(out, "xpr", &n.xpr);
                nodes(out, "args", &n.args);
            }
            Self::SubLink(n) => {
                node(out, "xpr", &n.xpr);
                node(out, "testexpr", &n.testexpr);
                nodes(out, "oper_name", &n.oper_name);
                node(out, "subselect", &n.subselect);
            }
            Self::NullTest(n) => {
                node(out, "xpr", &n.xpr);
                node(out, "arg", &n.arg);
            }
            Self::BooleanTest(n) => {
                node(out, "xpr", &n.xpr);
                node(out, "arg", &n.arg);
            }
            Self::CaseExpr(n) => {
                node(out, "xpr", &n.xpr);
                node(out, "arg", &n.arg);
                nodes(out, "args", &n.args);
                node(out, "defresult", &n.defresult);
            }
            Self::CaseWhen(n) => {
                node(out, "xpr", &n.xpr);
                node(out, "expr", &n.expr);
                node(out, "result", &n.result);
            }
            Self::JoinExpr(n) => {
                node(out, "larg", &n.larg);
                node(out, "rarg", &n.rarg);
                nodes(out, "using_clause", &n.using_clause);
                msg(out, "join_using_alias", &n.join_using_alias);
                node(out, "quals", &n.quals);
                msg(out, "alias", &n.alias);
            }
            Self::IntoClause(n) => {
                msg(out, "rel", &n.rel);
                nodes(out, "col_names", &n.col_names);
                nodes(out, "options", &n.options);
                node(out, "view_query", &n.view_query);
            }
            Self::WithClause(n) => nodes(out, "ctes", &n.ctes),
            Self::CommonTableExpr(n) => {
                nodes(out, "aliascolnames", &n.aliascolnames);
                node(out, "ctequery", &n.ctequery);
            }
            Self::SelectStmt(n) => {
                nodes(out, "distinct_clause", &n.distinct_clause);
                msg_box(out, "into_clause", &n.into_clause);
                nodes(out, "target_list", &n.target_list);
                nodes(out, "from_clause", &n.from_clause);
                node(out, "where_clause", &n.where_clause);
                nodes(out, "group_clause", &n.group_clause);
                node(out, "having_clause", &n.having_clause);
                nodes(out, "window_clause", &n.window_clause);
                nodes(out, "values_lists", &n.values_lists);
                nodes(out, "sort_clause", &n.sort_clause);
                node(out, "limit_offset", &n.limit_offset);
                node(out, "limit_count", &n.limit_count);
                nodes(out, "locking_clause", &n.locking_clause);
                msg_box(out, "with_clause", &n.with_clause);
                msg_box(out, "larg", &n.larg);
                msg_box(out, "rarg", &n.rarg);
            }
            Self::InsertStmt(n) => {
                msg(out, "relation", &n.relation);
                nodes(out, "cols", &n.cols);
                node(out, "select_stmt", &n.select_stmt);
                nodes(out, "returning_list", &n.returning_list);
                msg_box(out, "with_clause", &n.with_clause);
            }
            Self::DeleteStmt(n) => {
                msg(out, "relation", &n.relation);
                nodes(out, "using_clause", &n.using_clause);
                node(out, "where_clause", &n.where_clause);
                nodes(out, "returning_list", &n.returning_list);
                msg_box(out, "with_clause", &n.with_clause);
            }
            Self::UpdateStmt(n) => {
                msg(out, "relation", &n.relation);
                nodes(out, "target_list", &n.target_list);
                node(out, "where_clause", &n.where_clause);
                nodes(out, "from_clause", &n.from_clause);
                nodes(out, "returning_list", &n.returning_list);
                msg_box(out, "with_clause", &n.with_clause);
            }
            Self::ColumnDef(n) => {
                msg(out, "type_name", &n.type_name);
                node(out, "raw_default", &n.raw_default);
                node(out, "cooked_default", &n.cooked_default);
                msg(out, "identity_sequence", &n.identity_sequence);
                nodes(out, "constraints", &n.constraints);
                nodes(out, "fdwoptions", &n.fdwoptions);
            }
            Self::DefElem(n) => node(out, "arg", &n.arg),
            Self::IndexElem(n) => {
                node(out, "expr", &n.expr);
                nodes(out, "collation", &n.collation);
                nodes(out, "opclass", &n.opclass);
                nodes(out, "opclassopts", &n.opclassopts);
            }
            Self::CreateStmt(n) => {
                msg(out, "relation", &n.relation);
                nodes(out, "table_elts", &n.table_elts);
                nodes(out, "inh_relations", &n.inh_relations);
                msg(out, "of_typename", &n.of_typename);
                nodes(out, "constraints", &n.constraints);
                nodes(out, "options", &n.options);
            }
            Self::CreateSchemaStmt(n) => {
                msg(out, "authrole", &n.authrole);
                nodes(out, "schema_elts", &n.schema_elts);
            }
            Self::CreateTrigStmt(n) => {
                msg(out, "relation", &n.relation);
                nodes(out, "funcname", &n.funcname);
                nodes(out, "args", &n.args);
                nodes(out, "columns", &n.columns);
                node(out, "when_clause", &n.when_clause);
                nodes(out, "transition_rels", &n.transition_rels);
                msg(out, "constrrel", &n.constrrel);
            }
            Self::CreateSeqStmt(n) => {
                msg(out, "sequence", &n.sequence);
                nodes(out, "options", &n.options);
            }
            Self::DropStmt(n) => nodes(out, "objects", &n.objects),
            Self::IndexStmt(n) => {
                msg(out, "relation", &n.relation);
                nodes(out, "index_params", &n.index_params);
                nodes(out, "index_including_params", &n.index_including_params);
                nodes(out, "options", &n.options);
                node(out, "where_clause", &n.where_clause);
                nodes(out, "exclude_op_names", &n.exclude_op_names);
            }
            Self::CreateFunctionStmt(n) => {
                nodes(out, "funcname", &n.funcname);
                nodes(out, "parameters", &n.parameters);
                msg(out, "return_type", &n.return_type);
                nodes(out, "options", &n.options);
                node(out, "sql_body", &n.sql_body);
            }
            Self::FunctionParameter(n) => {
                msg(out, "arg_type", &n.arg_type);
                node(out, "defexpr", &n.defexpr);
            }
            Self::CompositeTypeStmt(n) => {
                msg(out, "typevar", &n.typevar);
                nodes(out, "coldeflist", &n.coldeflist);
            }
            Self::CreateEnumStmt(n) => {
                nodes(out, "type_name", &n.type_name);
                nodes(out, "vals", &n.vals);
            }
            Self::CreateRangeStmt(n) => {
                nodes(out, "type_name", &n.type_name);
                nodes(out, "params", &n.params);
            }
            Self::ViewStmt(n) => {
                msg(out, "view", &n.view);
                nodes(out, "aliases", &n.aliases);
                node(out, "query", &n.query);
                nodes(out, "options", &n.options);
            }
            Self::CreateTableAsStmt(n) => {
                node(out, "query", &n.query);
                msg_box(out, "into", &n.into);
            }
            Self::ObjectWithArgs(n) => {
                nodes(out, "objname", &n.objname);
                nodes(out, "objargs", &n.objargs);
                nodes(out, "objfuncargs", &n.objfuncargs);
            }
            Self::List(n) => nodes(out, "items", &n.items),
            Self::IntList(n) => nodes(out, "items", &n.items),
            Self::OidList(n) => nodes(out, "items", &n.items),
            Self::AConst(n) => {
                use proto::a_const::Val;
                match &n.val {
                    Some(Val::Ival(v)) => out.push(("ival", NodeRef::Integer(v))),
                    Some(Val::Fval(v)) => out.push(("fval", NodeRef::Float(v))),
                    Some(Val::Boolval(v)) => out.push(("boolval", NodeRef::Boolean(v))),
                    Some(Val::Sval(v)) => out.push(("sval", NodeRef::String(v))),
                    Some(Val::Bsval(v)) => out.push(("bsval", NodeRef::BitString(v))),
                    None => {}
                }
            }
        }
    }
}

fn node<'a>(out: &mut Vec<Child<'a>>, name: &'static str, field: &'a Option<Box<proto::Node>>) {
    if let Some(n) = field {
        out.push((name, NodeRef::from_node(n)));
    }
}

fn nodes<'a>(out: &mut Vec<Child<'a>>, name: &'static str, list: &'a [proto::Node]) {
    for item in list {
        out.push((name, NodeRef::from_node(item)));
    }
}

fn msg<'a, T>(out: &mut Vec<Child<'a>>, name: &'static str, field: &'a Option<T>)
where
    &'a T: Into<NodeRef<'a>>,
{
    if let Some(m) = field {
        out.push((name, m.into()));
    }
}

fn msg_box<'a, T>(out: &mut Vec<Child<'a>>, name: &'static str, field: &'a Option<Box<T>>)
where
    &'a T: Into<NodeRef<'a>>,
{
    if let Some(m) = field {
        out.push((name, (&**m).into()));
    }
}
