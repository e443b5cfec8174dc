//! Protobuf messages for libpg_query parse trees.
//!
//! Hand-transcribed from libpg_query's `pg_query.proto`, trimmed to the node
//! shapes this crate's operations and traversal exercise: the scalar value
//! nodes, the SELECT/DML cluster, and the DDL statements that `to_drop` and
//! the or-replace rewrites understand. Field tags and enum values mirror the
//! upstream schema so payloads interoperate with the native engine.
//!
//! Oneof variants that are not listed here decode to an unset `Node`, which
//! the wrapper layer surfaces as [`NodeRef::Empty`](crate::NodeRef::Empty) —
//! decoding never fails on an unlisted shape. Re-encoding such a tree drops
//! the unknown nodes, so surgery only ever rebuilds trees from fields it
//! fully models.

/// Root of a parsed query: engine version plus one entry per statement.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParseResult {
    #[prost(int32, tag = "1")]
    pub version: i32,
    #[prost(message, repeated, tag = "2")]
    pub stmts: Vec<RawStmt>,
}

/// Root of a scanned query: engine version plus the token stream.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScanResult {
    #[prost(int32, tag = "1")]
    pub version: i32,
    #[prost(message, repeated, tag = "2")]
    pub tokens: Vec<ScanToken>,
}

/// The tagged-union container: exactly one concrete shape per slot, or none.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Node {
    #[prost(
        oneof = "node::Node",
        tags = "1, 2, 4, 19, 20, 30, 31, 50, 51, 61, 65, 66, 67, 68, 69, 71, 72, 73, 76, 77, 79, 80, 81, 82, 86, 88, 89, 107, 112, 124, 125, 126, 127, 129, 133, 139, 146, 167, 175, 183, 190, 194, 195, 212, 213, 214, 216, 228, 258, 259, 260, 261, 262, 263, 264, 265, 266"
    )]
    pub node: Option<node::Node>,
}

/// Nested module holding the `Node` oneof, mirroring prost codegen layout.
pub mod node {
    /// One variant per concrete node shape. Never exposed by the wrapper
    /// layer; resolve through [`NodeRef`](crate::NodeRef) instead.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Node {
        #[prost(message, tag = "1")]
        Alias(Box<super::Alias>),
        #[prost(message, tag = "2")]
        RangeVar(Box<super::RangeVar>),
        #[prost(message, tag = "4")]
        IntoClause(Box<super::IntoClause>),
        #[prost(message, tag = "19")]
        BoolExpr(Box<super::BoolExpr>),
        #[prost(message, tag = "20")]
        SubLink(Box<super::SubLink>),
        #[prost(message, tag = "30")]
        CaseExpr(Box<super::CaseExpr>),
        #[prost(message, tag = "31")]
        CaseWhen(Box<super::CaseWhen>),
        #[prost(message, tag = "50")]
        NullTest(Box<super::NullTest>),
        #[prost(message, tag = "51")]
        BooleanTest(Box<super::BooleanTest>),
        #[prost(message, tag = "61")]
        JoinExpr(Box<super::JoinExpr>),
        #[prost(message, tag = "65")]
        TypeName(Box<super::TypeName>),
        #[prost(message, tag = "66")]
        ColumnRef(Box<super::ColumnRef>),
        #[prost(message, tag = "67")]
        ParamRef(Box<super::ParamRef>),
        #[prost(message, tag = "68")]
        AExpr(Box<super::AExpr>),
        #[prost(message, tag = "69")]
        TypeCast(Box<super::TypeCast>),
        #[prost(message, tag = "71")]
        RoleSpec(Box<super::RoleSpec>),
        #[prost(message, tag = "72")]
        FuncCall(Box<super::FuncCall>),
        #[prost(message, tag = "73")]
        AStar(Box<super::AStar>),
        #[prost(message, tag = "76")]
        AArrayExpr(Box<super::AArrayExpr>),
        #[prost(message, tag = "77")]
        ResTarget(Box<super::ResTarget>),
        #[prost(message, tag = "79")]
        SortBy(Box<super::SortBy>),
        #[prost(message, tag = "80")]
        WindowDef(Box<super::WindowDef>),
        #[prost(message, tag = "81")]
        RangeSubselect(Box<super::RangeSubselect>),
        #[prost(message, tag = "82")]
        RangeFunction(Box<super::RangeFunction>),
        #[prost(message, tag = "86")]
        ColumnDef(Box<super::ColumnDef>),
        #[prost(message, tag = "88")]
        IndexElem(Box<super::IndexElem>),
        #[prost(message, tag = "89")]
        DefElem(Box<super::DefElem>),
        #[prost(message, tag = "107")]
        WithClause(Box<super::WithClause>),
        #[prost(message, tag = "112")]
        CommonTableExpr(Box<super::CommonTableExpr>),
        #[prost(message, tag = "124")]
        RawStmt(Box<super::RawStmt>),
        #[prost(message, tag = "125")]
        InsertStmt(Box<super::InsertStmt>),
        #[prost(message, tag = "126")]
        DeleteStmt(Box<super::DeleteStmt>),
        #[prost(message, tag = "127")]
        UpdateStmt(Box<super::UpdateStmt>),
        #[prost(message, tag = "129")]
        SelectStmt(Box<super::SelectStmt>),
        #[prost(message, tag = "133")]
        CreateSchemaStmt(Box<super::CreateSchemaStmt>),
        #[prost(message, tag = "139")]
        ObjectWithArgs(Box<super::ObjectWithArgs>),
        #[prost(message, tag = "146")]
        CreateStmt(Box<super::CreateStmt>),
        #[prost(message, tag = "167")]
        CreateTrigStmt(Box<super::CreateTrigStmt>),
        #[prost(message, tag = "175")]
        CreateSeqStmt(Box<super::CreateSeqStmt>),
        #[prost(message, tag = "183")]
        DropStmt(Box<super::DropStmt>),
        #[prost(message, tag = "190")]
        IndexStmt(Box<super::IndexStmt>),
        #[prost(message, tag = "194")]
        CreateFunctionStmt(Box<super::CreateFunctionStmt>),
        #[prost(message, tag = "195")]
        FunctionParameter(Box<super::FunctionParameter>),
        #[prost(message, tag = "212")]
        CompositeTypeStmt(Box<super::CompositeTypeStmt>),
        #[prost(message, tag = "213")]
        CreateEnumStmt(Box<super::CreateEnumStmt>),
        #[prost(message, tag = "214")]
        CreateRangeStmt(Box<super::CreateRangeStmt>),
        #[prost(message, tag = "216")]
        ViewStmt(Box<super::ViewStmt>),
        #[prost(message, tag = "228")]
        CreateTableAsStmt(Box<super::CreateTableAsStmt>),
        #[prost(message, tag = "258")]
        Integer(Box<super::Integer>),
        #[prost(message, tag = "259")]
        Float(Box<super::Float>),
        #[prost(message, tag = "260")]
        Boolean(Box<super::Boolean>),
        #[prost(message, tag = "261")]
        String(Box<super::String>),
        #[prost(message, tag = "262")]
        BitString(Box<super::BitString>),
        #[prost(message, tag = "263")]
        List(Box<super::List>),
        #[prost(message, tag = "264")]
        IntList(Box<super::IntList>),
        #[prost(message, tag = "265")]
        OidList(Box<super::OidList>),
        #[prost(message, tag = "266")]
        AConst(Box<super::AConst>),
    }
}

/// One statement slot in a [`ParseResult`], with its byte span in the source.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawStmt {
    #[prost(message, optional, boxed, tag = "1")]
    pub stmt: Option<Box<Node>>,
    #[prost(int32, tag = "2")]
    pub stmt_location: i32,
    #[prost(int32, tag = "3")]
    pub stmt_len: i32,
}

// ---------------------------------------------------------------------------
// Scalar value nodes
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Integer {
    #[prost(int32, tag = "1")]
    pub ival: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Float {
    #[prost(string, tag = "1")]
    pub fval: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Boolean {
    #[prost(bool, tag = "1")]
    pub boolval: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct String {
    #[prost(string, tag = "1")]
    pub sval: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BitString {
    #[prost(string, tag = "1")]
    pub bsval: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct List {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OidList {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<Node>,
}

/// A literal constant. The set `val` variant carries the value; `isnull`
/// marks SQL NULL.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AConst {
    #[prost(oneof = "a_const::Val", tags = "1, 2, 3, 4, 5")]
    pub val: Option<a_const::Val>,
    #[prost(bool, tag = "10")]
    pub isnull: bool,
    #[prost(int32, tag = "11")]
    pub location: i32,
}

pub mod a_const {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Val {
        #[prost(message, tag = "1")]
        Ival(super::Integer),
        #[prost(message, tag = "2")]
        Fval(super::Float),
        #[prost(message, tag = "3")]
        Boolval(super::Boolean),
        #[prost(message, tag = "4")]
        Sval(super::String),
        #[prost(message, tag = "5")]
        Bsval(super::BitString),
    }
}

// ---------------------------------------------------------------------------
// Names, references and expressions
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Alias {
    #[prost(string, tag = "1")]
    pub aliasname: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub colnames: Vec<Node>,
}

/// A possibly-qualified relation name.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RangeVar {
    #[prost(string, tag = "1")]
    pub catalogname: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub schemaname: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub relname: ::prost::alloc::string::String,
    #[prost(bool, tag = "4")]
    pub inh: bool,
    #[prost(string, tag = "5")]
    pub relpersistence: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub alias: Option<Alias>,
    #[prost(int32, tag = "7")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeName {
    #[prost(message, repeated, tag = "1")]
    pub names: Vec<Node>,
    #[prost(uint32, tag = "2")]
    pub type_oid: u32,
    #[prost(bool, tag = "3")]
    pub setof: bool,
    #[prost(bool, tag = "4")]
    pub pct_type: bool,
    #[prost(message, repeated, tag = "5")]
    pub typmods: Vec<Node>,
    #[prost(int32, tag = "6")]
    pub typemod: i32,
    #[prost(message, repeated, tag = "7")]
    pub array_bounds: Vec<Node>,
    #[prost(int32, tag = "8")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnRef {
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<Node>,
    #[prost(int32, tag = "2")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParamRef {
    #[prost(int32, tag = "1")]
    pub number: i32,
    #[prost(int32, tag = "2")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AExpr {
    #[prost(enumeration = "AExprKind", tag = "1")]
    pub kind: i32,
    #[prost(message, repeated, tag = "2")]
    pub name: Vec<Node>,
    #[prost(message, optional, boxed, tag = "3")]
    pub lexpr: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub rexpr: Option<Box<Node>>,
    #[prost(int32, tag = "5")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeCast {
    #[prost(message, optional, boxed, tag = "1")]
    pub arg: Option<Box<Node>>,
    #[prost(message, optional, tag = "2")]
    pub type_name: Option<TypeName>,
    #[prost(int32, tag = "3")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FuncCall {
    #[prost(message, repeated, tag = "1")]
    pub funcname: Vec<Node>,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Node>,
    #[prost(message, repeated, tag = "3")]
    pub agg_order: Vec<Node>,
    #[prost(message, optional, boxed, tag = "4")]
    pub agg_filter: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "5")]
    pub over: Option<Box<WindowDef>>,
    #[prost(bool, tag = "6")]
    pub agg_within_group: bool,
    #[prost(bool, tag = "7")]
    pub agg_star: bool,
    #[prost(bool, tag = "8")]
    pub agg_distinct: bool,
    #[prost(bool, tag = "9")]
    pub func_variadic: bool,
    #[prost(enumeration = "CoercionForm", tag = "10")]
    pub funcformat: i32,
    #[prost(int32, tag = "11")]
    pub location: i32,
}

/// The `*` in `SELECT *` or `t.*`. Carries no fields.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AStar {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AArrayExpr {
    #[prost(message, repeated, tag = "1")]
    pub elements: Vec<Node>,
    #[prost(int32, tag = "2")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResTarget {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub indirection: Vec<Node>,
    #[prost(message, optional, boxed, tag = "3")]
    pub val: Option<Box<Node>>,
    #[prost(int32, tag = "4")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SortBy {
    #[prost(message, optional, boxed, tag = "1")]
    pub node: Option<Box<Node>>,
    #[prost(enumeration = "SortByDir", tag = "2")]
    pub sortby_dir: i32,
    #[prost(enumeration = "SortByNulls", tag = "3")]
    pub sortby_nulls: i32,
    #[prost(message, repeated, tag = "4")]
    pub use_op: Vec<Node>,
    #[prost(int32, tag = "5")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WindowDef {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub refname: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub partition_clause: Vec<Node>,
    #[prost(message, repeated, tag = "4")]
    pub order_clause: Vec<Node>,
    #[prost(int32, tag = "5")]
    pub frame_options: i32,
    #[prost(message, optional, boxed, tag = "6")]
    pub start_offset: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "7")]
    pub end_offset: Option<Box<Node>>,
    #[prost(int32, tag = "8")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RangeSubselect {
    #[prost(bool, tag = "1")]
    pub lateral: bool,
    #[prost(message, optional, boxed, tag = "2")]
    pub subquery: Option<Box<Node>>,
    #[prost(message, optional, tag = "3")]
    pub alias: Option<Alias>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RangeFunction {
    #[prost(bool, tag = "1")]
    pub lateral: bool,
    #[prost(bool, tag = "2")]
    pub ordinality: bool,
    #[prost(bool, tag = "3")]
    pub is_rowsfrom: bool,
    #[prost(message, repeated, tag = "4")]
    pub functions: Vec<Node>,
    #[prost(message, optional, tag = "5")]
    pub alias: Option<Alias>,
    #[prost(message, repeated, tag = "6")]
    pub coldeflist: Vec<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolExpr {
    #[prost(message, optional, boxed, tag = "1")]
    pub xpr: Option<Box<Node>>,
    #[prost(enumeration = "BoolExprType", tag = "2")]
    pub boolop: i32,
    #[prost(message, repeated, tag = "3")]
    pub args: Vec<Node>,
    #[prost(int32, tag = "4")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubLink {
    #[prost(message, optional, boxed, tag = "1")]
    pub xpr: Option<Box<Node>>,
    #[prost(enumeration = "SubLinkType", tag = "2")]
    pub sub_link_type: i32,
    #[prost(int32, tag = "3")]
    pub sub_link_id: i32,
    #[prost(message, optional, boxed, tag = "4")]
    pub testexpr: Option<Box<Node>>,
    #[prost(message, repeated, tag = "5")]
    pub oper_name: Vec<Node>,
    #[prost(message, optional, boxed, tag = "6")]
    pub subselect: Option<Box<Node>>,
    #[prost(int32, tag = "7")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NullTest {
    #[prost(message, optional, boxed, tag = "1")]
    pub xpr: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub arg: Option<Box<Node>>,
    #[prost(enumeration = "NullTestType", tag = "3")]
    pub nulltesttype: i32,
    #[prost(bool, tag = "4")]
    pub argisrow: bool,
    #[prost(int32, tag = "5")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BooleanTest {
    #[prost(message, optional, boxed, tag = "1")]
    pub xpr: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub arg: Option<Box<Node>>,
    #[prost(enumeration = "BoolTestType", tag = "3")]
    pub booltesttype: i32,
    #[prost(int32, tag = "4")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseExpr {
    #[prost(message, optional, boxed, tag = "1")]
    pub xpr: Option<Box<Node>>,
    #[prost(uint32, tag = "2")]
    pub casetype: u32,
    #[prost(uint32, tag = "3")]
    pub casecollid: u32,
    #[prost(message, optional, boxed, tag = "4")]
    pub arg: Option<Box<Node>>,
    #[prost(message, repeated, tag = "5")]
    pub args: Vec<Node>,
    #[prost(message, optional, boxed, tag = "6")]
    pub defresult: Option<Box<Node>>,
    #[prost(int32, tag = "7")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseWhen {
    #[prost(message, optional, boxed, tag = "1")]
    pub xpr: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "3")]
    pub result: Option<Box<Node>>,
    #[prost(int32, tag = "4")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JoinExpr {
    #[prost(enumeration = "JoinType", tag = "1")]
    pub jointype: i32,
    #[prost(bool, tag = "2")]
    pub is_natural: bool,
    #[prost(message, optional, boxed, tag = "3")]
    pub larg: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub rarg: Option<Box<Node>>,
    #[prost(message, repeated, tag = "5")]
    pub using_clause: Vec<Node>,
    #[prost(message, optional, tag = "6")]
    pub join_using_alias: Option<Alias>,
    #[prost(message, optional, boxed, tag = "7")]
    pub quals: Option<Box<Node>>,
    #[prost(message, optional, tag = "8")]
    pub alias: Option<Alias>,
    #[prost(int32, tag = "9")]
    pub rtindex: i32,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntoClause {
    #[prost(message, optional, tag = "1")]
    pub rel: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub col_names: Vec<Node>,
    #[prost(string, tag = "3")]
    pub access_method: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub options: Vec<Node>,
    #[prost(enumeration = "OnCommitAction", tag = "5")]
    pub on_commit: i32,
    #[prost(string, tag = "6")]
    pub table_space_name: ::prost::alloc::string::String,
    #[prost(message, optional, boxed, tag = "7")]
    pub view_query: Option<Box<Node>>,
    #[prost(bool, tag = "8")]
    pub skip_data: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WithClause {
    #[prost(message, repeated, tag = "1")]
    pub ctes: Vec<Node>,
    #[prost(bool, tag = "2")]
    pub recursive: bool,
    #[prost(int32, tag = "3")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommonTableExpr {
    #[prost(string, tag = "1")]
    pub ctename: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub aliascolnames: Vec<Node>,
    #[prost(enumeration = "CteMaterialize", tag = "3")]
    pub ctematerialized: i32,
    #[prost(message, optional, boxed, tag = "4")]
    pub ctequery: Option<Box<Node>>,
    #[prost(int32, tag = "7")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectStmt {
    #[prost(message, repeated, tag = "1")]
    pub distinct_clause: Vec<Node>,
    #[prost(message, optional, boxed, tag = "2")]
    pub into_clause: Option<Box<IntoClause>>,
    #[prost(message, repeated, tag = "3")]
    pub target_list: Vec<Node>,
    #[prost(message, repeated, tag = "4")]
    pub from_clause: Vec<Node>,
    #[prost(message, optional, boxed, tag = "5")]
    pub where_clause: Option<Box<Node>>,
    #[prost(message, repeated, tag = "6")]
    pub group_clause: Vec<Node>,
    #[prost(bool, tag = "7")]
    pub group_distinct: bool,
    #[prost(message, optional, boxed, tag = "8")]
    pub having_clause: Option<Box<Node>>,
    #[prost(message, repeated, tag = "9")]
    pub window_clause: Vec<Node>,
    #[prost(message, repeated, tag = "10")]
    pub values_lists: Vec<Node>,
    #[prost(message, repeated, tag = "11")]
    pub sort_clause: Vec<Node>,
    #[prost(message, optional, boxed, tag = "12")]
    pub limit_offset: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "13")]
    pub limit_count: Option<Box<Node>>,
    #[prost(enumeration = "LimitOption", tag = "14")]
    pub limit_option: i32,
    #[prost(message, repeated, tag = "15")]
    pub locking_clause: Vec<Node>,
    #[prost(message, optional, boxed, tag = "16")]
    pub with_clause: Option<Box<WithClause>>,
    #[prost(enumeration = "SetOperation", tag = "17")]
    pub op: i32,
    #[prost(bool, tag = "18")]
    pub all: bool,
    #[prost(message, optional, boxed, tag = "19")]
    pub larg: Option<Box<SelectStmt>>,
    #[prost(message, optional, boxed, tag = "20")]
    pub rarg: Option<Box<SelectStmt>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InsertStmt {
    #[prost(message, optional, tag = "1")]
    pub relation: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub cols: Vec<Node>,
    #[prost(message, optional, boxed, tag = "3")]
    pub select_stmt: Option<Box<Node>>,
    #[prost(message, repeated, tag = "5")]
    pub returning_list: Vec<Node>,
    #[prost(message, optional, boxed, tag = "6")]
    pub with_clause: Option<Box<WithClause>>,
    #[prost(enumeration = "OverridingKind", tag = "7")]
    pub r#override: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteStmt {
    #[prost(message, optional, tag = "1")]
    pub relation: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub using_clause: Vec<Node>,
    #[prost(message, optional, boxed, tag = "3")]
    pub where_clause: Option<Box<Node>>,
    #[prost(message, repeated, tag = "4")]
    pub returning_list: Vec<Node>,
    #[prost(message, optional, boxed, tag = "5")]
    pub with_clause: Option<Box<WithClause>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateStmt {
    #[prost(message, optional, tag = "1")]
    pub relation: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub target_list: Vec<Node>,
    #[prost(message, optional, boxed, tag = "3")]
    pub where_clause: Option<Box<Node>>,
    #[prost(message, repeated, tag = "4")]
    pub from_clause: Vec<Node>,
    #[prost(message, repeated, tag = "5")]
    pub returning_list: Vec<Node>,
    #[prost(message, optional, boxed, tag = "6")]
    pub with_clause: Option<Box<WithClause>>,
}

// ---------------------------------------------------------------------------
// DDL statements understood by surgery
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnDef {
    #[prost(string, tag = "1")]
    pub colname: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub type_name: Option<TypeName>,
    #[prost(string, tag = "3")]
    pub compression: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub inhcount: i32,
    #[prost(bool, tag = "5")]
    pub is_local: bool,
    #[prost(bool, tag = "6")]
    pub is_not_null: bool,
    #[prost(bool, tag = "7")]
    pub is_from_type: bool,
    #[prost(string, tag = "8")]
    pub storage: ::prost::alloc::string::String,
    #[prost(message, optional, boxed, tag = "9")]
    pub raw_default: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "10")]
    pub cooked_default: Option<Box<Node>>,
    #[prost(string, tag = "11")]
    pub identity: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "12")]
    pub identity_sequence: Option<RangeVar>,
    #[prost(string, tag = "13")]
    pub generated: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "16")]
    pub constraints: Vec<Node>,
    #[prost(message, repeated, tag = "17")]
    pub fdwoptions: Vec<Node>,
    #[prost(int32, tag = "18")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefElem {
    #[prost(string, tag = "1")]
    pub defnamespace: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub defname: ::prost::alloc::string::String,
    #[prost(message, optional, boxed, tag = "3")]
    pub arg: Option<Box<Node>>,
    #[prost(enumeration = "DefElemAction", tag = "4")]
    pub defaction: i32,
    #[prost(int32, tag = "5")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexElem {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Node>>,
    #[prost(string, tag = "3")]
    pub indexcolname: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub collation: Vec<Node>,
    #[prost(message, repeated, tag = "5")]
    pub opclass: Vec<Node>,
    #[prost(message, repeated, tag = "6")]
    pub opclassopts: Vec<Node>,
    #[prost(enumeration = "SortByDir", tag = "7")]
    pub ordering: i32,
    #[prost(enumeration = "SortByNulls", tag = "8")]
    pub nulls_ordering: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoleSpec {
    #[prost(enumeration = "RoleSpecType", tag = "1")]
    pub roletype: i32,
    #[prost(string, tag = "2")]
    pub rolename: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub location: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateStmt {
    #[prost(message, optional, tag = "1")]
    pub relation: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub table_elts: Vec<Node>,
    #[prost(message, repeated, tag = "3")]
    pub inh_relations: Vec<Node>,
    #[prost(message, optional, tag = "6")]
    pub of_typename: Option<TypeName>,
    #[prost(message, repeated, tag = "7")]
    pub constraints: Vec<Node>,
    #[prost(message, repeated, tag = "8")]
    pub options: Vec<Node>,
    #[prost(enumeration = "OnCommitAction", tag = "9")]
    pub oncommit: i32,
    #[prost(string, tag = "10")]
    pub tablespacename: ::prost::alloc::string::String,
    #[prost(string, tag = "11")]
    pub access_method: ::prost::alloc::string::String,
    #[prost(bool, tag = "12")]
    pub if_not_exists: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSchemaStmt {
    #[prost(string, tag = "1")]
    pub schemaname: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub authrole: Option<RoleSpec>,
    #[prost(message, repeated, tag = "3")]
    pub schema_elts: Vec<Node>,
    #[prost(bool, tag = "4")]
    pub if_not_exists: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTrigStmt {
    #[prost(bool, tag = "1")]
    pub replace: bool,
    #[prost(bool, tag = "2")]
    pub isconstraint: bool,
    #[prost(string, tag = "3")]
    pub trigname: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub relation: Option<RangeVar>,
    #[prost(message, repeated, tag = "5")]
    pub funcname: Vec<Node>,
    #[prost(message, repeated, tag = "6")]
    pub args: Vec<Node>,
    #[prost(bool, tag = "7")]
    pub row: bool,
    #[prost(int32, tag = "8")]
    pub timing: i32,
    #[prost(int32, tag = "9")]
    pub events: i32,
    #[prost(message, repeated, tag = "10")]
    pub columns: Vec<Node>,
    #[prost(message, optional, boxed, tag = "11")]
    pub when_clause: Option<Box<Node>>,
    #[prost(message, repeated, tag = "12")]
    pub transition_rels: Vec<Node>,
    #[prost(bool, tag = "13")]
    pub deferrable: bool,
    #[prost(bool, tag = "14")]
    pub initdeferred: bool,
    #[prost(message, optional, tag = "15")]
    pub constrrel: Option<RangeVar>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSeqStmt {
    #[prost(message, optional, tag = "1")]
    pub sequence: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub options: Vec<Node>,
    #[prost(uint32, tag = "3")]
    pub owner_id: u32,
    #[prost(bool, tag = "4")]
    pub for_identity: bool,
    #[prost(bool, tag = "5")]
    pub if_not_exists: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropStmt {
    #[prost(message, repeated, tag = "1")]
    pub objects: Vec<Node>,
    #[prost(enumeration = "ObjectType", tag = "2")]
    pub remove_type: i32,
    #[prost(enumeration = "DropBehavior", tag = "3")]
    pub behavior: i32,
    #[prost(bool, tag = "4")]
    pub missing_ok: bool,
    #[prost(bool, tag = "5")]
    pub concurrent: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexStmt {
    #[prost(string, tag = "1")]
    pub idxname: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub relation: Option<RangeVar>,
    #[prost(string, tag = "3")]
    pub access_method: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub table_space: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "5")]
    pub index_params: Vec<Node>,
    #[prost(message, repeated, tag = "6")]
    pub index_including_params: Vec<Node>,
    #[prost(message, repeated, tag = "7")]
    pub options: Vec<Node>,
    #[prost(message, optional, boxed, tag = "8")]
    pub where_clause: Option<Box<Node>>,
    #[prost(message, repeated, tag = "9")]
    pub exclude_op_names: Vec<Node>,
    #[prost(string, tag = "10")]
    pub idxcomment: ::prost::alloc::string::String,
    #[prost(uint32, tag = "11")]
    pub index_oid: u32,
    #[prost(uint32, tag = "12")]
    pub old_number: u32,
    #[prost(uint32, tag = "13")]
    pub old_create_subid: u32,
    #[prost(uint32, tag = "14")]
    pub old_first_relfilelocator_subid: u32,
    #[prost(bool, tag = "15")]
    pub unique: bool,
    #[prost(bool, tag = "16")]
    pub nulls_not_distinct: bool,
    #[prost(bool, tag = "17")]
    pub primary: bool,
    #[prost(bool, tag = "18")]
    pub isconstraint: bool,
    #[prost(bool, tag = "19")]
    pub deferrable: bool,
    #[prost(bool, tag = "20")]
    pub initdeferred: bool,
    #[prost(bool, tag = "21")]
    pub transformed: bool,
    #[prost(bool, tag = "22")]
    pub concurrent: bool,
    #[prost(bool, tag = "23")]
    pub if_not_exists: bool,
    #[prost(bool, tag = "24")]
    pub reset_default_tblspc: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateFunctionStmt {
    #[prost(bool, tag = "1")]
    pub is_procedure: bool,
    #[prost(bool, tag = "2")]
    pub replace: bool,
    #[prost(message, repeated, tag = "3")]
    pub funcname: Vec<Node>,
    #[prost(message, repeated, tag = "4")]
    pub parameters: Vec<Node>,
    #[prost(message, optional, tag = "5")]
    pub return_type: Option<TypeName>,
    #[prost(message, repeated, tag = "6")]
    pub options: Vec<Node>,
    #[prost(message, optional, boxed, tag = "7")]
    pub sql_body: Option<Box<Node>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FunctionParameter {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub arg_type: Option<TypeName>,
    #[prost(enumeration = "FunctionParameterMode", tag = "3")]
    pub mode: i32,
    #[prost(message, optional, boxed, tag = "4")]
    pub defexpr: Option<Box<Node>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompositeTypeStmt {
    #[prost(message, optional, tag = "1")]
    pub typevar: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub coldeflist: Vec<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateEnumStmt {
    #[prost(message, repeated, tag = "1")]
    pub type_name: Vec<Node>,
    #[prost(message, repeated, tag = "2")]
    pub vals: Vec<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRangeStmt {
    #[prost(message, repeated, tag = "1")]
    pub type_name: Vec<Node>,
    #[prost(message, repeated, tag = "2")]
    pub params: Vec<Node>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ViewStmt {
    #[prost(message, optional, tag = "1")]
    pub view: Option<RangeVar>,
    #[prost(message, repeated, tag = "2")]
    pub aliases: Vec<Node>,
    #[prost(message, optional, boxed, tag = "3")]
    pub query: Option<Box<Node>>,
    #[prost(bool, tag = "4")]
    pub replace: bool,
    #[prost(message, repeated, tag = "5")]
    pub options: Vec<Node>,
    #[prost(enumeration = "ViewCheckOption", tag = "6")]
    pub with_check_option: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTableAsStmt {
    #[prost(message, optional, boxed, tag = "1")]
    pub query: Option<Box<Node>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub into: Option<Box<IntoClause>>,
    #[prost(enumeration = "ObjectType", tag = "3")]
    pub objtype: i32,
    #[prost(bool, tag = "4")]
    pub is_select_into: bool,
    #[prost(bool, tag = "5")]
    pub if_not_exists: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectWithArgs {
    #[prost(message, repeated, tag = "1")]
    pub objname: Vec<Node>,
    #[prost(message, repeated, tag = "2")]
    pub objargs: Vec<Node>,
    #[prost(message, repeated, tag = "3")]
    pub objfuncargs: Vec<Node>,
    #[prost(bool, tag = "4")]
    pub args_unspecified: bool,
}

// ---------------------------------------------------------------------------
// Scan tokens
// ---------------------------------------------------------------------------

/// One lexical token with its byte span in the UTF-8 input buffer.
/// `start` is inclusive, `end` exclusive; both are byte offsets, never
/// character offsets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScanToken {
    #[prost(int32, tag = "1")]
    pub start: i32,
    #[prost(int32, tag = "2")]
    pub end: i32,
    #[prost(enumeration = "Token", tag = "4")]
    pub token: i32,
    #[prost(enumeration = "KeywordKind", tag = "5")]
    pub keyword_kind: i32,
}

impl ScanToken {
    /// Structural token kind, or `None` for values outside the transcribed
    /// set (keyword-specific token codes); classify those via
    /// [`ScanToken::keyword`]. The raw code stays readable on `self.token`.
    pub fn kind(&self) -> Option<Token> {
        Token::try_from(self.token).ok()
    }

    /// Keyword classification for this token.
    pub fn keyword(&self) -> KeywordKind {
        KeywordKind::try_from(self.keyword_kind).unwrap_or(KeywordKind::NoKeyword)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AExprKind {
    Undefined = 0,
    AexprOp = 1,
    AexprOpAny = 2,
    AexprOpAll = 3,
    AexprDistinct = 4,
    AexprNotDistinct = 5,
    AexprNullif = 6,
    AexprIn = 7,
    AexprLike = 8,
    AexprIlike = 9,
    AexprSimilar = 10,
    AexprBetween = 11,
    AexprNotBetween = 12,
    AexprBetweenSym = 13,
    AexprNotBetweenSym = 14,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BoolExprType {
    Undefined = 0,
    AndExpr = 1,
    OrExpr = 2,
    NotExpr = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SubLinkType {
    Undefined = 0,
    ExistsSublink = 1,
    AllSublink = 2,
    AnySublink = 3,
    RowcompareSublink = 4,
    ExprSublink = 5,
    MultiexprSublink = 6,
    ArraySublink = 7,
    CteSublink = 8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NullTestType {
    Undefined = 0,
    IsNull = 1,
    IsNotNull = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BoolTestType {
    Undefined = 0,
    IsTrue = 1,
    IsNotTrue = 2,
    IsFalse = 3,
    IsNotFalse = 4,
    IsUnknown = 5,
    IsNotUnknown = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SortByDir {
    Undefined = 0,
    SortbyDefault = 1,
    SortbyAsc = 2,
    SortbyDesc = 3,
    SortbyUsing = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SortByNulls {
    Undefined = 0,
    SortbyNullsDefault = 1,
    SortbyNullsFirst = 2,
    SortbyNullsLast = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SetOperation {
    Undefined = 0,
    SetopNone = 1,
    SetopUnion = 2,
    SetopIntersect = 3,
    SetopExcept = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LimitOption {
    Undefined = 0,
    Default = 1,
    Count = 2,
    WithTies = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum JoinType {
    Undefined = 0,
    JoinInner = 1,
    JoinLeft = 2,
    JoinFull = 3,
    JoinRight = 4,
    JoinSemi = 5,
    JoinAnti = 6,
    JoinRightAnti = 7,
    JoinUniqueOuter = 8,
    JoinUniqueInner = 9,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CoercionForm {
    Undefined = 0,
    CoerceExplicitCall = 1,
    CoerceExplicitCast = 2,
    CoerceImplicitCast = 3,
    CoerceSqlSyntax = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OnCommitAction {
    Undefined = 0,
    OncommitNoop = 1,
    OncommitPreserveRows = 2,
    OncommitDeleteRows = 3,
    OncommitDrop = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CteMaterialize {
    Undefined = 0,
    Default = 1,
    Always = 2,
    Never = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OverridingKind {
    Undefined = 0,
    OverridingNotSet = 1,
    OverridingUserValue = 2,
    OverridingSystemValue = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DefElemAction {
    Undefined = 0,
    DefelemUnspec = 1,
    DefelemSet = 2,
    DefelemAdd = 3,
    DefelemDrop = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ViewCheckOption {
    Undefined = 0,
    NoCheckOption = 1,
    LocalCheckOption = 2,
    CascadedCheckOption = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DropBehavior {
    Undefined = 0,
    DropRestrict = 1,
    DropCascade = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FunctionParameterMode {
    Undefined = 0,
    FuncParamIn = 1,
    FuncParamOut = 2,
    FuncParamInout = 3,
    FuncParamVariadic = 4,
    FuncParamTable = 5,
    FuncParamDefault = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RoleSpecType {
    Undefined = 0,
    RolespecCstring = 1,
    RolespecCurrentRole = 2,
    RolespecCurrentUser = 3,
    RolespecSessionUser = 4,
    RolespecPublic = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ObjectType {
    Undefined = 0,
    ObjectAccessMethod = 1,
    ObjectAggregate = 2,
    ObjectAmop = 3,
    ObjectAmproc = 4,
    ObjectAttribute = 5,
    ObjectCast = 6,
    ObjectColumn = 7,
    ObjectCollation = 8,
    ObjectConversion = 9,
    ObjectDatabase = 10,
    ObjectDefault = 11,
    ObjectDefacl = 12,
    ObjectDomain = 13,
    ObjectDomconstraint = 14,
    ObjectEventTrigger = 15,
    ObjectExtension = 16,
    ObjectFdw = 17,
    ObjectForeignServer = 18,
    ObjectForeignTable = 19,
    ObjectFunction = 20,
    ObjectIndex = 21,
    ObjectLanguage = 22,
    ObjectLargeobject = 23,
    ObjectMatview = 24,
    ObjectOpclass = 25,
    ObjectOperator = 26,
    ObjectOpfamily = 27,
    ObjectParameterAcl = 28,
    ObjectPolicy = 29,
    ObjectProcedure = 30,
    ObjectPublication = 31,
    ObjectPublicationNamespace = 32,
    ObjectPublicationRel = 33,
    ObjectRole = 34,
    ObjectRoutine = 35,
    ObjectRule = 36,
    ObjectSchema = 37,
    ObjectSequence = 38,
    ObjectSubscription = 39,
    ObjectStatisticExt = 40,
    ObjectTabconstraint = 41,
    ObjectTable = 42,
    ObjectTablespace = 43,
    ObjectTransform = 44,
    ObjectTrigger = 45,
    ObjectTsconfiguration = 46,
    ObjectTsdictionary = 47,
    ObjectTsparser = 48,
    ObjectTstemplate = 49,
    ObjectType = 50,
    ObjectUserMapping = 51,
    ObjectView = 52,
}

/// Keyword classification for scan tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum KeywordKind {
    NoKeyword = 0,
    UnreservedKeyword = 1,
    ColNameKeyword = 2,
    TypeFuncNameKeyword = 3,
    ReservedKeyword = 4,
}

/// Structural scan token kinds. Single-character operator tokens carry their
/// ASCII value; named tokens start at 258 as in the scanner's grammar.
/// Keyword-specific token codes (277 and up) are not enumerated here — they
/// stay readable as raw `i32` and classify through [`KeywordKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Token {
    Nul = 0,
    Ascii37 = 37,
    Ascii40 = 40,
    Ascii41 = 41,
    Ascii42 = 42,
    Ascii43 = 43,
    Ascii44 = 44,
    Ascii45 = 45,
    Ascii46 = 46,
    Ascii47 = 47,
    Ascii58 = 58,
    Ascii59 = 59,
    Ascii60 = 60,
    Ascii61 = 61,
    Ascii62 = 62,
    Ascii63 = 63,
    Ascii91 = 91,
    Ascii92 = 92,
    Ascii93 = 93,
    Ascii94 = 94,
    Ascii123 = 123,
    Ascii125 = 125,
    Ident = 258,
    Uident = 259,
    Fconst = 260,
    Sconst = 261,
    Usconst = 262,
    Bconst = 263,
    Xconst = 264,
    Op = 265,
    Iconst = 266,
    Param = 267,
    Typecast = 268,
    DotDot = 269,
    ColonEquals = 270,
    EqualsGreater = 271,
    LessEquals = 272,
    GreaterEquals = 273,
    NotEquals = 274,
    SqlComment = 275,
    CComment = 276,
}
