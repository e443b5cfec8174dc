//! End-to-end tests against a real libpg_query shared library.
//!
//! Each test self-skips when the library cannot be loaded, so the suite
//! stays green on machines without libpg_query installed. Point
//! `POSTGAST_LIBRARY` at a specific build to run them.

use postgast::{Error, NodeTag};

macro_rules! require_native {
    () => {
        // Run with RUST_LOG=debug and --nocapture to see bridge call logs.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        if !postgast::native::available() {
            eprintln!("skipping: libpg_query shared library not found");
            return;
        }
    };
}

#[test]
fn test_parse_returns_one_raw_stmt_per_statement() {
    require_native!();
    let tree = postgast::parse("SELECT 1; SELECT 2").unwrap();
    assert_eq!(tree.stmts.len(), 2);
    assert!(tree.version > 0);
}

#[test]
fn test_parse_error_carries_position() {
    require_native!();
    let err = postgast::parse("SELECT * FROM WHERE").unwrap_err();
    let Error::Native(native) = err else {
        panic!("expected a native error, got {err}");
    };
    assert!(!native.message.is_empty());
    assert!(native.cursorpos > 0);
}

#[test]
fn test_parse_json_mirrors_the_tree_shape() {
    require_native!();
    let value = postgast::parse_json("SELECT 1").unwrap();
    assert!(value.get("stmts").and_then(|s| s.as_array()).is_some());
}

#[test]
fn test_deparse_output_is_a_fixpoint() {
    require_native!();
    for sql in [
        "select   id ,  name from users where active = true",
        "INSERT INTO t (a, b) VALUES (1, 2)",
        "UPDATE t SET a = a + 1 WHERE b IS NOT NULL",
        "DELETE FROM t USING u WHERE t.id = u.id RETURNING t.id",
        "WITH x AS (SELECT 1 AS n) SELECT n FROM x",
    ] {
        let canonical = postgast::deparse(&postgast::parse(sql).unwrap()).unwrap();
        let again = postgast::deparse(&postgast::parse(&canonical).unwrap()).unwrap();
        assert_eq!(canonical, again, "not a fixpoint for {sql:?}");
    }
}

#[test]
fn test_normalize_replaces_literals_with_placeholders() {
    require_native!();
    let normalized = postgast::normalize("SELECT * FROM users WHERE id = 42").unwrap();
    assert_eq!(normalized, "SELECT * FROM users WHERE id = $1");
}

#[test]
fn test_fingerprint_ignores_literal_values_only() {
    require_native!();
    let a = postgast::fingerprint("SELECT * FROM users WHERE id = 1").unwrap();
    let b = postgast::fingerprint("SELECT * FROM users WHERE id = 2").unwrap();
    let c = postgast::fingerprint("SELECT * FROM orders WHERE id = 1").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.hex, format!("{:016x}", a.value));
}

#[test]
fn test_scan_spans_are_ordered_and_in_bounds() {
    require_native!();
    let sql = "SELECT 'text' /* comment */ FROM t";
    let result = postgast::scan(sql).unwrap();
    assert!(!result.tokens.is_empty());

    let mut previous_end = 0;
    for token in &result.tokens {
        assert!(token.start >= previous_end);
        assert!(token.end > token.start);
        assert!(token.end as usize <= sql.len());
        // Comments scan as tokens of their own, so the spans collectively
        // cover the input and anything between them is whitespace.
        let gap = &sql[previous_end as usize..token.start as usize];
        assert!(
            gap.chars().all(char::is_whitespace),
            "non-whitespace gap {gap:?} before token at {}",
            token.start
        );
        previous_end = token.end;
    }
    assert!(sql[previous_end as usize..].chars().all(char::is_whitespace));
    // The leading SELECT scans as a reserved keyword.
    let first = &result.tokens[0];
    assert_eq!(&sql[first.start as usize..first.end as usize], "SELECT");
    assert_eq!(
        first.keyword(),
        postgast::proto::KeywordKind::ReservedKeyword
    );
}

#[test]
fn test_split_preserves_statement_text() {
    require_native!();
    let stmts = postgast::split("SELECT 1; SELECT 2;").unwrap();
    assert_eq!(stmts.len(), 2);
    assert_eq!(stmts[0].trim(), "SELECT 1");
    assert_eq!(stmts[1].trim(), "SELECT 2");
}

#[test]
fn test_split_of_empty_input_is_empty() {
    require_native!();
    assert!(postgast::split("").unwrap().is_empty());
}

#[test]
fn test_scanner_split_tolerates_broken_statements() {
    require_native!();
    let stmts = postgast::split_with_scanner("SELECT 1; this is not sql; SELECT 2").unwrap();
    assert_eq!(stmts.len(), 3);
}

#[test]
fn test_parse_plpgsql_yields_function_objects() {
    require_native!();
    let sql = "CREATE FUNCTION inc(n integer) RETURNS integer AS $$
    BEGIN
        RETURN n + 1;
    END;
    $$ LANGUAGE plpgsql";
    let value = postgast::parse_plpgsql(sql).unwrap();
    let functions = value.as_array().expect("top level is an array");
    assert_eq!(functions.len(), 1);
    assert!(functions[0].get("PLpgSQL_function").is_some());
}

#[test]
fn test_walk_over_a_parsed_tree() {
    require_native!();
    let tree = postgast::parse("SELECT 1").unwrap();
    let tags: Vec<NodeTag> = postgast::walk(&tree).map(|(_, n)| n.tag()).collect();
    assert_eq!(
        tags,
        [
            NodeTag::ParseResult,
            NodeTag::RawStmt,
            NodeTag::SelectStmt,
            NodeTag::ResTarget,
            NodeTag::AConst,
            NodeTag::Integer,
        ],
    );
}

#[test]
fn test_helpers_on_parsed_trees() {
    require_native!();
    let tree = postgast::parse(
        "SELECT u.name, count(*) FROM public.users u JOIN orders o ON o.user_id = u.id",
    )
    .unwrap();
    assert_eq!(postgast::extract_tables(&tree), ["public.users", "orders"]);
    assert!(postgast::extract_columns(&tree).contains(&"u.name".to_string()));
    assert_eq!(postgast::extract_functions(&tree), ["count"]);
}

#[test]
fn test_to_drop_for_each_supported_shape() {
    require_native!();
    let cases = [
        (
            "CREATE FUNCTION public.add(a integer, b integer) RETURNS integer LANGUAGE sql AS $$ SELECT a + b $$",
            "DROP FUNCTION public.add(int, int)",
        ),
        (
            "CREATE FUNCTION do_stuff() RETURNS void LANGUAGE sql AS $$ SELECT 1 $$",
            "DROP FUNCTION do_stuff()",
        ),
        (
            "CREATE FUNCTION get_pair(IN x int, OUT a int, OUT b int) RETURNS RECORD LANGUAGE sql AS $$ SELECT 1, 2 $$",
            "DROP FUNCTION get_pair(int)",
        ),
        (
            "CREATE FUNCTION concat_all(VARIADIC items text[]) RETURNS text LANGUAGE sql AS $$ SELECT array_to_string(items, ',') $$",
            "DROP FUNCTION concat_all(text[])",
        ),
        (
            "CREATE OR REPLACE FUNCTION public.add(a integer, b integer) RETURNS integer LANGUAGE sql AS $$ SELECT a + b $$",
            "DROP FUNCTION public.add(int, int)",
        ),
        (
            "CREATE PROCEDURE do_thing(x int) LANGUAGE sql AS $$ SELECT 1 $$",
            "DROP PROCEDURE do_thing(int)",
        ),
        (
            "CREATE TRIGGER my_trg BEFORE INSERT ON public.t FOR EACH ROW EXECUTE FUNCTION public.fn()",
            "DROP TRIGGER my_trg ON public.t",
        ),
        ("CREATE VIEW public.v AS SELECT 1", "DROP VIEW public.v"),
        (
            "CREATE TABLE IF NOT EXISTS t (id int)",
            "DROP TABLE t",
        ),
        (
            "CREATE INDEX my_idx ON public.t (col)",
            "DROP INDEX public.my_idx",
        ),
        ("CREATE SEQUENCE public.my_seq", "DROP SEQUENCE public.my_seq"),
        ("CREATE SCHEMA myschema", "DROP SCHEMA myschema"),
        (
            "CREATE TYPE status AS ENUM ('active', 'inactive')",
            "DROP TYPE status",
        ),
        (
            "CREATE TYPE floatrange AS RANGE (subtype = float8)",
            "DROP TYPE floatrange",
        ),
        (
            "CREATE TYPE public.address AS (street text, city text)",
            "DROP TYPE public.address",
        ),
        (
            "CREATE MATERIALIZED VIEW public.mv AS SELECT 1",
            "DROP MATERIALIZED VIEW public.mv",
        ),
    ];
    for (create, expected) in cases {
        assert_eq!(postgast::to_drop(create).unwrap(), expected, "for {create:?}");
    }
}

#[test]
fn test_to_drop_quotes_identifiers_that_need_it() {
    require_native!();
    let sql = r#"CREATE FUNCTION "My Schema"."My Func"("My Param" integer) RETURNS integer LANGUAGE sql AS $$ SELECT 1 $$"#;
    assert_eq!(
        postgast::to_drop(sql).unwrap(),
        r#"DROP FUNCTION "My Schema"."My Func"(int)"#
    );
}

#[test]
fn test_to_drop_rejects_non_create_and_multi_statement_input() {
    require_native!();
    let err = postgast::to_drop("SELECT 1").unwrap_err();
    assert!(err.to_string().contains("unsupported statement type"));

    let err = postgast::to_drop("CREATE VIEW v AS SELECT 1; CREATE VIEW w AS SELECT 2").unwrap_err();
    assert!(err.to_string().contains("expected exactly one statement"));

    assert!(postgast::to_drop("").is_err());
    assert!(matches!(
        postgast::to_drop("CREATE FUNCTION ("),
        Err(Error::Native(_))
    ));
}

#[test]
fn test_ensure_or_replace_rewrites_eligible_statements() {
    require_native!();
    let rewritten = postgast::ensure_or_replace(
        "CREATE FUNCTION f() RETURNS int LANGUAGE sql AS $$ SELECT 1 $$; \
         CREATE VIEW v AS SELECT 1; \
         CREATE TABLE t (id int)",
    )
    .unwrap();
    assert!(rewritten.contains("CREATE OR REPLACE FUNCTION"));
    assert!(rewritten.contains("CREATE OR REPLACE VIEW"));
    // CREATE TABLE has no OR REPLACE form and passes through unchanged.
    assert!(rewritten.contains("CREATE TABLE t"));
    assert!(!rewritten.contains("OR REPLACE TABLE"));
}

#[test]
fn test_unterminated_input_fails_cleanly_in_every_operation() {
    require_native!();
    for sql in ["SELECT 'abc", "SELECT 1 /* never closed"] {
        assert!(
            matches!(postgast::parse(sql), Err(Error::Native(_))),
            "parse of {sql:?}"
        );
        assert!(
            matches!(postgast::parse_json(sql), Err(Error::Native(_))),
            "parse_json of {sql:?}"
        );
        assert!(
            matches!(postgast::normalize(sql), Err(Error::Native(_))),
            "normalize of {sql:?}"
        );
        assert!(
            matches!(postgast::fingerprint(sql), Err(Error::Native(_))),
            "fingerprint of {sql:?}"
        );
        assert!(
            matches!(postgast::scan(sql), Err(Error::Native(_))),
            "scan of {sql:?}"
        );
        assert!(
            matches!(postgast::split(sql), Err(Error::Native(_))),
            "split of {sql:?}"
        );
        // The scanner-based splitter tolerates unparseable statements; it
        // must still return rather than crash, and any failure it does
        // report must be a structured native error.
        assert!(
            matches!(
                postgast::split_with_scanner(sql),
                Ok(_) | Err(Error::Native(_))
            ),
            "split_with_scanner of {sql:?}"
        );
        assert!(
            matches!(postgast::parse_plpgsql(sql), Err(Error::Native(_))),
            "parse_plpgsql of {sql:?}"
        );
    }
}

#[test]
fn test_interleaved_failures_do_not_poison_later_calls() {
    require_native!();
    for i in 0..50 {
        let bad = postgast::parse(&format!("SELECT * FROM WHERE {i}"));
        assert!(bad.is_err());
        let good = postgast::parse(&format!("SELECT {i}")).unwrap();
        assert_eq!(good.stmts.len(), 1);
        let normalized = postgast::normalize(&format!("SELECT {i}")).unwrap();
        assert_eq!(normalized, "SELECT $1");
    }
}

#[test]
fn test_embedded_nul_is_treated_as_terminator() {
    require_native!();
    let tree = postgast::parse("SELECT 1\0 SELECT garbage").unwrap();
    assert_eq!(tree.stmts.len(), 1);
}
