use sqlgen::{Action, GeneratorConfig, Joiner, Row, SqlGenError, SqlGenerator};

#[test]
fn select_projection_and_tables() {
    let mut sql = SqlGenerator::new();
    assert_eq!(
        sql.select(["a", "b"]).from("t").get_sql(false),
        "SELECT a, b FROM t"
    );
    assert_eq!(
        sql.select(vec!["id".to_string()])
            .from(["users u", "roles r"])
            .where_("u.role_id", "= r.id")
            .get_sql(false),
        "SELECT id FROM users u, roles r WHERE u.role_id = r.id"
    );
}

#[test]
fn pending_field_protocol() {
    let mut sql = SqlGenerator::new();
    let text = sql
        .select("*")
        .from("t")
        .where_field("x")
        .in_([1, 2, 3])
        .where_field("name")
        .like("'%a%'")
        .get_sql(false);
    assert_eq!(
        text,
        "SELECT * FROM t WHERE x IN (1, 2, 3) AND name LIKE '%a%'"
    );
}

#[test]
fn in_accepts_strings_and_slices() {
    let ids: &[i64] = &[10, 20];
    let mut sql = SqlGenerator::new();
    sql.select("*")
        .from("t")
        .in_field("id", ids)
        .in_with("tag", vec!["'a'", "'b'"], Joiner::Or);
    assert_eq!(
        sql.get_sql(false),
        "SELECT * FROM t WHERE id IN (10, 20) OR tag IN ('a', 'b')"
    );
}

#[test]
fn multi_row_insert() {
    let rows: Vec<Row> = (1..=3)
        .map(|i| Row::new().value("id", i).value("score", i * 10))
        .collect();

    let mut sql = SqlGenerator::new();
    assert_eq!(
        sql.insert(rows).into_table("scores").get_sql(true),
        "INSERT INTO scores (id, score) VALUES (1, 10), (2, 20), (3, 30);"
    );
}

#[test]
fn update_then_delete_on_one_instance() {
    let mut sql = SqlGenerator::new();

    let update = sql
        .update("accounts")
        .set("balance", "balance - 5")
        .set("touched_at", "NOW()")
        .where_("id", "= 42")
        .get_sql(false);
    assert_eq!(
        update,
        "UPDATE accounts SET balance = balance - 5 touched_at = NOW() WHERE id = 42"
    );

    let delete = sql
        .delete("sessions")
        .where_("expires_at", "< NOW()")
        .or_sql("revoked", "= 1")
        .limit(100)
        .get_sql(false);
    assert_eq!(
        delete,
        "DELETE FROM sessions WHERE expires_at < NOW() OR revoked = 1 LIMIT 100"
    );
}

#[test]
fn no_leftovers_after_render() {
    let mut sql = SqlGenerator::new();
    sql.select(["a", "b"])
        .from("t")
        .where_("a", "= 1")
        .where_field("pending")
        .limit(5)
        .order_by("a");
    let _ = sql.get_sql(false);

    assert_eq!(sql.action(), Action::None);
    assert_eq!(sql.select("c").from("u").get_sql(false), "SELECT c FROM u");
}

#[test]
fn display_matches_get_sql_without_terminator() {
    let mut sql = SqlGenerator::new();
    sql.select("*").from("t").where_("x", "= 1").limit(1);

    let displayed = format!("{sql}");
    assert_eq!(format!("{displayed};"), sql.get_sql(true));
}

#[test]
fn reset_discards_statement() {
    let mut sql = SqlGenerator::new();
    sql.select("*").from("t").where_("x", "= 1");
    sql.reset(true);
    assert_eq!(sql.render(), "");
    assert!(sql.snapshots().is_empty());
}

#[test]
fn strict_config_from_toml() {
    let config = GeneratorConfig::from_toml_str("strict = true\nterminate_statements = true").unwrap();
    let mut sql = SqlGenerator::with_config(config);

    sql.update("t");
    assert!(matches!(sql.try_get_sql(false), Err(SqlGenError::Validation(_))));

    sql.set("a", 1);
    assert_eq!(sql.sql(), "UPDATE t SET a = 1;");
}

#[test]
fn pending_field_error_surfaces() {
    let mut sql = SqlGenerator::new();
    sql.delete("t").like("'x%'");
    assert_eq!(
        sql.try_get_sql(false),
        Err(SqlGenError::PendingFieldMissing { operation: "like" })
    );
    // Default path still renders
    assert_eq!(sql.get_sql(false), "DELETE FROM t WHERE  LIKE 'x%'");
}
