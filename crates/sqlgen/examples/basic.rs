//! Walk through each statement kind.
//!
//! Run with:
//!   RUST_LOG=sqlgen=debug cargo run --example basic -p sqlgen

use sqlgen::{GeneratorConfig, Joiner, Row, SqlGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), sqlgen::SqlGenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GeneratorConfig::new().terminate_statements(true);
    let mut sql = SqlGenerator::with_config(config);

    println!("=== SELECT ===");
    sql.select(["id", "username"])
        .from("users")
        .where_("status", "= 'active'")
        .where_field("role_id")
        .in_([1, 2, 3])
        .where_field("username")
        .like("'%admin%'")
        .where_with("deleted_at", "IS NULL", "or".parse::<Joiner>()?)
        .order_by("id DESC")
        .limit(20);
    println!("{}", sql.sql());

    println!("\n=== INSERT ===");
    sql.insert([
        Row::new().value("username", "'alice'").value("role_id", 1),
        Row::new().value("username", "'bob'").value("role_id", 2),
    ])
    .into_table("users");
    println!("{}", sql.sql());

    println!("\n=== UPDATE ===");
    sql.update("users")
        .set("status", "'inactive'")
        .where_("last_login", "< NOW() - INTERVAL '1 year'");
    println!("{}", sql.sql());

    println!("\n=== DELETE ===");
    sql.delete("sessions").where_raw("expires_at < NOW()").limit(500);
    println!("{}", sql.try_get_sql(true)?);

    println!("\n=== ALTER TABLE ===");
    sql.alter_table("users");
    println!("{}", sql.sql());

    println!("\n=== Raw ===");
    sql.set_sql("SELECT version()");
    println!("{}", sql.sql());

    println!("\nlast snapshot: {:?}", sql.snapshots());
    Ok(())
}
