//! Table DDL and database bootstrap.

use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Creation order follows the foreign keys.
const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id SERIAL PRIMARY KEY,
        comp_code TEXT NOT NULL REFERENCES companies ON DELETE CASCADE,
        amt DOUBLE PRECISION NOT NULL,
        paid BOOLEAN NOT NULL DEFAULT false,
        add_date DATE NOT NULL DEFAULT CURRENT_DATE,
        paid_date DATE,
        CONSTRAINT invoices_amt_check CHECK (amt > 0)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS industries (
        code TEXT PRIMARY KEY,
        industry TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS industry_company (
        company_code TEXT NOT NULL REFERENCES companies ON DELETE CASCADE,
        industry_code TEXT NOT NULL REFERENCES industries ON DELETE CASCADE,
        PRIMARY KEY (company_code, industry_code)
    )
    "#,
];

/// Create the four BizTime tables if they do not exist. Existing tables are left untouched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(tables = SCHEMA_DDL.len(), "schema ready");
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not. Connects to the
/// `postgres` maintenance database on the same server to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_target(database_url)?;
    let Some(db_name) = db_name.filter(|name| !name.is_empty() && name != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Connect options for the `postgres` database on the same server, and the database the URL names.
fn admin_target(database_url: &str) -> Result<(PgConnectOptions, Option<String>), sqlx::Error> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = opts.get_database().map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
