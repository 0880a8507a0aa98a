//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` and applies or reverts the posts schema, e.g.
//! `migration up` or `migration down`. The CLI installs its own tracing
//! subscriber (`-v` for debug output).

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(migration::Migrator).await;
}
