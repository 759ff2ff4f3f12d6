#[macro_use]
extern crate log;

use portfolio_db_sqlite::Store;

mod core;
mod web;

pub async fn run(store: Store, enable_cors: bool) -> anyhow::Result<()> {
    web::run(store, enable_cors).await
}
