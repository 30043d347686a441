//! Persistence: connection pool, migrations, and the visitor ledger.

mod ledger;
mod migrations;
mod pool;

pub use ledger::{VisitorLedger, VisitorRecord};
pub use migrations::run_migrations;
pub use pool::init_db_pool_with_path;
