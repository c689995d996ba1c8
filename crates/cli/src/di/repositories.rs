use guesswin_infrastructure::repositories::SqliteDocumentStore;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub documents: Arc<SqliteDocumentStore>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            documents: Arc::new(SqliteDocumentStore::new(pool)),
        }
    }
}
