mod error;
mod tickets_repository;

pub use error::*;
pub use tickets_repository::*;

#[cfg(test)]
mod test {
    use mongodb::{options::ClientOptions, Client, Database};
    use uuid::Uuid;

    ///
    /// `None` when no database is configured, tests using it return early
    ///
    pub async fn create_test_database() -> Option<Database> {
        let Ok(db_connection_string) = std::env::var("QR_TICKETING_DB_CONNECTION_STRING") else {
            println!("QR_TICKETING_DB_CONNECTION_STRING not set, skipping");
            return None;
        };
        let db_name = format!("test_{}", Uuid::new_v4());

        println!("creating test database: {db_name}");

        let db_client_options = ClientOptions::parse(db_connection_string).await.unwrap();
        let db_client = Client::with_options(db_client_options).unwrap();

        Some(db_client.database(&db_name))
    }

    pub async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }
}
