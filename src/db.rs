#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::product::{NewProduct, Product};
    use crate::models::review::{NewReview, Review};
    use leptos::logging::log;
    use rusqlite::{params, Connection, OptionalExtension, Params};
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use thiserror::Error;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("database error: {0}")]
        Sqlite(#[from] rusqlite::Error),

        #[error("corrupt document: {0}")]
        Document(#[from] serde_json::Error),

        #[error("invalid seed data: {0}")]
        InvalidSeed(String),
    }

    // Handle to the document store. Cloning shares the same connection.
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Open a store from a connection string (`sqlite://path`, `sqlite:path`, a path or `:memory:`)
        pub fn new(connection: &str) -> Result<Self, StoreError> {
            let path = connection_path(connection);
            let conn = Connection::open(path)?;
            log!("[DB] Connection established at: {}", path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create both collections if they are missing
        pub async fn create_schema(&self) -> Result<(), StoreError> {
            let conn = self.conn.lock().await;

            // Each collection is a table of JSON documents keyed by id
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS products (
                    id TEXT PRIMARY KEY,
                    doc TEXT NOT NULL
                );
                CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    doc TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS reviews_by_product
                    ON reviews (json_extract(doc, '$.productId'));",
            )
            .map_err(|e| {
                log!("[DB] Failed creating collections: {}", e);
                e
            })?;
            Ok(())
        }

        // Every product, in insertion order
        pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
            let conn = self.conn.lock().await;
            let products: Vec<Product> =
                query_documents(&conn, "SELECT doc FROM products ORDER BY rowid", [])?;
            log!("[DB] Fetched {} products", products.len());
            Ok(products)
        }

        pub async fn get_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
            let conn = self.conn.lock().await;
            let doc: Option<String> = conn
                .query_row("SELECT doc FROM products WHERE id = ?", [id], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(doc.map(|doc| serde_json::from_str(&doc)).transpose()?)
        }

        pub async fn count_products(&self) -> Result<i64, StoreError> {
            let conn = self.conn.lock().await;
            Ok(conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?)
        }

        #[cfg(test)]
        pub async fn insert_product(&self, product: &NewProduct) -> Result<Product, StoreError> {
            product.validate().map_err(StoreError::InvalidSeed)?;
            let product = product.with_id(new_id());
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO products (id, doc) VALUES (?, ?)",
                params![&product.id, serde_json::to_string(&product)?],
            )?;
            log!("[DB] Product inserted: {} ({})", product.name, product.id);
            Ok(product)
        }

        // Insert the seed products in order, but only into an empty collection.
        // Returns how many products were inserted.
        pub async fn seed_products(&self, products: &[NewProduct]) -> Result<usize, StoreError> {
            for product in products {
                product.validate().map_err(StoreError::InvalidSeed)?;
            }

            let mut conn = self.conn.lock().await;
            let existing: i64 =
                conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
            if existing > 0 {
                log!("[DB] Products already present ({}), skipping seed", existing);
                return Ok(0);
            }

            let tx = conn.transaction()?;
            for product in products {
                let product = product.with_id(new_id());
                tx.execute(
                    "INSERT INTO products (id, doc) VALUES (?, ?)",
                    params![&product.id, serde_json::to_string(&product)?],
                )?;
            }
            tx.commit()?;
            log!("[DB] Seeded {} products", products.len());
            Ok(products.len())
        }

        // Reviews whose productId matches, in insertion order
        pub async fn list_reviews(&self, product_id: &str) -> Result<Vec<Review>, StoreError> {
            let conn = self.conn.lock().await;
            let reviews: Vec<Review> = query_documents(
                &conn,
                "SELECT doc FROM reviews
                WHERE json_extract(doc, '$.productId') = ?
                ORDER BY rowid",
                [product_id],
            )?;
            log!("[DB] Fetched {} reviews for product {}", reviews.len(), product_id);
            Ok(reviews)
        }

        // The product reference is stored as given; it is not checked against products
        pub async fn insert_review(&self, review: &NewReview) -> Result<Review, StoreError> {
            let review = review.with_id(new_id());
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO reviews (id, doc) VALUES (?, ?)",
                params![&review.id, serde_json::to_string(&review)?],
            )?;
            log!("[DB] Review {} saved for product {}", review.id, review.product_id);
            Ok(review)
        }
    }

    fn connection_path(connection: &str) -> &str {
        connection
            .strip_prefix("sqlite://")
            .or_else(|| connection.strip_prefix("sqlite:"))
            .unwrap_or(connection)
    }

    fn new_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    fn query_documents<T, P>(conn: &Connection, sql: &str, params: P) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
        P: Params,
    {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| row.get::<_, String>(0))?;
        let mut documents = Vec::new();
        for doc in rows {
            documents.push(serde_json::from_str(&doc?)?);
        }
        Ok(documents)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            db
        }

        fn perfume(name: &str, price: f64) -> NewProduct {
            NewProduct {
                name: name.into(),
                description: format!("{} eau de parfum", name),
                price,
                images: vec![format!("/assets/{}.jpg", name.to_lowercase())],
                sizes: vec!["50ml".into(), "100ml".into()],
            }
        }

        fn review_for(product_id: &str, user_name: &str, rating: i64) -> NewReview {
            NewReview {
                product_id: product_id.into(),
                user_name: user_name.into(),
                rating,
                comment: format!("{} liked it", user_name),
            }
        }

        #[test]
        fn test_connection_path() {
            assert_eq!(connection_path("sqlite://data/store.db"), "data/store.db");
            assert_eq!(connection_path("sqlite::memory:"), ":memory:");
            assert_eq!(connection_path("store.db"), "store.db");
        }

        #[tokio::test]
        async fn test_schema_creation_is_idempotent() {
            let db = create_test_db().await;
            db.create_schema().await.unwrap();

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"products".to_string()));
            assert!(tables.contains(&"reviews".to_string()));
        }

        #[tokio::test]
        async fn test_products_keep_insertion_order() {
            let db = create_test_db().await;
            let first = db.insert_product(&perfume("Amber", 999.0)).await.unwrap();
            let second = db.insert_product(&perfume("Vetiver", 1299.0)).await.unwrap();

            let products = db.list_products().await.unwrap();
            assert_eq!(products, vec![first.clone(), second]);
            assert_eq!(first.id.len(), 32);

            let found = db.get_product(&first.id).await.unwrap().unwrap();
            assert_eq!(found.id, first.id);
            assert_eq!(found.name, "Amber");
            log!("[TEST] Product retrieval - PASSED");
        }

        #[tokio::test]
        async fn test_unknown_product_is_none() {
            let db = create_test_db().await;
            assert!(db.get_product("doesnotexist").await.unwrap().is_none());
            assert!(db.get_product("").await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_reviews_are_matched_by_product() {
            let db = create_test_db().await;
            let amber = db.insert_product(&perfume("Amber", 999.0)).await.unwrap();
            let musk = db.insert_product(&perfume("Musk", 499.0)).await.unwrap();

            let first = db.insert_review(&review_for(&amber.id, "Alice", 5)).await.unwrap();
            db.insert_review(&review_for(&musk.id, "Bob", 3)).await.unwrap();
            let second = db.insert_review(&review_for(&amber.id, "Carol", 4)).await.unwrap();

            let reviews = db.list_reviews(&amber.id).await.unwrap();
            assert_eq!(reviews, vec![first, second]);
            assert!(db.list_reviews("nobody").await.unwrap().is_empty());
            log!("[TEST] Review matching - PASSED");
        }

        #[tokio::test]
        async fn test_review_for_missing_product_is_stored() {
            let db = create_test_db().await;
            let saved = db.insert_review(&review_for("ghost", "Dan", 2)).await.unwrap();
            assert_eq!(db.list_reviews("ghost").await.unwrap(), vec![saved]);
        }

        #[tokio::test]
        async fn test_seed_only_fills_empty_collection() {
            let db = create_test_db().await;
            let seed = vec![perfume("Amber", 999.0), perfume("Musk", 499.0)];

            assert_eq!(db.seed_products(&seed).await.unwrap(), 2);
            assert_eq!(db.seed_products(&seed).await.unwrap(), 0);
            assert_eq!(db.count_products().await.unwrap(), 2);

            let names: Vec<String> = db
                .list_products()
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.name)
                .collect();
            assert_eq!(names, vec!["Amber", "Musk"]);
        }

        #[tokio::test]
        async fn test_invalid_seed_inserts_nothing() {
            let db = create_test_db().await;
            let mut broken = perfume("Broken", 10.0);
            broken.images.clear();

            let result = db.seed_products(&[perfume("Amber", 999.0), broken]).await;
            assert!(matches!(result, Err(StoreError::InvalidSeed(_))));
            assert_eq!(db.count_products().await.unwrap(), 0);
        }

        #[tokio::test]
        async fn test_missing_schema_is_a_store_error() {
            let db = Database::new(":memory:").unwrap();
            assert!(matches!(db.list_products().await, Err(StoreError::Sqlite(_))));
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{Database, StoreError};
