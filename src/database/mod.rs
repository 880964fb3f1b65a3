use crate::config::Config;
use crate::models::{Movie, User, WatchlistItem};
use crate::utils::AppResult;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

pub const USERS: &str = "users";
pub const MOVIES: &str = "movies";
pub const WATCHLIST: &str = "watchlist";

/// Shared store handle; cloning is cheap and shares the driver's pool
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        client_options.app_name = Some("moviemaster-service".to_string());
        client_options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let mongodb = Self::from_client(client, &config.db_name);

        mongodb.ping().await?;
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Wraps an existing client without touching the network
    pub fn from_client(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self { client, db }
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Lookup indexes for the email-keyed queries and the rating sort.
    /// Non-unique on purpose: the store never enforced email uniqueness.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let indexes = [
            (USERS, "email"),
            (MOVIES, "addedBy"),
            (MOVIES, "rating"),
            (WATCHLIST, "userEmail"),
        ];

        for (collection, field) in indexes {
            let model = IndexModel::builder().keys(doc! { field: 1 }).build();
            match self
                .db
                .collection::<mongodb::bson::Document>(collection)
                .create_index(model)
                .await
            {
                Ok(_) => log::info!("   ✅ Index ready: {}({})", collection, field),
                Err(e) => log::warn!("   ⚠️  Index {}({}) not created: {}", collection, field, e),
            }
        }
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(USERS)
    }

    pub fn movies(&self) -> Collection<Movie> {
        self.db.collection(MOVIES)
    }

    pub fn watchlist(&self) -> Collection<WatchlistItem> {
        self.db.collection(WATCHLIST)
    }

    /// Waits for in-flight operations, then closes every pooled connection
    pub async fn shutdown(self) {
        log::info!("🔌 Closing MongoDB connections...");
        self.client.shutdown().await;
        log::info!("✅ MongoDB connections closed");
    }
}
