// src/app.rs
use crate::auth::magic::MagicLinkConfig;
use crate::auth::sessions::SessionUser;
use crate::catalog::cache::CatalogCache;
use crate::config::AppConfig;
use crate::db::Database;
use crate::local_store::FileStore;
use crate::mailer::BrevoMailer;
use crate::wishlist::Wishlist;

/// Everything a request handler can reach. Shared read-only by all workers.
pub struct App {
    pub db: Database,
    pub config: AppConfig,
    pub mailer: Option<BrevoMailer>,
    data: FileStore,
}

impl App {
    pub fn new(db: Database, config: AppConfig) -> Self {
        let mailer = config
            .mail
            .as_ref()
            .map(|mail| BrevoMailer::new(mail, &config.app_name));
        let data = FileStore::new(&config.data_dir);
        Self {
            db,
            config,
            mailer,
            data,
        }
    }

    pub fn magic_link_config(&self) -> MagicLinkConfig {
        MagicLinkConfig::from_app(&self.config)
    }

    pub fn catalog_cache(&self) -> CatalogCache {
        CatalogCache::new(self.data.clone())
    }

    /// Each user's wishlist lives in its own directory.
    pub fn wishlist_for(&self, user: &SessionUser) -> Wishlist {
        Wishlist::new(self.data.scoped("users").scoped(&user.user_id.to_string()))
    }
}
