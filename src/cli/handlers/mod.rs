mod init;
mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::TweetqlConfig;
use crate::graphql::{TweetqlSchema, build_schema};
use crate::storage::{SharedStore, Store};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TweetqlConfig,
}

impl CommandContext {
    pub fn new(config: TweetqlConfig) -> Self {
        Self { config }
    }

    /// Fresh store built from the `store` config section.
    pub fn store(&self) -> SharedStore {
        let settings = &self.config.store;
        let store = if settings.seed {
            Store::seeded(settings.id_mode)
        } else {
            Store::new(settings.id_mode)
        };
        store.into_shared()
    }

    pub fn schema(&self) -> TweetqlSchema {
        build_schema(self.store())
    }
}
