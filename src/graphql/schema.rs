use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::storage::SharedStore;

use super::types::*;

pub type TweetqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> TweetqlSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users
    async fn all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx)?.read().await;
        Ok(store.list_users().iter().map(User::from).collect())
    }

    /// All tweets, oldest first
    async fn all_tweets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Tweet>> {
        let store = get_store(ctx)?.read().await;
        Ok(store.list_tweets().iter().map(Tweet::from).collect())
    }

    /// A single tweet by ID, or null if it does not exist
    async fn tweet(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<Tweet>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?.read().await;
        Ok(store.find_tweet(&id).map(Tweet::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Post a new tweet
    async fn post_tweet(
        &self,
        ctx: &Context<'_>,
        text: Option<String>,
        user_id: Option<ID>,
    ) -> async_graphql::Result<Tweet> {
        let mut store = get_store(ctx)?.write().await;
        let tweet = store.append_tweet(text, user_id.map(|id| id.0));
        tracing::info!(id = %tweet.id, "posted tweet");
        Ok(tweet.into())
    }

    /// Delete a tweet; returns false if no tweet has that ID
    async fn delete_tweet(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<bool>> {
        let Some(id) = id else {
            return Ok(Some(false));
        };
        let mut store = get_store(ctx)?.write().await;
        let removed = store.remove_tweet(&id);
        if removed {
            tracing::info!(id = %id.as_str(), "deleted tweet");
        }
        Ok(Some(removed))
    }
}
