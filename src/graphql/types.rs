use crate::model::{Tweet as ModelTweet, User as ModelUser, format_full_name};
use crate::storage::SharedStore;
use async_graphql::{ComplexObject, Context, ID, SimpleObject};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
}

#[ComplexObject]
impl User {
    /// First and last name separated by a space
    async fn full_name(&self) -> String {
        format_full_name(&self.first_name, &self.last_name)
    }
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            first_name: u.first_name,
            last_name: u.last_name,
        }
    }
}

impl From<&ModelUser> for User {
    fn from(u: &ModelUser) -> Self {
        u.clone().into()
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Tweet {
    pub id: ID,
    pub text: Option<String>,
    #[graphql(skip)]
    pub user_id: Option<String>,
}

#[ComplexObject]
impl Tweet {
    /// The user referenced by this tweet, or null if no such user exists
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let Some(user_id) = self.user_id.as_deref() else {
            return Ok(None);
        };
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.find_user(user_id).map(User::from))
    }
}

impl From<ModelTweet> for Tweet {
    fn from(t: ModelTweet) -> Self {
        Self {
            id: ID(t.id),
            text: t.text,
            user_id: t.user_id,
        }
    }
}

impl From<&ModelTweet> for Tweet {
    fn from(t: &ModelTweet) -> Self {
        t.clone().into()
    }
}
