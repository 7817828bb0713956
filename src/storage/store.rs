use crate::{
    config::IdMode,
    error::{Result, TweetqlError},
    model::{Tweet, User},
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store handle shared between resolvers and the HTTP server.
pub type SharedStore = Arc<RwLock<Store>>;

const RANDOM_ID_LENGTH: usize = 8;

/// In-memory owner of the user and tweet collections.
///
/// All reads and writes go through the methods below. Users are read-only
/// once the store is built; tweets can be appended and removed.
#[derive(Debug)]
pub struct Store {
    users: Vec<User>,
    tweets: Vec<Tweet>,
    id_mode: IdMode,
    /// `None` once the sequential counter has run past `u64::MAX`.
    next_tweet_id: Option<u64>,
}

impl Store {
    pub fn new(id_mode: IdMode) -> Self {
        Self {
            users: Vec::new(),
            tweets: Vec::new(),
            id_mode,
            next_tweet_id: Some(1),
        }
    }

    /// Store populated with the two default users and two default tweets.
    pub fn seeded(id_mode: IdMode) -> Self {
        let users = vec![User::new("1", "nico", "last"), User::new("2", "Elon", "Mask")];
        let tweets = vec![
            Tweet::new("1")
                .with_text(Some("hello".to_string()))
                .with_user_id(Some("2".to_string())),
            Tweet::new("2")
                .with_text(Some("bye".to_string()))
                .with_user_id(Some("1".to_string())),
        ];

        Self {
            next_tweet_id: next_sequential_id(&tweets),
            users,
            tweets,
            id_mode,
        }
    }

    /// Build a store from existing rows, rejecting duplicate IDs.
    pub fn with_data(users: Vec<User>, tweets: Vec<Tweet>, id_mode: IdMode) -> Result<Self> {
        ensure_unique("user", users.iter().map(|u| u.id.as_str()))?;
        ensure_unique("tweet", tweets.iter().map(|t| t.id.as_str()))?;

        Ok(Self {
            next_tweet_id: next_sequential_id(&tweets),
            users,
            tweets,
            id_mode,
        })
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn list_tweets(&self) -> &[Tweet] {
        &self.tweets
    }

    pub fn find_tweet(&self, id: &str) -> Option<&Tweet> {
        self.tweets.iter().find(|t| t.id == id)
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Append a tweet with a freshly generated ID and return a copy of it.
    pub fn append_tweet(&mut self, text: Option<String>, user_id: Option<String>) -> Tweet {
        let id = self.generate_tweet_id();
        let tweet = Tweet::new(id).with_text(text).with_user_id(user_id);
        tracing::debug!(id = %tweet.id, user_id = ?tweet.user_id, "appended tweet");
        self.tweets.push(tweet.clone());
        tweet
    }

    /// Remove the tweet with `id`. Returns false and leaves the collection
    /// untouched when nothing matches.
    pub fn remove_tweet(&mut self, id: &str) -> bool {
        match self.tweets.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.tweets.remove(pos);
                tracing::debug!(id, "removed tweet");
                true
            }
            None => {
                tracing::debug!(id, "no tweet to remove");
                false
            }
        }
    }

    fn generate_tweet_id(&mut self) -> String {
        match self.id_mode {
            // Skip anything already taken, e.g. "3" seeded alongside "x".
            IdMode::Sequential => loop {
                let Some(next) = self.next_tweet_id else {
                    tracing::warn!("sequential tweet IDs exhausted, using random IDs");
                    return self.generate_random_tweet_id();
                };
                self.next_tweet_id = next.checked_add(1);
                let candidate = next.to_string();
                if self.find_tweet(&candidate).is_none() {
                    return candidate;
                }
            },
            IdMode::Random => self.generate_random_tweet_id(),
        }
    }

    fn generate_random_tweet_id(&self) -> String {
        loop {
            let candidate = random_id();
            if self.find_tweet(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

fn random_id() -> String {
    const ALPHABET: [char; 36] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
        'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ];
    nanoid::format(nanoid::rngs::default, &ALPHABET, RANDOM_ID_LENGTH)
}

/// One past the largest numeric tweet ID, or `len + 1` if none are numeric.
/// `None` when the largest numeric ID is already `u64::MAX`.
fn next_sequential_id(tweets: &[Tweet]) -> Option<u64> {
    match tweets.iter().filter_map(|t| t.id.parse::<u64>().ok()).max() {
        Some(max) => max.checked_add(1),
        None => Some(tweets.len() as u64 + 1),
    }
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(TweetqlError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &Store) -> Vec<&str> {
        store.list_tweets().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_seeded_contents() {
        let store = Store::seeded(IdMode::Sequential);
        assert_eq!(store.list_users().len(), 2);
        assert_eq!(ids(&store), vec!["1", "2"]);
        assert_eq!(store.find_user("2").unwrap().full_name(), "Elon Mask");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = Store::new(IdMode::Sequential);
        store.append_tweet(Some("a".to_string()), None);
        store.append_tweet(Some("b".to_string()), None);
        store.append_tweet(Some("c".to_string()), None);

        let texts: Vec<_> = store
            .list_tweets()
            .iter()
            .map(|t| t.text.as_deref().unwrap())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_find_uses_exact_equality() {
        let store = Store::seeded(IdMode::Sequential);
        assert!(store.find_tweet("1").is_some());
        assert!(store.find_tweet("01").is_none());
        assert!(store.find_tweet(" 1").is_none());
        assert!(store.find_user("1.0").is_none());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = Store::seeded(IdMode::Sequential);
        assert!(store.remove_tweet("1"));

        let tweet = store.append_tweet(Some("x".to_string()), Some("1".to_string()));
        assert_eq!(tweet.id, "3");
        assert_eq!(ids(&store), vec!["2", "3"]);

        // Deleting the newest tweet must not hand its ID out again.
        assert!(store.remove_tweet("3"));
        let tweet = store.append_tweet(None, None);
        assert_eq!(tweet.id, "4");
    }

    #[test]
    fn test_remove_missing_leaves_collection_unchanged() {
        let mut store = Store::seeded(IdMode::Sequential);
        let before = store.list_tweets().to_vec();

        assert!(!store.remove_tweet("99"));
        assert_eq!(store.list_tweets(), before.as_slice());
    }

    #[test]
    fn test_append_stores_dangling_user_id() {
        let mut store = Store::seeded(IdMode::Sequential);
        let tweet = store.append_tweet(Some("ghost".to_string()), Some("42".to_string()));
        assert_eq!(tweet.user_id.as_deref(), Some("42"));
        assert!(store.find_user("42").is_none());
        assert_eq!(store.find_tweet(&tweet.id), Some(&tweet));
    }

    #[test]
    fn test_random_ids_are_unique() {
        let mut store = Store::seeded(IdMode::Random);
        for _ in 0..50 {
            store.append_tweet(None, None);
        }
        let all = ids(&store);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        assert!(all[2..].iter().all(|id| id.len() == RANDOM_ID_LENGTH));
    }

    #[test]
    fn test_sequential_skips_taken_ids() {
        let tweets = vec![Tweet::new("x"), Tweet::new("2")];
        let mut store = Store::with_data(Vec::new(), tweets, IdMode::Sequential).unwrap();
        assert_eq!(store.append_tweet(None, None).id, "3");
    }

    #[test]
    fn test_sequential_counter_exhaustion_falls_back_to_random() {
        let tweets = vec![Tweet::new(u64::MAX.to_string())];
        let mut store = Store::with_data(Vec::new(), tweets, IdMode::Sequential).unwrap();

        let tweet = store.append_tweet(None, None);
        assert_eq!(tweet.id.len(), RANDOM_ID_LENGTH);
        assert_ne!(tweet.id, u64::MAX.to_string());

        let all = ids(&store);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_sequential_counter_reaches_max_without_wrapping() {
        let tweets = vec![Tweet::new((u64::MAX - 1).to_string())];
        let mut store = Store::with_data(Vec::new(), tweets, IdMode::Sequential).unwrap();

        assert_eq!(store.append_tweet(None, None).id, u64::MAX.to_string());
        let next = store.append_tweet(None, None);
        assert_ne!(next.id, "0");
        assert_ne!(next.id, "1");
        assert_eq!(next.id.len(), RANDOM_ID_LENGTH);
    }

    #[test]
    fn test_with_data_rejects_duplicate_ids() {
        let users = vec![User::new("1", "a", "b"), User::new("1", "c", "d")];
        let err = Store::with_data(users, Vec::new(), IdMode::Sequential).unwrap_err();
        assert!(matches!(err, TweetqlError::DuplicateId { kind: "user", .. }));

        let tweets = vec![Tweet::new("7"), Tweet::new("7")];
        let err = Store::with_data(Vec::new(), tweets, IdMode::Sequential).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate tweet ID: 7");
    }
}
