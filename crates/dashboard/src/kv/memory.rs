//! In-process key-value store.
//!
//! Mirrors the Redis semantics the dashboard relies on: reading a missing
//! set yields no members, and reading a set from a key that holds a plain
//! string fails with a type error.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::KvStore;
use crate::error::AppResult;

#[derive(Debug, Clone)]
enum Entry {
    Value(String),
    Set(HashSet<String>),
}

/// Key-value store held in memory, shared across clones.
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    data: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryKvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add members to the set at `key`, creating it when missing.
    pub async fn sadd<I, S>(&self, key: &str, members: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data = self.data.write().await;
        let entry = data
            .entry(key.to_string())
            .or_insert_with(|| Entry::Set(HashSet::new()));
        match entry {
            Entry::Set(set) => {
                let mut added = 0;
                for member in members {
                    if set.insert(member.into()) {
                        added += 1;
                    }
                }
                Ok(added)
            }
            Entry::Value(_) => Err(wrong_type()),
        }
    }

    /// Plain string value at `key`.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.data.read().await.get(key) {
            Some(Entry::Value(v)) => Some(v.clone()),
            _ => None,
        }
    }
}

fn wrong_type() -> crate::error::AppError {
    redis::RedisError::from((
        redis::ErrorKind::TypeError,
        "WRONGTYPE Operation against a key holding the wrong kind of value",
    ))
    .into()
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn smembers(&self, key: &str) -> AppResult<Vec<String>> {
        match self.data.read().await.get(key) {
            Some(Entry::Set(set)) => Ok(set.iter().cloned().collect()),
            Some(Entry::Value(_)) => Err(wrong_type()),
            None => Ok(Vec::new()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.data
            .write()
            .await
            .insert(key.to_string(), Entry::Value(value.to_string()));
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
