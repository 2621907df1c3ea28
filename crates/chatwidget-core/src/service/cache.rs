//! In-memory LRU cache of question → reply.
//!
//! Saves provider round-trips for repeated questions. Keys are normalized
//! (trimmed, lowercased) so trivial variations share an entry.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

/// Thread-safe LRU reply cache shared by request handlers.
///
/// The lock is never held across an await point.
pub struct ReplyCache {
    entries: Mutex<LruCache<String, String>>,
}

impl ReplyCache {
    /// A cache holding at most `capacity` replies (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cache key for a question.
    pub fn normalize_key(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Look up a reply, marking it most recently used.
    pub fn get(&self, question: &str) -> Option<String> {
        let key = Self::normalize_key(question);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&key).cloned()
    }

    /// Store a reply, evicting the least recently used entry when full.
    pub fn insert(&self, question: &str, reply: String) {
        let key = Self::normalize_key(question);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.put(key, reply);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ReplyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyCache").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_uses_normalized_key() {
        let cache = ReplyCache::new(4);
        cache.insert("  Do you have WiFi? ", "Yes.".to_string());
        assert_eq!(cache.get("do you have wifi?").as_deref(), Some("Yes."));
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = ReplyCache::new(2);
        cache.insert("a", "1".to_string());
        cache.insert("b", "2".to_string());
        // touch "a" so "b" becomes the eviction candidate
        assert!(cache.get("a").is_some());
        cache.insert("c", "3".to_string());

        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_none());
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        assert_eq!(cache.get("c").as_deref(), Some("3"));
    }

    #[test]
    fn test_insert_overwrites_existing_key() {
        let cache = ReplyCache::new(2);
        cache.insert("q", "old".to_string());
        cache.insert("Q", "new".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("q").as_deref(), Some("new"));
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let cache = ReplyCache::new(0);
        assert!(cache.is_empty());
        cache.insert("q", "r".to_string());
        assert_eq!(cache.len(), 1);
    }
}
