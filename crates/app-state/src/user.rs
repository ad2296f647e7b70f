//! Current-user query client
//!
//! A cached query for the signed-in user's profile. The query takes no
//! parameters, so there is exactly one cache slot, shared by every caller
//! until it is invalidated or refetched. Concurrent callers racing an
//! empty cache collapse into a single network request.
//!
//! Retry on transient failure belongs to the transport
//! ([`networking::HttpClient`]); this client only surfaces the final
//! pending/succeeded/failed status to its subscribers.

use app_core::config::AppConfig;
use app_core::users::UserInfo;
use async_trait::async_trait;
use networking::{HttpClient, HttpError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

/// User query error types
#[derive(Debug, Error)]
pub enum UserQueryError {
    /// Transport-level failure (after the transport's own retries)
    #[error("User info fetch failed: {0}")]
    Fetch(#[from] HttpError),
}

/// Result type for user query operations
pub type Result<T> = std::result::Result<T, UserQueryError>;

/// Observable state of the user query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    /// No fetch has happened yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Success,
    /// The last fetch failed
    Error,
}

/// Point-in-time view of the user query for subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfoSnapshot {
    /// Current query state
    pub state: QueryState,
    /// Last successfully fetched profile, if any
    pub data: Option<UserInfo>,
    /// Message of the last failure, if any
    pub error: Option<String>,
}

/// Source of the current-user profile
#[async_trait]
pub trait UserInfoSource: Send + Sync {
    /// Fetch the signed-in user's profile
    async fn fetch_user_info(&self) -> Result<UserInfo>;
}

/// User-info source backed by the people service
pub struct UserInfoApi {
    http: HttpClient,
    url: String,
}

impl UserInfoApi {
    /// Create a source against the configured user-info endpoint
    pub fn new(http: HttpClient, config: &AppConfig) -> Self {
        Self {
            http,
            url: config.service_urls.user_info.clone(),
        }
    }
}

#[async_trait]
impl UserInfoSource for UserInfoApi {
    async fn fetch_user_info(&self) -> Result<UserInfo> {
        Ok(self.http.get_json(&self.url).await?)
    }
}

/// The single cache slot
#[derive(Debug)]
struct Slot {
    state: QueryState,
    data: Option<UserInfo>,
    error: Option<String>,
}

impl Slot {
    fn empty() -> Self {
        Self {
            state: QueryState::Idle,
            data: None,
            error: None,
        }
    }
}

/// Cached query client for the current user's profile
///
/// `get` is the eager subscription: it fetches on first use and serves the
/// cache afterwards. `refetch` is the lazy trigger: it always goes to the
/// network. Both update the same slot, so every subscriber observes the
/// same status surface.
pub struct UserInfoClient<S> {
    source: Arc<S>,
    slot: Arc<RwLock<Slot>>,
    // Serializes fetches so concurrent callers share one request
    fetch_guard: Arc<Mutex<()>>,
}

impl<S> Clone for UserInfoClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            slot: Arc::clone(&self.slot),
            fetch_guard: Arc::clone(&self.fetch_guard),
        }
    }
}

impl<S: UserInfoSource> UserInfoClient<S> {
    /// Create a client over the given source
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            slot: Arc::new(RwLock::new(Slot::empty())),
            fetch_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Get the user's profile, fetching it on first use
    ///
    /// Callers arriving while a fetch is in flight wait for it and share
    /// its result instead of issuing a duplicate request.
    pub async fn get(&self) -> Result<UserInfo> {
        if let Some(user) = self.cached().await {
            tracing::debug!("user info cache hit");
            return Ok(user);
        }

        let _guard = self.fetch_guard.lock().await;
        // A caller that held the guard may have filled the slot meanwhile
        if let Some(user) = self.cached().await {
            return Ok(user);
        }
        self.fetch_into_slot().await
    }

    /// Force a fresh fetch, replacing the cached profile
    pub async fn refetch(&self) -> Result<UserInfo> {
        let _guard = self.fetch_guard.lock().await;
        self.fetch_into_slot().await
    }

    /// Drop the cached profile and return the query to idle
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = Slot::empty();
    }

    /// Current observable state
    pub async fn state(&self) -> QueryState {
        self.slot.read().await.state
    }

    /// Point-in-time view of the query for subscribers
    pub async fn snapshot(&self) -> UserInfoSnapshot {
        let slot = self.slot.read().await;
        UserInfoSnapshot {
            state: slot.state,
            data: slot.data.clone(),
            error: slot.error.clone(),
        }
    }

    async fn cached(&self) -> Option<UserInfo> {
        let slot = self.slot.read().await;
        match slot.state {
            QueryState::Success => slot.data.clone(),
            _ => None,
        }
    }

    /// Runs with the fetch guard held
    async fn fetch_into_slot(&self) -> Result<UserInfo> {
        {
            let mut slot = self.slot.write().await;
            slot.state = QueryState::Loading;
            slot.error = None;
        }

        match self.source.fetch_user_info().await {
            Ok(user) => {
                let mut slot = self.slot.write().await;
                slot.state = QueryState::Success;
                slot.data = Some(user.clone());
                slot.error = None;
                Ok(user)
            }
            Err(error) => {
                tracing::warn!(%error, "user info fetch failed");
                let mut slot = self.slot.write().await;
                slot.state = QueryState::Error;
                // The last good profile is kept for subscribers that
                // prefer stale data over an empty screen
                slot.error = Some(error.to_string());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    mock! {
        Source {}

        #[async_trait]
        impl UserInfoSource for Source {
            async fn fetch_user_info(&self) -> Result<UserInfo>;
        }
    }

    fn sample_user() -> UserInfo {
        UserInfo {
            employee_id: "E1042".to_string(),
            first_name: "Amara".to_string(),
            last_name: "Osei".to_string(),
            work_email: "amara.osei@meridian.example".to_string(),
            employee_thumbnail: None,
            job_role: "Software Engineer".to_string(),
            privileges: vec![101, 205],
        }
    }

    /// Source that counts fetches and resolves slowly
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UserInfoSource for CountingSource {
        async fn fetch_user_info(&self) -> Result<UserInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(sample_user())
        }
    }

    #[tokio::test]
    async fn test_get_fetches_then_serves_cache() {
        let mut source = MockSource::new();
        source
            .expect_fetch_user_info()
            .times(1)
            .returning(|| Ok(sample_user()));

        let client = UserInfoClient::new(source);
        assert_eq!(client.state().await, QueryState::Idle);

        let first = client.get().await.unwrap();
        let second = client.get().await.unwrap();

        assert_eq!(first, sample_user());
        assert_eq!(second, sample_user());
        assert_eq!(client.state().await, QueryState::Success);
    }

    #[tokio::test]
    async fn test_concurrent_subscribers_share_one_request() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
        };
        let client = UserInfoClient::new(source);

        let (a, b, c, d) = tokio::join!(client.get(), client.get(), client.get(), client.get());

        assert_eq!(a.unwrap(), sample_user());
        assert_eq!(b.unwrap(), sample_user());
        assert_eq!(c.unwrap(), sample_user());
        assert_eq!(d.unwrap(), sample_user());
        assert_eq!(client.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refetch_always_goes_to_network() {
        let mut source = MockSource::new();
        source
            .expect_fetch_user_info()
            .times(2)
            .returning(|| Ok(sample_user()));

        let client = UserInfoClient::new(source);
        client.get().await.unwrap();
        client.refetch().await.unwrap();
    }

    #[tokio::test]
    async fn test_invalidate_clears_slot() {
        let mut source = MockSource::new();
        source
            .expect_fetch_user_info()
            .times(2)
            .returning(|| Ok(sample_user()));

        let client = UserInfoClient::new(source);
        client.get().await.unwrap();

        client.invalidate().await;
        let snapshot = client.snapshot().await;
        assert_eq!(snapshot.state, QueryState::Idle);
        assert_eq!(snapshot.data, None);

        // Next get fetches again
        client.get().await.unwrap();
    }

    #[tokio::test]
    async fn test_failure_surfaces_error_state() {
        let mut source = MockSource::new();
        source.expect_fetch_user_info().times(1).returning(|| {
            Err(UserQueryError::Fetch(HttpError::Status { status: 503 }))
        });

        let client = UserInfoClient::new(source);
        assert!(client.get().await.is_err());

        let snapshot = client.snapshot().await;
        assert_eq!(snapshot.state, QueryState::Error);
        assert!(snapshot.error.unwrap().contains("503"));
        assert_eq!(snapshot.data, None);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_last_good_profile() {
        let mut source = MockSource::new();
        source
            .expect_fetch_user_info()
            .times(1)
            .returning(|| Ok(sample_user()));
        source.expect_fetch_user_info().times(1).returning(|| {
            Err(UserQueryError::Fetch(HttpError::Status { status: 500 }))
        });

        let client = UserInfoClient::new(source);
        client.get().await.unwrap();
        assert!(client.refetch().await.is_err());

        let snapshot = client.snapshot().await;
        assert_eq!(snapshot.state, QueryState::Error);
        assert_eq!(snapshot.data, Some(sample_user()));
    }

    #[tokio::test]
    async fn test_snapshot_after_success() {
        let mut source = MockSource::new();
        source
            .expect_fetch_user_info()
            .times(1)
            .returning(|| Ok(sample_user()));

        let client = UserInfoClient::new(source);
        client.get().await.unwrap();

        let snapshot = client.snapshot().await;
        assert_eq!(snapshot.state, QueryState::Success);
        assert_eq!(snapshot.data, Some(sample_user()));
        assert_eq!(snapshot.error, None);
    }
}
