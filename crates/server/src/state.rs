use crate::config::{Role, ServerConfig};
use crate::error::ServerResult;
use chrono::Utc;
use dashmap::DashMap;
use faq::{seed_faqs, FaqStore, Matcher, UniformPicker, VariantPicker};
use serde::Serialize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Authenticated user attached to a session token.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub id: u32,
    pub email: String,
    pub role: Role,
    pub name: String,
}

/// Metadata for one uploaded repository file. The bytes live on disk under
/// the configured uploads directory; `path` is the stored filename.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub uploaded_by: String,
    pub uploaded_at: String,
    pub size: String,
    pub download_count: u32,
    pub path: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
}

/// A content-change event served to polling clients.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// One turn of the chat transcript.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    #[serde(rename = "type")]
    pub role: ChatRole,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub timestamp: String,
}

/// Transcript bounds: once the log reaches the ceiling it is trimmed back
/// to the most recent `CHAT_HISTORY_KEEP` turns.
const CHAT_HISTORY_LIMIT: usize = 100;
const CHAT_HISTORY_KEEP: usize = 50;

/// Shared application state
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// FAQ relevance matcher (stateless, shared across requests)
    pub matcher: Matcher,

    /// Variant-selection policy for equally-weighted canned replies
    pub picker: Arc<dyn VariantPicker>,

    /// Session token -> user
    sessions: DashMap<String, SessionUser>,

    store: RwLock<FaqStore>,
    files: RwLock<Vec<StoredFile>>,
    notifications: RwLock<Vec<Notification>>,
    chat_history: RwLock<Vec<ChatTurn>>,
}

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl AppState {
    /// Create new application state with the production picker.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        Self::with_picker(config, Arc::new(UniformPicker))
    }

    /// Create state with an explicit variant picker. Tests inject a fixed
    /// picker here so canned-reply assertions are deterministic.
    pub fn with_picker(
        config: ServerConfig,
        picker: Arc<dyn VariantPicker>,
    ) -> ServerResult<Self> {
        let store = match &config.data_file {
            Some(path) => FaqStore::open(path, seed_faqs())?,
            None => FaqStore::in_memory(seed_faqs()),
        };

        std::fs::create_dir_all(&config.uploads_dir)?;

        Ok(Self {
            config: Arc::new(config),
            matcher: Matcher::new(),
            picker,
            sessions: DashMap::new(),
            store: RwLock::new(store),
            files: RwLock::new(Vec::new()),
            notifications: RwLock::new(Vec::new()),
            chat_history: RwLock::new(Vec::new()),
        })
    }

    pub fn store(&self) -> RwLockReadGuard<'_, FaqStore> {
        read_lock(&self.store)
    }

    pub fn store_mut(&self) -> RwLockWriteGuard<'_, FaqStore> {
        write_lock(&self.store)
    }

    pub fn files(&self) -> RwLockReadGuard<'_, Vec<StoredFile>> {
        read_lock(&self.files)
    }

    pub fn files_mut(&self) -> RwLockWriteGuard<'_, Vec<StoredFile>> {
        write_lock(&self.files)
    }

    /// Validate credentials and open a session; returns the token and the
    /// logged-in user on success.
    pub fn login(&self, email: &str, password: &str) -> Option<(String, SessionUser)> {
        let (index, account) = self
            .config
            .users
            .iter()
            .enumerate()
            .find(|(_, u)| u.email == email && u.password == password)?;

        let user = SessionUser {
            id: index as u32 + 1,
            email: account.email.clone(),
            role: account.role,
            name: account.name.clone(),
        };
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), user.clone());
        Some((token, user))
    }

    /// Resolve a session token to its user.
    pub fn session(&self, token: &str) -> Option<SessionUser> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    /// Append a notification.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let mut notifications = write_lock(&self.notifications);
        let id = notifications.len() as u32 + 1;
        notifications.push(Notification {
            id,
            message: message.into(),
            kind,
            timestamp: Utc::now().to_rfc3339(),
        });
    }

    /// The most recent `limit` notifications, newest first.
    pub fn recent_notifications(&self, limit: usize) -> Vec<Notification> {
        let notifications = read_lock(&self.notifications);
        notifications.iter().rev().take(limit).cloned().collect()
    }

    /// Append a user/bot turn pair, trimming the transcript at its bound.
    pub fn record_chat(&self, user_turn: ChatTurn, bot_turn: ChatTurn) {
        let mut history = write_lock(&self.chat_history);
        history.push(user_turn);
        history.push(bot_turn);
        if history.len() > CHAT_HISTORY_LIMIT {
            let excess = history.len() - CHAT_HISTORY_KEEP;
            history.drain(0..excess);
        }
    }

    pub fn chat_log(&self) -> Vec<ChatTurn> {
        read_lock(&self.chat_history).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn test_state() -> AppState {
        let config = ServerConfig {
            users: ServerConfig::demo_users(),
            uploads_dir: std::env::temp_dir().join("campus-state-tests"),
            ..ServerConfig::default()
        };
        AppState::new(config).unwrap()
    }

    #[test]
    fn login_round_trips_through_session_lookup() {
        let state = test_state();
        let (token, user) = state.login("admin@college.com", "admin123").unwrap();
        assert_eq!(user.role, Role::Admin);
        let resolved = state.session(&token).unwrap();
        assert_eq!(resolved.email, "admin@college.com");
        assert!(state.login("admin@college.com", "wrong").is_none());
    }

    #[test]
    fn chat_history_is_trimmed_at_the_bound() {
        let state = test_state();
        for i in 0..60 {
            let stamp = Utc::now().to_rfc3339();
            state.record_chat(
                ChatTurn {
                    role: ChatRole::User,
                    message: format!("q{i}"),
                    user: Some("t".into()),
                    timestamp: stamp.clone(),
                },
                ChatTurn {
                    role: ChatRole::Bot,
                    message: format!("a{i}"),
                    user: None,
                    timestamp: stamp,
                },
            );
        }
        let log = state.chat_log();
        assert!(log.len() <= CHAT_HISTORY_LIMIT);
        // The newest turn always survives trimming.
        assert_eq!(log.last().unwrap().message, "a59");
    }

    #[test]
    fn notifications_are_served_newest_first() {
        let state = test_state();
        for i in 0..12 {
            state.notify(format!("event {i}"), NotificationKind::Info);
        }
        let recent = state.recent_notifications(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].message, "event 11");
        assert_eq!(recent[9].message, "event 2");
    }
}
