use chrono::Utc;
use tracing::{debug, info};

use super::{hash_password, verify_password, AuthError, NewUser, Session, SESSION_KEY};
use crate::domain::{Role, User, UserId};
use crate::error::StoreError;
use crate::medium::Medium;
use crate::store::Store;

/// Login, logout and registration against the `users` collection.
pub struct Sessions<'a, M> {
    store: &'a Store<M>,
}

impl<'a, M: Medium> Sessions<'a, M> {
    pub fn new(store: &'a Store<M>) -> Self {
        Self { store }
    }

    /// Create an active user. Usernames are unique, compared exactly.
    pub fn register(&self, new_user: NewUser) -> Result<User, AuthError> {
        if new_user.username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        let candidate = User {
            id: UserId::default(),
            username: new_user.username,
            password_hash: hash_password(&new_user.password),
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            active: true,
            created_at: Utc::now(),
        };
        let added = self
            .store
            .collection::<User>()
            .add_if(&candidate, |users| {
                users.iter().all(|u| u.username != candidate.username)
            })?;
        let Some(user) = added else {
            return Err(AuthError::UsernameTaken(candidate.username));
        };
        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Sign in. Succeeds only for an active user whose password verifies;
    /// the session is then persisted under [`SESSION_KEY`].
    pub fn login(&self, username: &str, password: &str) -> Result<Option<Session>, StoreError> {
        let found = self
            .store
            .collection::<User>()
            .filter(|u| {
                u.username == username && u.active && verify_password(&u.password_hash, password)
            })
            .into_iter()
            .next();

        let Some(user) = found else {
            debug!(username, "login rejected");
            return Ok(None);
        };

        let session = Session::from(&user);
        self.store.set_entry(SESSION_KEY, &session)?;
        info!(user_id = %session.user_id, "login");
        Ok(Some(session))
    }

    /// Drop the current session. Returns true if one existed.
    pub fn logout(&self) -> Result<bool, StoreError> {
        let existed = self.store.remove_entry(SESSION_KEY)?;
        if existed {
            info!("logout");
        }
        Ok(existed)
    }

    pub fn current(&self) -> Option<Session> {
        self.store.get_entry(SESSION_KEY)
    }

    /// True when a session is stored and parses.
    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current().is_some_and(|s| s.role == Role::Admin)
    }

    /// The full user record behind the current session, if it still exists.
    pub fn current_user(&self) -> Option<User> {
        let session = self.current()?;
        self.store.collection::<User>().get(session.user_id.as_str())
    }
}

impl<M: Medium> Store<M> {
    /// Session operations backed by this store.
    pub fn sessions(&self) -> Sessions<'_, M> {
        Sessions::new(self)
    }
}
