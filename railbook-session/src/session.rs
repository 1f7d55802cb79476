use tracing::info;

use railbook_core::User;
use railbook_reservations::ReservationRepository;

use crate::{SessionError, SessionResult};

/// Login/signup/logout facade over the repository. The session is the
/// store's current-user singleton, so it survives restarts; the derived
/// flags are recomputed from it on every call and never cached.
#[derive(Clone)]
pub struct SessionManager {
    repo: ReservationRepository,
}

impl SessionManager {
    pub fn new(repo: ReservationRepository) -> Self {
        Self { repo }
    }

    /// The repository this facade wraps, for booking and route access.
    pub fn repository(&self) -> &ReservationRepository {
        &self.repo
    }

    /// Credential check and session switch. Wrong credentials are `Ok(None)`
    /// and leave the session untouched; only storage faults are errors.
    pub fn login(&self, username: &str, password: &str) -> SessionResult<Option<User>> {
        match self.repo.authenticate_user(username, password)? {
            Some(user) => {
                self.repo.set_current_user(Some(&user))?;
                info!(user_id = %user.id, "login succeeded");
                Ok(Some(user))
            }
            None => {
                info!(username, "login failed");
                Ok(None)
            }
        }
    }

    /// Create a non-admin account and log the caller in as it. Usernames
    /// are unique handles: a duplicate fails with `UsernameTaken` and
    /// creates nothing. Empty inputs fail with `EmptyCredentials`.
    pub fn signup(&self, username: &str, password: &str) -> SessionResult<User> {
        if username.is_empty() || password.is_empty() {
            return Err(SessionError::EmptyCredentials);
        }
        if self.repo.users()?.iter().any(|u| u.username == username) {
            return Err(SessionError::UsernameTaken(username.to_string()));
        }

        let user = User::new(username, password);
        self.repo.save_user(&user)?;
        self.repo.set_current_user(Some(&user))?;
        info!(user_id = %user.id, username, "account created");
        Ok(user)
    }

    /// Clear the session unconditionally. Idempotent.
    pub fn logout(&self) -> SessionResult<()> {
        self.repo.set_current_user(None)?;
        info!("logged out");
        Ok(())
    }

    pub fn current_user(&self) -> SessionResult<Option<User>> {
        Ok(self.repo.current_user()?)
    }

    pub fn is_authenticated(&self) -> SessionResult<bool> {
        Ok(self.current_user()?.is_some())
    }

    pub fn is_admin(&self) -> SessionResult<bool> {
        Ok(self.current_user()?.map_or(false, |user| user.is_admin))
    }
}
