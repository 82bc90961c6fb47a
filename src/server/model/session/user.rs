//! Session user identity. Requests only read it; writing it belongs to a future login layer.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "holocron:user:id";

/// ID of the user a session acts as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Stores the user ID in the session, replacing any previous one
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Reads the user ID from the session
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Session acts as this user
    /// - `Ok(None)` - No user stored, callers fall back to the bootstrap user
    /// - `Err(Error::SessionError)` - Session store failed or the stored value is malformed
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(user_id)| user_id);

        Ok(user_id)
    }
}
