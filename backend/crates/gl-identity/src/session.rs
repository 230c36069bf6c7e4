use gl_core::Uid;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone)]
struct SessionToken {
    uid: Uid,
    id_token: String,
}

/// Signed-in identity shared between the identity and store adapters.
///
/// The identity adapter records the bearer token on every successful
/// create/authenticate; the store adapter authorises writes with it.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<SessionToken>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, uid: Uid, id_token: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(SessionToken {
            uid,
            id_token: id_token.into(),
        });
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    pub fn uid(&self) -> Option<Uid> {
        self.read().map(|token| token.uid)
    }

    pub fn id_token(&self) -> Option<String> {
        self.read().map(|token| token.id_token)
    }

    pub fn is_signed_in(&self) -> bool {
        self.read().is_some()
    }

    fn read(&self) -> Option<SessionToken> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("uid", &self.uid())
            .field("id_token", &self.read().map(|_| "<redacted>"))
            .finish()
    }
}
