use crate::{IdentityError, IdentityProvider, IdentityResult};

use gl_core::{Credentials, Uid, mask_email};

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use log::debug;

const MIN_PROVIDER_PASSWORD_LENGTH: usize = 6;

struct StoredIdentity {
    uid: Uid,
    password: String,
}

/// In-process identity provider with the same error semantics as the hosted
/// one. Used for local runs and as the test double for workflows.
#[derive(Default)]
pub struct MemoryIdentityProvider {
    identities: Mutex<HashMap<String, StoredIdentity>>,
    scripted_uids: Mutex<VecDeque<Uid>>,
    next_id: AtomicUsize,
    offline: AtomicBool,
    create_calls: AtomicUsize,
    authenticate_calls: AtomicUsize,
    reset_calls: AtomicUsize,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `uid` for the next created identity instead of a generated one.
    pub fn with_next_uid(self, uid: impl Into<String>) -> Self {
        self.scripted_uids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Uid::new(uid.into()));
        self
    }

    /// Register an identity directly, bypassing call counters.
    pub fn with_identity(self, uid: &str, email: &str, password: &str) -> Self {
        self.identities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                normalize(email),
                StoredIdentity {
                    uid: Uid::new(uid),
                    password: password.to_string(),
                },
            );
        self
    }

    /// While offline every call fails with a network failure.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn uid_for(&self, email: &str) -> Option<Uid> {
        self.identities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&normalize(email))
            .map(|identity| identity.uid.clone())
    }

    pub fn identity_count(&self) -> usize {
        self.identities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn authenticate_calls(&self) -> usize {
        self.authenticate_calls.load(Ordering::SeqCst)
    }

    pub fn reset_calls(&self) -> usize {
        self.reset_calls.load(Ordering::SeqCst)
    }

    /// Total remote calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.create_calls() + self.authenticate_calls() + self.reset_calls()
    }

    #[track_caller]
    fn check_reachable(&self) -> IdentityResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(IdentityError::network("identity provider unreachable"));
        }
        Ok(())
    }

    fn next_uid(&self) -> Uid {
        let scripted = self
            .scripted_uids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        scripted.unwrap_or_else(|| {
            let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            Uid::new(format!("uid-{n}"))
        })
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[track_caller]
fn check_email_format(email: &str) -> IdentityResult<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(IdentityError::invalid_email()),
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn create_identity(&self, credentials: &Credentials) -> IdentityResult<Uid> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        check_email_format(&credentials.email)?;

        if credentials.password.chars().count() < MIN_PROVIDER_PASSWORD_LENGTH {
            return Err(IdentityError::weak_password());
        }

        let key = normalize(&credentials.email);
        let mut identities = self
            .identities
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if identities.contains_key(&key) {
            return Err(IdentityError::email_already_in_use());
        }

        let uid = self.next_uid();
        identities.insert(
            key,
            StoredIdentity {
                uid: uid.clone(),
                password: credentials.password.clone(),
            },
        );
        debug!("Created identity {uid} for {}", mask_email(&credentials.email));
        Ok(uid)
    }

    async fn authenticate(&self, credentials: &Credentials) -> IdentityResult<Uid> {
        self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        check_email_format(&credentials.email)?;

        let identities = self
            .identities
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let identity = identities
            .get(&normalize(&credentials.email))
            .ok_or_else(IdentityError::user_not_found)?;

        if identity.password != credentials.password {
            return Err(IdentityError::wrong_password());
        }
        Ok(identity.uid.clone())
    }

    async fn send_password_reset(&self, email: &str) -> IdentityResult<()> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        check_email_format(email)?;

        let identities = self
            .identities
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !identities.contains_key(&normalize(email)) {
            return Err(IdentityError::user_not_found());
        }
        Ok(())
    }
}
