//! Session store: a provider-scoped singleton of signals holding the
//! logged-in user, written only by `login`/`logout` and read everywhere.

use leptos::logging;
use leptos::prelude::*;

use crate::models::{decode_claims, SessionUser, UserRole};

/// localStorage key the bearer token lives under.
pub const TOKEN_STORAGE_KEY: &str = "frota_token";

fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

/// The persisted bearer token, if any.
pub fn stored_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
}

fn persist_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

#[derive(Clone, Copy)]
pub struct AuthStore {
    user: RwSignal<Option<SessionUser>>,
    loading: RwSignal<bool>,
}

impl AuthStore {
    fn new() -> Self {
        let store = Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
        };
        if let Some(token) = stored_token() {
            store.process_token(&token);
        }
        store.loading.set(false);
        store
    }

    /// Decodes the token into a session user. A token that does not decode
    /// (expired ones are indistinguishable from malformed ones here) logs
    /// the session out and drops the stored token.
    fn process_token(&self, token: &str) {
        match decode_claims(token) {
            Ok(claims) => self.user.set(Some(SessionUser::from_claims(claims))),
            Err(err) => {
                logging::error!("erro ao processar token: {err}");
                self.logout();
            }
        }
    }

    pub fn login(&self, token: &str) {
        persist_token(token);
        self.process_token(token);
    }

    pub fn logout(&self) {
        clear_token();
        self.user.set(None);
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.with(|user| user.as_ref().map(|u| u.role))
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .with(|user| user.as_ref().is_some_and(|u| u.role.is_admin()))
    }

    pub fn is_company(&self) -> bool {
        self.user
            .with(|user| user.as_ref().is_some_and(|u| u.role.is_company()))
    }
}

/// Places the store in context at the App root.
pub fn provide_auth() -> AuthStore {
    let store = AuthStore::new();
    provide_context(store);
    store
}

/// Grabs the store anywhere under the App.
pub fn use_auth() -> AuthStore {
    expect_context::<AuthStore>()
}
