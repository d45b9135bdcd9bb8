//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the app's [`SessionStore`] and mirrors its cached
//! user into a `Signal<AuthState>` so components re-render on sign-in and
//! sign-out. Pages call the store through [`use_session`] and then
//! [`sync_auth`] to publish the result.

use api::Profile;
use dioxus::prelude::*;

use crate::backend::{make_backend, AppBackend};
use crate::icons::FaRightFromBracket;
use crate::session::SessionStore;
use crate::Icon;

/// The session store type used by the running app.
pub type AppSession = SessionStore<AppBackend>;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Profile>,
    /// True until the first refresh after startup has finished.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the session store provided by [`AuthProvider`].
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// Copy the store's cached user into the auth signal.
pub fn sync_auth(auth: &mut Signal<AuthState>, session: &AppSession) {
    let user = session.current_user();
    if auth.peek().user != user || auth.peek().loading {
        auth.set(AuthState { user, loading: false });
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_context_provider(|| SessionStore::new(make_backend()));
    let mut auth_state = use_signal(AuthState::default);

    // Validate whatever session the store holds on mount
    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            if let Err(e) = session.refresh().await {
                tracing::warn!("Could not refresh session: {}", e);
            }
            sync_auth(&mut auth_state, &session);
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Sign-out always succeeds locally; `on_signed_out` runs afterwards so the
/// page can navigate.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut auth_state = use_auth();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        let session = session.clone();
        async move {
            pending.set(true);
            session.sign_out().await;
            sync_auth(&mut auth_state, &session);
            pending.set(false);
            on_signed_out.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
