//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::forms::register::CONFIRM_EMAIL;
use ui::forms::RegisterForm;
use ui::{sync_auth, use_auth, use_session, Alert, NoticeLevel, SignUpOutcome};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the profile
    use_effect(move || {
        if !auth().loading && auth().user.is_some() {
            nav.replace(Route::ProfilePage {});
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match form().submit(&session).await {
                Ok(SignUpOutcome::SignedIn) => {
                    sync_auth(&mut auth, &session);
                    nav.push(Route::ProfilePage {});
                }
                Ok(SignUpOutcome::ConfirmationPending) => {
                    pending.set(true);
                    form.set(RegisterForm::default());
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Title { "Vincere Colors - Register" }

        section {
            class: "section narrow",
            div {
                class: "card auth-card",
                h1 { "Create Account" }
                p { class: "muted", "Join the world of Vincere Colors" }

                if let Some(message) = error() {
                    Alert { level: NoticeLevel::Error, message }
                }
                if pending() {
                    Alert { level: NoticeLevel::Info, message: CONFIRM_EMAIL.to_string() }
                }

                form {
                    class: "form",
                    onsubmit: handle_register,

                    label {
                        "Username"
                        input {
                            r#type: "text",
                            placeholder: "Choose a username",
                            value: "{form().username}",
                            oninput: move |evt| form.write().username = evt.value(),
                        }
                    }
                    label {
                        "Email"
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{form().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    label {
                        "Password"
                        input {
                            r#type: "password",
                            placeholder: "At least 6 characters",
                            value: "{form().password}",
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                    }
                    label {
                        "Confirm Password"
                        input {
                            r#type: "password",
                            placeholder: "Repeat your password",
                            value: "{form().confirm_password}",
                            oninput: move |evt| form.write().confirm_password = evt.value(),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading() || !form().can_submit(),
                        if loading() { "Creating account..." } else { "Create Account" }
                    }
                }

                p {
                    class: "auth-links",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
