//! Login page view with email/password form and password recovery.

use dioxus::prelude::*;
use ui::forms::login::RESET_SENT;
use ui::forms::{LoginForm, LoginMode};
use ui::{sync_auth, use_auth, use_session, Alert, NoticeLevel};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut mode = use_signal(LoginMode::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the profile
    use_effect(move || {
        if !auth().loading && auth().user.is_some() {
            nav.replace(Route::ProfilePage {});
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let session = session.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);
            loading.set(true);
            let current = form();
            match mode() {
                LoginMode::SignIn => match current.submit(&session).await {
                    Ok(()) => {
                        sync_auth(&mut auth, &session);
                        nav.push(Route::ProfilePage {});
                    }
                    Err(e) => error.set(Some(e)),
                },
                LoginMode::ForgotPassword => match current.request_reset(&session).await {
                    Ok(()) => {
                        notice.set(Some(RESET_SENT.to_string()));
                        mode.set(LoginMode::SignIn);
                    }
                    Err(e) => error.set(Some(e)),
                },
            }
            loading.set(false);
        });
    };

    let mut switch_mode = move |next: LoginMode| {
        error.set(None);
        notice.set(None);
        mode.set(next);
    };

    let forgot = mode() == LoginMode::ForgotPassword;

    rsx! {
        document::Title { "Vincere Colors - Sign In" }

        section {
            class: "section narrow",
            div {
                class: "card auth-card",
                h1 {
                    if forgot { "Reset Password" } else { "Sign In" }
                }
                p {
                    class: "muted",
                    if forgot {
                        "Enter your email and we will send you instructions to reset your password."
                    } else {
                        "Welcome back to Vincere Colors"
                    }
                }

                if let Some(message) = error() {
                    Alert { level: NoticeLevel::Error, message }
                }
                if let Some(message) = notice() {
                    Alert { level: NoticeLevel::Success, message }
                }

                form {
                    class: "form",
                    onsubmit: handle_submit,

                    label {
                        "Email"
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{form().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }

                    if !forgot {
                        label {
                            "Password"
                            input {
                                r#type: "password",
                                placeholder: "••••••",
                                value: "{form().password}",
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading() || !form().can_submit(mode()),
                        if loading() {
                            "Please wait..."
                        } else if forgot {
                            "Send Reset Instructions"
                        } else {
                            "Sign In"
                        }
                    }
                }

                div {
                    class: "auth-links",
                    if forgot {
                        button {
                            class: "link-button",
                            onclick: move |_| switch_mode(LoginMode::SignIn),
                            "Back to sign in"
                        }
                    } else {
                        button {
                            class: "link-button",
                            onclick: move |_| switch_mode(LoginMode::ForgotPassword),
                            "Forgot your password?"
                        }
                        button {
                            class: "link-button dev-login",
                            onclick: move |_| form.set(LoginForm::dev_credentials()),
                            "Dev login"
                        }
                        p {
                            "Don't have an account? "
                            Link { to: Route::Register {}, "Register" }
                        }
                    }
                }
            }
        }
    }
}
