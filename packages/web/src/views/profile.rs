//! Profile page: view and edit the signed-in player's profile.
//!
//! The three tabs share a single [`ProfileDraft`]. Edits stay local until
//! saved; cancelling resets the draft from the cached profile.

use api::AvatarFile;
use dioxus::prelude::*;
use ui::forms::profile::{FEATURE_UNAVAILABLE, PROFILE_SAVED};
use ui::forms::{ProfileDraft, ProfileTab};
use ui::icons::{FaCheck, FaEnvelope, FaGear, FaKey, FaUpload, FaUser};
use ui::{
    notify, sync_auth, use_auth, use_notices, use_session, Alert, Icon, LogoutButton, NoticeLevel,
};

use crate::Route;

#[component]
pub fn ProfilePage() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let navigator = use_navigator();
    let mut notices = use_notices();

    let mut tab = use_signal(ProfileTab::default);
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(|| {
        auth.peek()
            .user
            .as_ref()
            .map(ProfileDraft::from_profile)
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if !auth().loading && auth().user.is_none() {
            navigator.replace(Route::Login {});
        }
    });

    // Fetch the latest profile on mount
    let fetch_session = session.clone();
    let _ = use_resource(move || {
        let session = fetch_session.clone();
        async move {
            if !session.is_signed_in() {
                return;
            }
            match session.get_profile().await {
                Ok(profile) => {
                    draft.set(ProfileDraft::from_profile(&profile));
                    sync_auth(&mut auth, &session);
                }
                Err(e) => tracing::warn!("Could not fetch latest profile: {}", e),
            }
        }
    });

    let save = use_callback(move |()| {
        if loading() {
            return;
        }
        let session = session.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);
            match draft().save(&session).await {
                Ok(profile) => {
                    draft.set(ProfileDraft::from_profile(&profile));
                    sync_auth(&mut auth, &session);
                    success.set(Some(PROFILE_SAVED.to_string()));
                    editing.set(false);
                    notify(&mut notices, NoticeLevel::Success, PROFILE_SAVED);
                }
                Err(e) => {
                    notify(&mut notices, NoticeLevel::Error, &e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let cancel = move |_| {
        if let Some(profile) = auth().user {
            draft.set(ProfileDraft::from_profile(&profile));
        }
        error.set(None);
        editing.set(false);
    };

    let select_avatar = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => draft.write().select_avatar(AvatarFile::new(name, bytes)),
            None => tracing::warn!("Could not read selected file {}", name),
        }
    };

    let unavailable = move |_| notify(&mut notices, NoticeLevel::Info, FEATURE_UNAVAILABLE);

    let Some(user) = auth().user else {
        return rsx! {
            section { class: "section narrow", p { class: "muted", "Loading..." } }
        };
    };

    let current = draft();
    let preview = current.avatar_preview();
    let display_name = if current.username.is_empty() {
        user.display_name().to_string()
    } else {
        current.username.clone()
    };

    rsx! {
        document::Title { "Vincere Colors - Your Profile" }

        section {
            class: "section profile-layout",
            aside {
                class: "card profile-sidebar",
                nav {
                    for item in ProfileTab::ALL {
                        button {
                            key: "{item.label()}",
                            class: if tab() == item { "tab active" } else { "tab" },
                            onclick: move |_| {
                                tab.set(item);
                                error.set(None);
                                success.set(None);
                            },
                            match item {
                                ProfileTab::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
                                ProfileTab::Account => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
                                ProfileTab::Security => rsx! { Icon { icon: FaKey, width: 16, height: 16 } },
                            }
                            " {item.label()}"
                        }
                    }
                }
                div {
                    class: "profile-sidebar-footer",
                    LogoutButton {
                        class: "btn btn-outline btn-block",
                        on_signed_out: move |_| {
                            navigator.push(Route::Login {});
                        },
                    }
                }
            }

            div {
                class: "card profile-content",

                if let Some(message) = error() {
                    Alert { level: NoticeLevel::Error, message }
                }
                if let Some(message) = success() {
                    Alert { level: NoticeLevel::Success, message }
                }

                match tab() {
                    ProfileTab::Profile => rsx! {
                        div {
                            class: "profile-header",
                            h2 { "Your Profile" }
                            if editing() {
                                div {
                                    class: "button-row",
                                    button { class: "btn btn-outline btn-sm", onclick: cancel, "Cancel" }
                                    button {
                                        class: "btn btn-primary btn-sm",
                                        disabled: loading(),
                                        onclick: move |_| save.call(()),
                                        Icon { icon: FaCheck, width: 14, height: 14 }
                                        if loading() { " Saving..." } else { " Save Changes" }
                                    }
                                }
                            } else {
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: move |_| editing.set(true),
                                    "Edit Profile"
                                }
                            }
                        }

                        div {
                            class: "profile-summary",
                            div {
                                class: "avatar-slot",
                                if let Some(url) = preview.clone() {
                                    img { src: "{url}", alt: "Profile" }
                                } else {
                                    Icon { icon: FaUser, width: 36, height: 36 }
                                }
                                if editing() {
                                    label {
                                        class: "avatar-upload",
                                        Icon { icon: FaUpload, width: 14, height: 14 }
                                        input {
                                            r#type: "file",
                                            accept: "image/*",
                                            onchange: select_avatar,
                                        }
                                    }
                                }
                            }
                            div {
                                h3 { style: "color: {current.name_color};", "{display_name}" }
                                p {
                                    class: "muted",
                                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                                    " {current.email}"
                                }
                                if editing() {
                                    label {
                                        "Name Color"
                                        input {
                                            r#type: "color",
                                            value: "{current.name_color}",
                                            oninput: move |evt| draft.write().name_color = evt.value(),
                                        }
                                    }
                                }
                            }
                        }

                        if editing() {
                            div {
                                class: "form",
                                label {
                                    "Username"
                                    input {
                                        r#type: "text",
                                        placeholder: "Enter your username",
                                        value: "{current.username}",
                                        oninput: move |evt| draft.write().username = evt.value(),
                                    }
                                }
                                label {
                                    "Email"
                                    input {
                                        r#type: "email",
                                        placeholder: "Enter your email",
                                        value: "{current.email}",
                                        oninput: move |evt| draft.write().email = evt.value(),
                                    }
                                }
                            }
                        } else {
                            dl {
                                class: "profile-details",
                                div { dt { "Username" } dd { "{display_name}" } }
                                div { dt { "Email" } dd { "{current.email}" } }
                                div { dt { "Account Created" } dd { "{user.created_on()}" } }
                            }
                        }
                    },

                    ProfileTab::Account => rsx! {
                        h2 { "Account Settings" }
                        p { class: "muted", "Manage your account details and preferences" }

                        div {
                            class: "form",
                            h3 { "Profile Information" }
                            label {
                                "Username"
                                input {
                                    r#type: "text",
                                    value: "{current.username}",
                                    oninput: move |evt| draft.write().username = evt.value(),
                                }
                            }
                            label {
                                "Email"
                                input {
                                    r#type: "email",
                                    value: "{current.email}",
                                    oninput: move |evt| draft.write().email = evt.value(),
                                }
                            }
                            div {
                                class: "field",
                                span { class: "field-label", "Profile Picture" }
                                div {
                                    class: "avatar-row",
                                    div {
                                        class: "avatar-slot small",
                                        if let Some(url) = preview.clone() {
                                            img { src: "{url}", alt: "Profile" }
                                        } else {
                                            Icon { icon: FaUser, width: 18, height: 18 }
                                        }
                                    }
                                    label {
                                        class: "btn btn-outline btn-sm",
                                        Icon { icon: FaUpload, width: 14, height: 14 }
                                        " Change"
                                        input {
                                            r#type: "file",
                                            accept: "image/*",
                                            class: "hidden",
                                            onchange: select_avatar,
                                        }
                                    }
                                }
                            }
                            div {
                                class: "field",
                                span { class: "field-label", "Username Color" }
                                div {
                                    class: "avatar-row",
                                    input {
                                        r#type: "color",
                                        value: "{current.name_color}",
                                        oninput: move |evt| draft.write().name_color = evt.value(),
                                    }
                                    span {
                                        "Preview: "
                                        span { style: "color: {current.name_color};", "{display_name}" }
                                    }
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: loading(),
                                onclick: move |_| save.call(()),
                                if loading() { "Saving..." } else { "Save Changes" }
                            }
                        }

                        div {
                            class: "danger-zone",
                            h3 { "Delete Account" }
                            p { "Permanently remove your account and all of its data." }
                            button { class: "btn btn-danger", onclick: unavailable, "Delete Account" }
                        }
                    },

                    ProfileTab::Security => rsx! {
                        h2 { "Security" }
                        p { class: "muted", "Keep your account safe" }

                        div {
                            class: "form",
                            h3 { "Change Password" }
                            label {
                                "Current Password"
                                input { r#type: "password", disabled: true }
                            }
                            label {
                                "New Password"
                                input { r#type: "password", disabled: true }
                            }
                            label {
                                "Confirm New Password"
                                input { r#type: "password", disabled: true }
                            }
                            button { class: "btn btn-primary", onclick: unavailable, "Update Password" }
                        }
                    },
                }
            }
        }
    }
}
