//! New wiki article page.

use api::WikiCategory;
use dioxus::prelude::*;
use ui::forms::WikiDraft;
use ui::{use_auth, use_session, Alert, NoticeLevel};

use crate::Route;

#[component]
pub fn WikiCreate() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut draft = use_signal(WikiDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if !auth().loading && auth().user.is_none() {
            nav.replace(Route::Login {});
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
            loading.set(true);
            let current = draft();
            match current.publish(&session).await {
                Ok(id) => {
                    nav.push(Route::ArticlePage { id });
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    rsx! {
        document::Title { "Vincere Colors - Create Wiki Article" }

        section {
            class: "section narrow",
            div {
                class: "card",
                h1 { "Create New Wiki Article" }

                if let Some(message) = error() {
                    Alert { level: NoticeLevel::Error, message }
                }

                form {
                    class: "form",
                    onsubmit: handle_submit,

                    label {
                        "Title"
                        input {
                            r#type: "text",
                            placeholder: "Enter article title",
                            value: "{draft().title}",
                            oninput: move |evt| draft.write().title = evt.value(),
                        }
                    }

                    label {
                        "Category"
                        select {
                            value: "{draft().category.id()}",
                            onchange: move |evt| {
                                if let Ok(category) = evt.value().parse::<WikiCategory>() {
                                    draft.write().category = category;
                                }
                            },
                            for category in WikiCategory::ALL {
                                option {
                                    key: "{category.id()}",
                                    value: "{category.id()}",
                                    selected: draft().category == category,
                                    "{category.label()}"
                                }
                            }
                        }
                    }

                    label {
                        "Content"
                        textarea {
                            rows: "15",
                            placeholder: "Write your article content here (markdown supported)...",
                            value: "{draft().content}",
                            oninput: move |evt| draft.write().content = evt.value(),
                        }
                    }

                    div {
                        class: "button-row end",
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| {
                                nav.push(Route::Wiki {});
                            },
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: loading() || !draft().can_submit(),
                            if loading() { "Publishing..." } else { "Publish Article" }
                        }
                    }
                }
            }
        }
    }
}
