use api::WikiCategory;
use dioxus::prelude::*;
use ui::content::search_wiki;
use ui::icons::{FaBookOpen, FaMagnifyingGlass, FaPlus};
use ui::{use_auth, Icon};

use crate::Route;

#[component]
pub fn Wiki() -> Element {
    let auth = use_auth();
    let mut search = use_signal(String::new);

    let signed_in = auth().user.is_some();
    let entries = search_wiki(&search());

    rsx! {
        document::Title { "Vincere Colors - Wiki" }

        section {
            class: "hero",
            h1 { "Vincere " span { class: "accent", "Wiki" } }
            p { "Your comprehensive guide to everything Vincere colors" }
            if !signed_in {
                div {
                    class: "hero-callout",
                    p { "Crea una cuenta o inicia sesión para contribuir a la wiki" }
                    div {
                        class: "button-row",
                        Link { to: Route::Login {}, class: "btn btn-gold btn-sm", "Iniciar Sesión" }
                        Link { to: Route::Register {}, class: "btn btn-primary btn-sm", "Registrarse" }
                    }
                }
            }
            div {
                class: "search-box",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                input {
                    r#type: "text",
                    placeholder: "Search wiki articles...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
        }

        section {
            class: "section wiki-layout",
            aside {
                class: "wiki-sidebar card",
                h3 { "Categories" }
                ul {
                    for category in WikiCategory::ALL {
                        li {
                            key: "{category.id()}",
                            button {
                                class: "link-button",
                                onclick: move |_| search.set(category.label().to_string()),
                                "{category.label()}"
                            }
                        }
                    }
                }
                if signed_in {
                    Link {
                        to: Route::WikiCreate {},
                        class: "btn btn-primary btn-sm",
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Create Article"
                    }
                }
            }

            div {
                class: "wiki-results",
                if entries.is_empty() {
                    div {
                        class: "card empty",
                        Icon { icon: FaBookOpen, width: 32, height: 32 }
                        h3 { "No articles found" }
                        p { "Try a different search term, or write the article yourself." }
                        if signed_in {
                            Link { to: Route::WikiCreate {}, class: "btn btn-primary btn-sm", "Create Article" }
                        }
                    }
                } else {
                    for entry in entries {
                        article {
                            key: "{entry.id}",
                            class: "card wiki-entry",
                            Link {
                                to: Route::ArticlePage { id: entry.id.to_string() },
                                h3 { "{entry.title}" }
                            }
                            p { "{entry.summary}" }
                            div {
                                class: "wiki-entry-meta",
                                span { class: "tag", "{entry.category.label()}" }
                                span { "By {entry.author} · {entry.date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
