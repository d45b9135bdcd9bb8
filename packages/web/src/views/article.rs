use api::ErrorKind;
use dioxus::prelude::*;
use ui::icons::FaArrowLeft;
use ui::markdown::render_article;
use ui::{use_session, Alert, Icon, NoticeLevel};

use crate::Route;

/// A single wiki article loaded from the backend.
#[component]
pub fn ArticlePage(id: String) -> Element {
    let session = use_session();

    let article = use_resource(use_reactive!(|(id,)| {
        let session = session.clone();
        async move { session.get_wiki_article(&id).await }
    }));

    let body = match &*article.read_unchecked() {
        None => rsx! { p { class: "muted", "Loading article..." } },
        Some(Ok(loaded)) => {
            let published = loaded.created_at.format("%d/%m/%Y").to_string();
            let content = render_article(&loaded.content);
            rsx! {
                document::Title { "Vincere Colors - {loaded.title}" }
                article {
                    class: "card wiki-article",
                    span { class: "tag", "{loaded.category.label()}" }
                    h1 { "{loaded.title}" }
                    p { class: "muted", "Published {published}" }
                    div { class: "wiki-article-body", dangerous_inner_html: "{content}" }
                }
            }
        }
        Some(Err(e)) if e.is(ErrorKind::NotFound) => rsx! {
            div {
                class: "card empty",
                h2 { "Article not found" }
                p { "The article you are looking for does not exist or has been removed." }
            }
        },
        Some(Err(e)) => rsx! {
            Alert { level: NoticeLevel::Error, message: e.message.clone() }
        },
    };

    rsx! {
        section {
            class: "section narrow",
            Link {
                to: Route::Wiki {},
                class: "text-link",
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                " Back to Wiki"
            }
            {body}
        }
    }
}
