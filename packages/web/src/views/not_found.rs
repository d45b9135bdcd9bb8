use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        document::Title { "Vincere Colors - Page Not Found" }

        section {
            class: "section narrow",
            div {
                class: "card empty",
                h1 { "Page not found" }
                p { "There is nothing at /{path}." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
            }
        }
    }
}
