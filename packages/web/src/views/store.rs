use dioxus::prelude::*;
use ui::content::{store_items, StoreCategory, PURCHASE_UNAVAILABLE};
use ui::icons::{FaCartShopping, FaCircleInfo};
use ui::{notify, use_auth, use_notices, Icon, NoticeLevel};

use crate::Route;

#[component]
pub fn Store() -> Element {
    let auth = use_auth();
    let mut notices = use_notices();
    let mut selected = use_signal(|| Option::<StoreCategory>::None);

    let signed_in = auth().user.is_some();
    let items = store_items(selected());

    rsx! {
        document::Title { "Vincere Colors - Store" }

        section {
            class: "hero",
            h1 { "Vincere " span { class: "accent", "Store" } }
            p { "Enhance your gameplay with chests, currency, and special offers" }
            if !signed_in {
                div {
                    class: "hero-callout",
                    p {
                        Icon { icon: FaCircleInfo, width: 14, height: 14 }
                        " Crea una cuenta o inicia sesión para comprar artículos"
                    }
                    div {
                        class: "button-row",
                        Link { to: Route::Login {}, class: "btn btn-gold btn-sm", "Iniciar Sesión" }
                        Link { to: Route::Register {}, class: "btn btn-primary btn-sm", "Registrarse" }
                    }
                }
            }
        }

        section {
            class: "section",
            div {
                class: "pill-row",
                button {
                    class: if selected().is_none() { "pill active" } else { "pill" },
                    onclick: move |_| selected.set(None),
                    "All Items"
                }
                for category in StoreCategory::ALL {
                    button {
                        key: "{category.label()}",
                        class: if selected() == Some(category) { "pill active" } else { "pill" },
                        onclick: move |_| selected.set(Some(category)),
                        "{category.label()}"
                    }
                }
            }

            div {
                class: "card-grid four",
                for item in items {
                    div {
                        key: "{item.id}",
                        class: if item.highlight { "card store-item highlight" } else { "card store-item" },
                        img { src: "{item.image}", alt: "{item.name}" }
                        h3 { "{item.name}" }
                        p { "{item.description}" }
                        div {
                            class: "store-item-footer",
                            span { class: "price", "{item.price()}" }
                            button {
                                class: "btn btn-primary btn-sm",
                                disabled: !signed_in,
                                title: if signed_in { "" } else { "Sign in to purchase" },
                                onclick: move |_| notify(&mut notices, NoticeLevel::Info, PURCHASE_UNAVAILABLE),
                                Icon { icon: FaCartShopping, width: 14, height: 14 }
                                " Purchase"
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "section alt",
            h2 { "Not Ready to Purchase?" }
            p { "Learn more about the game first, or browse the wiki for strategy guides." }
            div {
                class: "button-row",
                Link { to: Route::Game {}, class: "btn btn-outline", "Game Information" }
                Link { to: Route::Wiki {}, class: "btn btn-outline", "Visit Wiki" }
            }
        }
    }
}
