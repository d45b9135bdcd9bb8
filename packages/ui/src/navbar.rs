use api::Profile;
use dioxus::prelude::*;

use crate::icons::FaUser;
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar. The app passes its route links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        nav {
            class: "navbar",
            span {
                class: "navbar-brand",
                "Vincere "
                span { class: "navbar-brand-accent", "Colors" }
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

/// Avatar and display name, in the player's chosen name color.
#[component]
pub fn UserBadge(profile: Profile) -> Element {
    let name = profile.display_name().to_string();
    let color = profile.name_color().to_string();

    rsx! {
        span {
            class: "user-badge",
            if let Some(url) = profile.avatar_url.clone() {
                img { class: "user-badge-avatar", src: "{url}", alt: "{name}" }
            } else {
                span {
                    class: "user-badge-avatar placeholder",
                    Icon { icon: FaUser, width: 12, height: 12 }
                }
            }
            span { style: "color: {color};", "{name}" }
        }
    }
}
