use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar, UserBadge};

use crate::Route;

/// Navbar and footer around every page.
#[component]
pub fn SiteLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        Navbar {
            Link { to: Route::Home {}, active_class: "active", "Home" }
            Link { to: Route::Game {}, active_class: "active", "Game" }
            Link { to: Route::Store {}, active_class: "active", "Store" }
            Link { to: Route::Wiki {}, active_class: "active", "Wiki" }
            if let Some(profile) = auth().user {
                Link {
                    to: Route::ProfilePage {},
                    UserBadge { profile }
                }
                LogoutButton {
                    on_signed_out: move |_| {
                        nav.push(Route::Login {});
                    },
                }
            } else if !auth().loading {
                Link { to: Route::Login {}, active_class: "active", "Sign In" }
                Link { to: Route::Register {}, active_class: "active", "Register" }
            }
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }

        footer {
            class: "site-footer",
            p { "© Vincere Games. All rights reserved." }
        }
    }
}
