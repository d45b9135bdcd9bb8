use dioxus::prelude::*;
use ui::icons::{FaCompass, FaDungeon, FaShieldHalved};
use ui::Icon;

use crate::Route;

const GALLERY: [&str; 6] = [
    "https://images.pexels.com/photos/2832034/pexels-photo-2832034.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/2832077/pexels-photo-2832077.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/2832039/pexels-photo-2832039.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/2835562/pexels-photo-2835562.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/931018/pexels-photo-931018.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/45842/clasical-music-musical-notes-sheet-music-45842.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
];

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Title { "Vincere Games - Home" }

        section {
            class: "hero",
            h1 { "Vincere " span { class: "accent", "Colors" } }
            p { "Build your empire, train your armies, and rise to glory in this strategic adventure" }
            Link { to: Route::Game {}, class: "btn btn-primary btn-lg", "Explore The Game" }
        }

        section {
            class: "section alt",
            h2 { "Discover Vincere Colors" }
            div {
                class: "card-grid three",
                div {
                    class: "card",
                    div { class: "card-icon", Icon { icon: FaDungeon, width: 24, height: 24 } }
                    h3 { "Build & Expand" }
                    p { "Construct farms, mines, and buildings to grow your civilization and establish your presence." }
                }
                div {
                    class: "card",
                    div { class: "card-icon", Icon { icon: FaShieldHalved, width: 24, height: 24 } }
                    h3 { "Train & Conquer" }
                    p { "Recruit soldiers, archers, and specialized units to defend your lands and conquer your enemies." }
                }
                div {
                    class: "card",
                    div { class: "card-icon", Icon { icon: FaCompass, width: 24, height: 24 } }
                    h3 { "Explore & Discover" }
                    p { "Venture into the unknown, discover valuable resources, and uncover ancient secrets." }
                }
            }
        }

        section {
            class: "section",
            h2 { "Gallery" }
            p { class: "section-lead", "Experience the stunning visuals of Vincere Colors" }
            div {
                class: "card-grid three",
                for (number, image) in (1..).zip(GALLERY) {
                    figure {
                        key: "{number}",
                        class: "gallery-item",
                        img { src: "{image}", alt: "Game Screenshot {number}" }
                        figcaption { "In-game screenshot" }
                    }
                }
            }
        }

        section {
            class: "section banner",
            h2 { "Ready to Begin Your Journey?" }
            p { "Join thousands of players in the world of Vincere Colors today" }
            div {
                class: "button-row",
                Link { to: Route::Store {}, class: "btn btn-gold btn-lg", "Visit Store" }
                Link { to: Route::Register {}, class: "btn btn-outline btn-lg", "Create Account" }
            }
        }
    }
}
