use dioxus::prelude::*;
use ui::icons::{FaArrowRight, FaAward, FaBuilding, FaLandmark, FaMountain, FaShieldHalved, FaUsers};
use ui::Icon;

use crate::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Population Classes",
        description: "Manage different classes of citizens from farmers to soldiers, each with unique abilities and roles.",
    },
    Feature {
        title: "Strategic Buildings",
        description: "Construct various buildings to expand your city, strengthen defenses, and optimize resource gathering.",
    },
    Feature {
        title: "Military Units",
        description: "Train soldiers, archers, and specialized units to defend your territory and conquer your enemies.",
    },
    Feature {
        title: "Resource Management",
        description: "Gather and manage resources like iron, wood, and natural materials to fuel your empire's growth.",
    },
    Feature {
        title: "Civilization Development",
        description: "Advance your civilization through technological and cultural developments to gain advantages.",
    },
    Feature {
        title: "Victory Conditions",
        description: "Achieve victory through military conquest, economic dominance, or cultural superiority.",
    },
];

struct GameElement {
    title: &'static str,
    summary: &'static str,
    points: [&'static str; 3],
}

const ELEMENTS: [GameElement; 4] = [
    GameElement {
        title: "Farmers & Agrarian Population",
        summary: "The backbone of your economy, farmers produce food to sustain your population and generate resources.",
        points: [
            "Produce food for your civilization",
            "Generate taxes and economic growth",
            "Can be recruited into militia during emergencies",
        ],
    },
    GameElement {
        title: "Military Units",
        summary: "Specialized units to defend your territory and expand your empire through conquest.",
        points: [
            "Soldiers: Basic close-combat units effective in frontal assaults",
            "Archers: Ranged units providing support and defensive capabilities",
            "Crossbowmen: Advanced ranged units with increased power and precision",
        ],
    },
    GameElement {
        title: "Structures",
        summary: "Various buildings to expand and strengthen your civilization.",
        points: [
            "Mines/Farms: Resource production buildings for automatic gathering",
            "Armory: Military structure for training and upgrading units",
            "Town Hall: Central administrative building for managing your empire",
        ],
    },
    GameElement {
        title: "Resources",
        summary: "Essential materials needed to build your empire and advance your civilization.",
        points: [
            "Animals: Horses for cavalry units and transportation",
            "Minerals: Iron for weapons, armor, and construction",
            "Natural Resources: Wood, stone, and other materials for buildings and infrastructure",
        ],
    },
];

#[component]
pub fn Game() -> Element {
    rsx! {
        document::Title { "Vincere Colors - Game Information" }

        section {
            class: "hero",
            h1 { "Vincere " span { class: "accent", "Colors" } }
            p { "Build your empire, train your armies, and conquer your enemies in this strategic adventure set in the ancient Roman era." }
            Link { to: Route::Store {}, class: "btn btn-gold btn-lg", "Get Started" }
        }

        section {
            class: "section",
            h2 { "Game Features" }
            p { class: "section-lead", "Explore the rich world of Vincere Colors with its unique gameplay elements" }
            div {
                class: "card-grid three",
                for (index, feature) in FEATURES.iter().enumerate() {
                    div {
                        key: "{feature.title}",
                        class: "card",
                        div { class: "card-icon", {feature_icon(index)} }
                        h3 { "{feature.title}" }
                        p { "{feature.description}" }
                    }
                }
            }
        }

        section {
            class: "section alt two-column",
            div {
                h2 { "Game Roles" }
                p { "Each class in Vincere Colors has a unique role in your civilization's development and success." }
                Link {
                    to: Route::Wiki {},
                    class: "text-link",
                    "Learn more in our Wiki "
                    Icon { icon: FaArrowRight, width: 14, height: 14 }
                }
            }
            div {
                class: "stack",
                for element in ELEMENTS.iter() {
                    div {
                        key: "{element.title}",
                        class: "card",
                        h4 { "{element.title}" }
                        p { "{element.summary}" }
                        ul {
                            for point in element.points {
                                li { "{point}" }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "section banner",
            h2 { "Donarium" }
            p { "The in-game currency of Vincere Colors. Use it for chests, units and special offers in the store." }
            Link { to: Route::Store {}, class: "btn btn-gold", "Visit Store" }
        }
    }
}

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon { icon: FaUsers, width: 24, height: 24 } },
        1 => rsx! { Icon { icon: FaBuilding, width: 24, height: 24 } },
        2 => rsx! { Icon { icon: FaShieldHalved, width: 24, height: 24 } },
        3 => rsx! { Icon { icon: FaMountain, width: 24, height: 24 } },
        4 => rsx! { Icon { icon: FaLandmark, width: 24, height: 24 } },
        _ => rsx! { Icon { icon: FaAward, width: 24, height: 24 } },
    }
}
