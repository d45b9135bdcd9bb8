use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{AuthProvider, NoticeProvider};
use views::{
    ArticlePage, Game, Home, Login, NotFound, ProfilePage, Register, SiteLayout, Store, Wiki,
    WikiCreate,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/game")]
        Game {},
        #[route("/store")]
        Store {},
        #[route("/wiki")]
        Wiki {},
        #[route("/wiki/create")]
        WikiCreate {},
        #[route("/wiki/article/:id")]
        ArticlePage { id: String },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/profile")]
        ProfilePage {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NoticeProvider {
                Router::<Route> {}
            }
        }
    }
}
