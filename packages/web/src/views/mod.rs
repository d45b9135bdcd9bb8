mod layout;
pub use layout::SiteLayout;

mod home;
pub use home::Home;

mod game;
pub use game::Game;

mod store;
pub use store::Store;

mod wiki;
pub use wiki::Wiki;

mod wiki_create;
pub use wiki_create::WikiCreate;

mod article;
pub use article::ArticlePage;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::ProfilePage;

mod not_found;
pub use not_found::NotFound;
