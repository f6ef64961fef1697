pub mod crawler;
pub mod fixture;
pub mod web;

pub use crawler::PageSource;
pub use fixture::FixtureSource;
pub use web::WebDriverSession;
