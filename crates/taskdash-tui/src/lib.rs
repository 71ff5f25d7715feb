pub mod app;
pub mod clients;
pub mod components;
pub mod dialog;
pub mod editor;
pub mod events;
pub mod pages;
pub mod theme;
pub mod ui;
pub mod views;

pub use app::App;
pub use clients::Clients;
