pub mod form;
pub mod handlers;
pub mod models;
pub mod plugin;
pub mod repo;
pub mod uploads;

pub use models::*;
pub use plugin::BlogsPlugin;
