mod app;
mod effects;
mod sections;
pub mod theme;

pub use app::TributeApp;
