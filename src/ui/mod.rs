pub mod app;
pub mod dashboard;
pub mod map;

pub use app::{App, FocusPanel, View};
