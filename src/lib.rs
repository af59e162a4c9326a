pub mod app;
pub mod data;
pub mod model;
#[cfg(not(target_arch = "wasm32"))]
pub mod results;
pub mod session;
pub mod ui;

pub use app::QuizApp;
