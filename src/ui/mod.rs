//! Terminal UI: a hot-seat game view on top of the rules engine. The UI owns
//! score keeping; the engine only reports outcomes.

mod app;
mod game_view;

pub use app::App;
