pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod media;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use event::{AppEvent, EventHandler};
pub use input::{handle_key_event, Action};
pub use theme::Theme;
