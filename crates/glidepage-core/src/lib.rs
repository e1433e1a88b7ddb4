pub mod config;
pub mod error;
pub mod page;
pub mod scroll;
pub mod visibility;

pub use config::{AppConfig, RevealConfig, ScrollConfig};
pub use error::{Error, Result};
pub use scroll::{EasingType, ScrollController, ScrollState, ScrollTarget, ScrollToOptions};
pub use visibility::{ViewportObserver, WatcherOptions};
