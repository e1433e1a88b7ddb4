mod lightbox;
mod page;
mod status_bar;

pub use lightbox::LightboxWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
