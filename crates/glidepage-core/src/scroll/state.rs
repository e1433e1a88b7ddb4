use serde::Serialize;

/// Sign of the most recent scroll movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

/// Per-frame snapshot of the virtualized scroll position
///
/// Written once per frame by the controller and delivered to subscribers by
/// value; nothing else mutates it.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScrollState {
    /// Virtual scroll position in pixels (terminal rows in the TUI)
    pub offset: f64,
    /// Maximum scrollable offset
    pub limit: f64,
    /// Offset delta per second over the last frame
    pub velocity: f64,
    /// Sign of the last non-negligible velocity
    pub direction: ScrollDirection,
    /// offset / limit, in [0, 1]
    pub progress: f64,
}
