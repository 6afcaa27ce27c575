//! Owner of the appearance mode cell.

use tracing::debug;

use crate::models::AppearanceMode;

/// Notification queued by every [`AppearanceController::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChanged {
    /// Mode before the toggle
    pub previous: AppearanceMode,
    /// Mode after the toggle
    pub current: AppearanceMode,
}

/// Holds the current appearance mode.
///
/// The mode starts at [`AppearanceMode::Dark`] and only changes through
/// [`toggle`](Self::toggle). Each toggle queues exactly one [`ModeChanged`]
/// notification, which the presenter forwards to the view root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearanceController {
    mode: AppearanceMode,
    pending: Vec<ModeChanged>,
}

impl AppearanceController {
    /// Creates a controller in the startup mode (dark).
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: AppearanceMode::default(),
            pending: Vec::new(),
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn get_mode(&self) -> AppearanceMode {
        self.mode
    }

    /// Flips light and dark and returns the new mode.
    pub fn toggle(&mut self) -> AppearanceMode {
        let previous = self.mode;
        self.mode = previous.flipped();
        self.pending.push(ModeChanged {
            previous,
            current: self.mode,
        });
        debug!("appearance toggled: {} -> {}", previous, self.mode);
        self.mode
    }

    /// Takes the notifications queued since the last drain, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<ModeChanged> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for AppearanceController {
    fn default() -> Self {
        Self::new()
    }
}
