//! Process-wide controller registry
//!
//! One page, one scroll surface: the active controller is an explicit
//! singleton with an injectable lifecycle. Collaborators that genuinely need
//! ambient access (the back-to-top affordance) go through [`active`]; nothing
//! else should.

use std::sync::{Arc, Mutex};

use super::controller::ScrollController;
use crate::config::ScrollConfig;
use crate::error::{Error, Result};

pub type SharedController = Arc<Mutex<ScrollController>>;

static ACTIVE: Mutex<Option<SharedController>> = Mutex::new(None);

/// Install a new active controller.
///
/// Fails with [`Error::AlreadyInitialized`] if one is already active; call
/// [`teardown`] first. This guards against accidentally stacking two frame
/// loops over the same scroll surface.
pub fn initialize(config: ScrollConfig) -> Result<SharedController> {
    let mut slot = lock_slot();
    if slot.is_some() {
        return Err(Error::AlreadyInitialized);
    }
    let controller = Arc::new(Mutex::new(ScrollController::new(config)?));
    *slot = Some(Arc::clone(&controller));
    Ok(controller)
}

/// The active controller, if any
pub fn active() -> Option<SharedController> {
    lock_slot().as_ref().map(Arc::clone)
}

/// Tear down the active controller and clear the singleton slot.
///
/// Idempotent. All subscriptions are released before the slot empties, so no
/// scroll callback fires after this returns.
pub fn teardown() {
    let taken = lock_slot().take();
    if let Some(controller) = taken {
        if let Ok(mut controller) = controller.lock() {
            controller.teardown();
        }
    }
}

fn lock_slot() -> std::sync::MutexGuard<'static, Option<SharedController>> {
    ACTIVE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
