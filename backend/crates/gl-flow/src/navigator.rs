use crate::{Outcome, RequestController};

use gl_core::Route;

use log::debug;

/// Host-side navigation stack.
pub trait Navigator {
    /// Replace the whole history with `route`; "back" cannot return to the
    /// screen that navigated.
    fn navigate_and_clear_history(&mut self, route: Route);
}

/// Perform the navigation an outcome asks for. Returns whether it navigated.
///
/// Skipped once the screen has been disposed.
pub fn dispatch<N: Navigator + ?Sized>(
    outcome: &Outcome,
    navigator: &mut N,
    controller: &RequestController,
) -> bool {
    let Outcome::Navigate(route) = outcome else {
        return false;
    };
    if !controller.is_active() {
        debug!("Skipping navigation to {route}: screen disposed");
        return false;
    }

    navigator.navigate_and_clear_history(*route);
    controller.mark_navigated();
    true
}
