use gl_core::Route;
use gl_flow::Navigator;

use std::io::{self, Stdout, Write};

use log::warn;

/// Navigator for a terminal host: reports each destination on `out`.
///
/// History is a single entry; navigating replaces it.
pub struct ConsoleNavigator<W: Write = Stdout> {
    out: W,
    current: Option<Route>,
}

impl ConsoleNavigator<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }

    pub fn current(&self) -> Option<Route> {
        self.current
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for ConsoleNavigator<W> {
    fn navigate_and_clear_history(&mut self, route: Route) {
        self.current = Some(route);
        if let Err(e) = writeln!(self.out, "Navigating to {}", route.path()) {
            warn!("Failed to report navigation to {route}: {e}");
        }
    }
}
