/// RenderContext - the "currently rendering" token of a pipeline.
///
/// At most one auxiliary render is in flight per context. A pass takes the
/// token for the whole of its dispatch; any pass invoked while the token is
/// held (a reflective surface seen from inside another reflection) skips.
///
/// The flag is a `Cell`, so a context cannot be shared across threads.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct RenderContext {
    rendering: Cell<bool>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            rendering: Cell::new(false),
        }
    }

    /// Whether an auxiliary render is in flight.
    pub fn is_rendering(&self) -> bool {
        self.rendering.get()
    }

    /// Take the token, or `None` if it is already held.
    pub fn try_begin(&self) -> Option<RenderToken<'_>> {
        if self.rendering.replace(true) {
            return None;
        }
        Some(RenderToken { flag: &self.rendering })
    }
}

/// Held for the duration of one dispatch. Dropping it releases the context,
/// on error paths included.
#[derive(Debug)]
pub struct RenderToken<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for RenderToken<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
#[path = "render_context_tests.rs"]
mod tests;
