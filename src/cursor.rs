//! Scoped cursor visibility.

use crate::rendering::renderer::Renderer;
use std::io;
use std::ops::{Deref, DerefMut};

/// Hides the cursor for as long as it is alive.
///
/// Dropping the guard shows the cursor again and flushes, whatever the reason for
/// leaving the scope: normal return, an early `?`, an interruption or a panic.
/// Errors while restoring are ignored, there is nobody left to report them to.
///
/// The guard derefs to the wrapped renderer, so drawing goes through it.
pub struct CursorGuard<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
}

impl<'a, R: Renderer + ?Sized> CursorGuard<'a, R> {
    /// Hides the cursor of `renderer`.
    pub fn hide(renderer: &'a mut R) -> io::Result<Self> {
        // build the guard first, so a failing hide still gets a show
        let mut guard = Self { renderer };
        guard.renderer.set_cursor_visible(false)?;
        guard.renderer.flush()?;
        Ok(guard)
    }
}

impl<R: Renderer + ?Sized> Deref for CursorGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> DerefMut for CursorGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> Drop for CursorGuard<'_, R> {
    fn drop(&mut self) {
        let _ = self.renderer.set_cursor_visible(true);
        let _ = self.renderer.flush();
    }
}
