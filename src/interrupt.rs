//! Cooperative interruption of running animations.
//!
//! An [`Interrupt`] is a shared flag. Whoever wants an animation to stop sets it
//! (usually a SIGINT handler), and the animation notices at the end of its current
//! frame, unwinds through `?` and restores the cursor on the way out.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// The process-wide SIGINT flag. Registered at most once.
static SIGINT: OnceLock<Interrupt> = OnceLock::new();

/// A cloneable handle to an interruption flag.
///
/// Once triggered, the flag stays set until [`Interrupt::reset`].
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// Creates a flag that only trips when [`Interrupt::trigger`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a flag that trips on SIGINT.
    pub fn register_sigint() -> io::Result<Self> {
        let interrupt = Self::new();
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupt.flag))?;
        Ok(interrupt)
    }

    /// Sets the flag.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Clears the flag.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    /// Returns whether the flag has been set.
    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Returns an [`io::ErrorKind::Interrupted`] error if the flag has been set.
    pub fn check(&self) -> io::Result<()> {
        if self.is_triggered() {
            return Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "animation interrupted",
            ));
        }
        Ok(())
    }
}

/// Returns the shared SIGINT flag, installing the signal handler on first use.
///
/// The flag is cleared on every call, so a Ctrl-C that stopped an earlier animation
/// does not stop the next one.
pub fn sigint() -> io::Result<Interrupt> {
    shared(&SIGINT, Interrupt::register_sigint)
}

fn shared(
    cell: &OnceLock<Interrupt>,
    register: impl FnOnce() -> io::Result<Interrupt>,
) -> io::Result<Interrupt> {
    let interrupt = match cell.get() {
        Some(interrupt) => interrupt.clone(),
        None => {
            let interrupt = register()?;
            cell.get_or_init(|| interrupt).clone()
        }
    };
    interrupt.reset();
    Ok(interrupt)
}
