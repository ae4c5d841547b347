//! Backend selection module.
//!
//! This module defines the available execution backends for the scatter
//! kernels and provides functions to set and get the current backend.
//!
//! # Supported Backends
//!
//! - `Cpu` — Sequential pure Rust kernels (default).
//! - `Rayon` — Multi-threaded CPU kernels using [`rayon`](https://docs.rs/rayon).
//!
//! Both backends produce bit-identical results: the parallel forward pass
//! partitions work by target row and keeps each row's additions in index order.
//!
//! The backend is stored globally using an `AtomicU8`, enabling fast
//! switching between modes at runtime.

use core::convert::TryFrom;
use core::sync::atomic::{AtomicU8, Ordering};

/// Enumeration of supported execution backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Backend {
    /// Sequential CPU backend (default).
    #[default]
    Cpu = 0,
    /// Parallel CPU backend on the global rayon pool.
    Rayon,
}

impl TryFrom<u8> for Backend {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Cpu),
            1 => Ok(Self::Rayon),
            _ => Err(()),
        }
    }
}

/// Internal global state for the active backend.
static GLOBAL_DEFAULT_BACKEND: AtomicU8 = AtomicU8::new(Backend::Cpu as u8);

/// Sets the active backend used by [`crate::ops::dispatch`].
///
/// # Example
///
/// ```
/// use scatter_op::backend::{set_backend, Backend};
/// set_backend(Backend::Rayon);
/// # set_backend(Backend::Cpu);
/// ```
pub fn set_backend(b: Backend) {
    log::debug!("scatter backend set to {b:?}");
    GLOBAL_DEFAULT_BACKEND.store(b as u8, Ordering::Release);
}

/// Returns the currently active backend.
///
/// If the stored value is invalid, defaults to [`Backend::Cpu`].
pub fn get_backend() -> Backend {
    Backend::try_from(GLOBAL_DEFAULT_BACKEND.load(Ordering::Acquire)).unwrap_or_default()
}
