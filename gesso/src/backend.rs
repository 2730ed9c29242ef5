//! Process-global backend selection.
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::{
    headless::HeadlessBackend,
    iface::{self, Backend as _},
};

/// A write-once cell holding the backend chosen for the process.
pub(crate) struct BackendCell {
    cell: OnceCell<Arc<dyn iface::Backend>>,
}

impl BackendCell {
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Install a backend. Fails when one is already installed, including
    /// the implicit headless fallback.
    fn set(&self, backend: Arc<dyn iface::Backend>) -> Result<(), iface::BackendAlreadySet> {
        self.cell.set(backend).map_err(|_| iface::BackendAlreadySet)
    }

    /// Get the installed backend, installing [`HeadlessBackend`] when
    /// none was chosen yet.
    fn get(&self) -> Arc<dyn iface::Backend> {
        self.cell
            .get_or_init(|| {
                log::debug!("no drawing backend was selected, using the headless backend");
                Arc::new(HeadlessBackend::new())
            })
            .clone()
    }
}

static BACKEND_CHOICE: BackendCell = BackendCell::new();

/// Install the drawing backend for the process.
///
/// The choice is permanent. It must happen before the first drawing
/// operation; the first operation without an installed backend selects
/// the headless backend, after which this fails.
pub fn set_backend(backend: Arc<dyn iface::Backend>) -> Result<(), iface::BackendAlreadySet> {
    log::debug!("selecting the drawing backend {:?}", backend.name());
    BACKEND_CHOICE.set(backend)
}

/// The backend chosen for the process.
pub fn backend() -> Arc<dyn iface::Backend> {
    BACKEND_CHOICE.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_headless() {
        let cell = BackendCell::new();
        assert_eq!(cell.get().name(), "headless");
    }

    #[test]
    fn keeps_an_installed_backend() {
        let cell = BackendCell::new();
        cell.set(Arc::new(HeadlessBackend::new())).unwrap();
        assert_eq!(cell.get().name(), "headless");
    }

    #[test]
    fn rejects_a_second_install() {
        let cell = BackendCell::new();
        cell.set(Arc::new(HeadlessBackend::new())).unwrap();
        assert_eq!(
            cell.set(Arc::new(HeadlessBackend::new())),
            Err(iface::BackendAlreadySet)
        );
    }

    #[test]
    fn fallback_fixes_the_choice() {
        let cell = BackendCell::new();
        cell.get();
        assert_eq!(
            cell.set(Arc::new(HeadlessBackend::new())),
            Err(iface::BackendAlreadySet)
        );
    }
}
