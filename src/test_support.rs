use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

// The process working directory is global state; serialize every test that
// touches it, even if a #[serial] annotation is missed somewhere.
static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the current directory for the lifetime of the guard, restoring
/// the previous one on drop.
pub(crate) struct DirGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(dir: &Path) -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
