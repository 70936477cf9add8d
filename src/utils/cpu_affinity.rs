//! CPU pinning for the measuring thread.
//!
//! On Linux the thread is pinned with `sched_setaffinity` and the previous
//! mask is restored when the guard drops. Elsewhere the guard is a no-op and
//! reports itself as unpinned.

#[cfg(target_os = "linux")]
mod platform {
    /// Current affinity mask of the calling thread
    pub fn save_affinity() -> Option<libc::cpu_set_t> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                Some(set)
            } else {
                None
            }
        }
    }

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity(set: &libc::cpu_set_t) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set) == 0 }
    }

    pub type Saved = libc::cpu_set_t;
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn save_affinity() -> Option<()> {
        None
    }

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }

    pub fn restore_affinity(_set: &()) -> bool {
        false
    }

    pub type Saved = ();
}

/// Pins the current thread to the core it is running on until dropped.
pub struct CpuPinGuard {
    core_id: Option<usize>,
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let saved = platform::save_affinity();
        let core_id = match (saved.is_some(), platform::current_cpu()) {
            (true, Some(core)) if platform::set_affinity(core) => Some(core),
            _ => None,
        };
        tracing::trace!(?core_id, "cpu pin");
        Self { core_id, saved }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.core_id
    }

    pub fn is_pinned(&self) -> bool {
        self.core_id.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.core_id.is_some() {
            if let Some(saved) = self.saved.as_ref() {
                platform::restore_affinity(saved);
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
