//! Execution context carrying the current platform version.

use crate::{PlatformVersionInfo, VersionError};
use std::thread::{self, JoinHandle};

/// Holds the platform version for one execution context.
///
/// A context is passed explicitly to code that gates features on the platform version. Child
/// contexts are created with [`VersionContext::fork`], which copies the parent's version at that
/// moment. Parent and child evolve independently afterwards.
///
/// ```
/// use netparams_version::{PlatformVersionInfo, VersionContext, VersionError};
///
/// let mut ctx = VersionContext::default();
/// ctx.set_current_version(PlatformVersionInfo::new(4));
/// assert!(ctx.check_minimum_version(4).is_ok());
/// assert_eq!(
///     ctx.check_minimum_version(5),
///     Err(VersionError::TooLow { required: 5, current: 4 })
/// );
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct VersionContext {
    /// The version in effect, if one was set.
    current: Option<PlatformVersionInfo>,
}

impl VersionContext {
    /// Creates a context with the given version already set.
    pub const fn new(info: PlatformVersionInfo) -> Self {
        Self { current: Some(info) }
    }

    /// Sets the version for this context, replacing any previous value. Contexts forked
    /// afterwards inherit it; contexts forked earlier do not see it.
    pub fn set_current_version(&mut self, info: PlatformVersionInfo) {
        if let Some(previous) = self.current {
            tracing::debug!(
                target: "version_gate",
                %previous,
                current = %info,
                "Replacing current platform version"
            );
        } else {
            tracing::debug!(target: "version_gate", current = %info, "Set current platform version");
        }
        self.current = Some(info);
    }

    /// Returns the version in effect.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::NotInitialized`] if no version was set in this context or in the
    /// context it was forked from.
    pub const fn current_version(&self) -> Result<PlatformVersionInfo, VersionError> {
        match self.current {
            Some(info) => Ok(info),
            None => Err(VersionError::NotInitialized),
        }
    }

    /// Checks that a feature requiring platform version `required` may be used.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::TooLow`] if `required` is greater than the current version, or
    /// [`VersionError::NotInitialized`] if no version is set.
    pub fn check_minimum_version(&self, required: i32) -> Result<(), VersionError> {
        let current = self.current_version()?;
        current.check_minimum(required).inspect_err(|_| {
            tracing::warn!(
                target: "version_gate",
                required,
                %current,
                "Feature disabled by platform version"
            );
        })
    }

    /// Creates a child context holding a copy of this context's version.
    pub const fn fork(&self) -> Self {
        *self
    }

    /// Runs `f` on a new thread with a forked context.
    pub fn spawn<F, T>(&self, f: F) -> JoinHandle<T>
    where
        F: FnOnce(Self) -> T + Send + 'static,
        T: Send + 'static,
    {
        let child = self.fork();
        thread::spawn(move || f(child))
    }
}

impl From<PlatformVersionInfo> for VersionContext {
    fn from(info: PlatformVersionInfo) -> Self {
        Self::new(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::mpsc;

    #[test]
    fn test_unset_context() {
        let ctx = VersionContext::default();
        assert_eq!(ctx.current_version(), Err(VersionError::NotInitialized));
        assert_eq!(ctx.check_minimum_version(1), Err(VersionError::NotInitialized));
    }

    #[test]
    fn test_set_then_get() {
        let mut ctx = VersionContext::default();
        ctx.set_current_version(PlatformVersionInfo::new(5));
        assert_eq!(ctx.current_version(), Ok(PlatformVersionInfo::new(5)));

        ctx.set_current_version(PlatformVersionInfo::new(3));
        assert_eq!(ctx.current_version(), Ok(PlatformVersionInfo::new(3)));
    }

    #[test]
    fn test_check_minimum_version() {
        let ctx = VersionContext::new(PlatformVersionInfo::new(4));
        assert_eq!(ctx.check_minimum_version(4), Ok(()));
        assert_eq!(ctx.check_minimum_version(1), Ok(()));
        assert_eq!(ctx.check_minimum_version(5), Err(VersionError::TooLow { required: 5, current: 4 }));
    }

    #[test]
    fn test_fork_copies_value() {
        let mut parent = VersionContext::default();
        parent.set_current_version(PlatformVersionInfo::new(5));

        let mut child = parent.fork();
        assert_eq!(child.current_version(), Ok(PlatformVersionInfo::new(5)));

        parent.set_current_version(PlatformVersionInfo::new(6));
        assert_eq!(child.current_version(), Ok(PlatformVersionInfo::new(5)));

        child.set_current_version(PlatformVersionInfo::new(2));
        assert_eq!(parent.current_version(), Ok(PlatformVersionInfo::new(6)));
    }

    #[test]
    fn test_fork_of_unset_context_is_unset() {
        let mut parent = VersionContext::default();
        let child = parent.fork();
        parent.set_current_version(PlatformVersionInfo::new(1));
        assert_eq!(child.current_version(), Err(VersionError::NotInitialized));
    }

    #[test]
    fn test_spawn_inherits_value_at_spawn_time() {
        let mut parent = VersionContext::new(PlatformVersionInfo::new(5));
        let (tx, rx) = mpsc::channel::<()>();

        let handle = parent.spawn(move |ctx| {
            // Wait until the parent has moved on.
            rx.recv().unwrap();
            ctx.current_version()
        });

        parent.set_current_version(PlatformVersionInfo::new(6));
        tx.send(()).unwrap();

        assert_eq!(handle.join().unwrap(), Ok(PlatformVersionInfo::new(5)));
        assert_eq!(parent.current_version(), Ok(PlatformVersionInfo::new(6)));
    }

    #[test]
    fn test_spawned_grandchild_inherits() {
        let parent = VersionContext::new(PlatformVersionInfo::new(9));
        let handle = parent.spawn(|ctx| ctx.spawn(|grandchild| grandchild.current_version()));
        let inner = handle.join().unwrap();
        assert_eq!(inner.join().unwrap(), Ok(PlatformVersionInfo::new(9)));
    }

    proptest! {
        #[test]
        fn prop_gate_fails_iff_required_exceeds_current(current in any::<i32>(), required in any::<i32>()) {
            let ctx = VersionContext::new(PlatformVersionInfo::new(current));
            prop_assert_eq!(ctx.check_minimum_version(required).is_err(), required > current);
        }
    }
}
