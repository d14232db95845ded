//! Helper to set the backtrace env var.

use std::sync::Once;

static INIT: Once = Once::new();

/// Sets `RUST_BACKTRACE=1` unless a value is already present. Only the first call has any
/// effect.
pub fn enable() {
    INIT.call_once(|| {
        if std::env::var_os("RUST_BACKTRACE").is_none() {
            // SAFETY: called once at startup, before any other thread reads the environment.
            unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_enable_from_many_threads() {
        let handles: Vec<_> = (0..8).map(|_| thread::spawn(enable)).collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(INIT.is_completed());
        assert!(std::env::var_os("RUST_BACKTRACE").is_some());
    }
}
