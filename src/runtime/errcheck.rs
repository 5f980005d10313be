use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};

const _ERROR_CHECKING_DEFAULT: bool = true;

lazy_static! {
    static ref ERROR_CHECKING: AtomicBool = AtomicBool::new(_ERROR_CHECKING_DEFAULT);
}

/// Revert the global error checking switch to its default (enabled).
pub fn default_error_checking() {
    ERROR_CHECKING.store(_ERROR_CHECKING_DEFAULT, Ordering::Relaxed);
}
/// Enable or disable validation of descriptors before factorization.
pub fn set_error_checking(enable: bool) {
    ERROR_CHECKING.store(enable, Ordering::Relaxed);
}
/// True if descriptors are validated before factorization.
pub fn error_checking_is_enabled() -> bool {
    ERROR_CHECKING.load(Ordering::Relaxed)
}
