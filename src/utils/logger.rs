#[doc(hidden)]
pub use tracing as __tracing;

#[macro_export]
#[doc(hidden)]
macro_rules! dbg_log {
    ($($arg:tt)*) => {
        $crate::utils::__tracing::debug!(target: "auxgl", $($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::utils::__tracing::error!(target: "auxgl", $($arg)*)
    };
}
