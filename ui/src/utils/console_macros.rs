/// Timestamped browser console logging for components.
///
/// These macros wrap gloo_console and format eagerly to prevent BigInt
/// serialization issues in WASM environments. They only work in the browser;
/// code shared with native tests logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $message:expr) => {
        gloo_console::$level!(format!("[{}] [login] {}", js_sys::Date::now(), $message))
    };
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_stamped!(info, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_stamped!(warn, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_stamped!(error, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(error, format!($fmt, $($arg)*))
    };
}
