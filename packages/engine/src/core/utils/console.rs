//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`; native builds (tests, tools)
//! have no browser console, so the macros only type-check their arguments.
//!
//! ```rust
//! use celebration_physics::console_log;
//!
//! let walls = 4;
//! console_log!("stage mounted with {} walls", walls);
//! ```

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_format_arguments() {
        let n = 3;
        console_log!("ticks: {}", n);
        console_warn!("dropped {n} frames");
    }
}
