//! Component-scoped diagnostic logging.
//!
//! On wasm targets messages go to the browser console; everywhere else (unit
//! tests on the host) they are routed through the `log` facade so a test
//! runner can capture them.

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::emit(log::Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::emit(log::Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::emit(log::Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::emit(log::Level::Error, component, message);
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(level: log::Level, component: &str, message: &str) {
        let line = format!("[{component}] {message}");
        match level {
            log::Level::Error => gloo::console::error!(line),
            log::Level::Warn => gloo::console::warn!(line),
            log::Level::Info => gloo::console::info!(line),
            log::Level::Debug | log::Level::Trace => gloo::console::debug!(line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(level: log::Level, component: &str, message: &str) {
        log::log!(target: component, level, "{message}");
    }
}
