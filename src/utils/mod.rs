pub mod prerequisites;

pub use prerequisites::check_prerequisites;

// Макрос условного логирования: аргументы не вычисляются, если DEBUG выключен
#[macro_export]
macro_rules! debug_if_enabled {
    ($($arg:tt)*) => {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}
