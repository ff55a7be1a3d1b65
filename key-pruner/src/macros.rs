// Logging macros that prune a payload before it reaches tracing

#[doc(hidden)]
#[macro_export]
macro_rules! __pruned_event {
    ($level:expr, $pruner:expr, $payload:expr, $($arg:tt)+) => {
        match $crate::KeyPruner::prune_serialize($pruner, $payload) {
            Ok(pruned) => $crate::__tracing::event!($level, payload = %pruned, $($arg)+),
            Err(err) => $crate::__tracing::event!($level, prune_error = %err, $($arg)+),
        }
    };
}

#[macro_export]
macro_rules! pruned_debug {
    ($pruner:expr, $payload:expr, $($arg:tt)+) => {
        $crate::__pruned_event!($crate::__tracing::Level::DEBUG, $pruner, $payload, $($arg)+)
    };
}

#[macro_export]
macro_rules! pruned_info {
    ($pruner:expr, $payload:expr, $($arg:tt)+) => {
        $crate::__pruned_event!($crate::__tracing::Level::INFO, $pruner, $payload, $($arg)+)
    };
}

#[macro_export]
macro_rules! pruned_warn {
    ($pruner:expr, $payload:expr, $($arg:tt)+) => {
        $crate::__pruned_event!($crate::__tracing::Level::WARN, $pruner, $payload, $($arg)+)
    };
}

#[macro_export]
macro_rules! pruned_error {
    ($pruner:expr, $payload:expr, $($arg:tt)+) => {
        $crate::__pruned_event!($crate::__tracing::Level::ERROR, $pruner, $payload, $($arg)+)
    };
}
