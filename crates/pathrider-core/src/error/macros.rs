//! Error macros for pathrider

/// Macro for returning an empty-input error
#[macro_export]
macro_rules! bail_empty {
    ($what:expr, $stage:expr) => {
        return Err($crate::error::PathriderError::empty($what, $stage))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::PathriderError::UsageError($msg.to_string()))
    };
}
