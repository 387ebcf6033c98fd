//! Diagnostics that are forwarded to the `log` crate when the `logging`
//! feature is enabled and compiled out otherwise.

macro_rules! emit {
    ($level:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {
        #[cfg(feature = "logging")]
        ::log::$level!(target: "mac_encodings", $fmt $(, $arg)*);
        #[cfg(not(feature = "logging"))]
        { $(let _ = &$arg;)* }
    };
}

macro_rules! ldebug {
    ($($tt:tt)*) => {
        emit!(debug, $($tt)*)
    };
}

macro_rules! lwarn {
    ($($tt:tt)*) => {
        emit!(warn, $($tt)*)
    };
}
