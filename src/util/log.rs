//! Logging shims. With the `log` feature the macros forward to the [`log`](https://docs.rs/log)
//! crate, otherwise they only borrow their arguments so that no unused warnings appear.

#[cfg(feature = "log")]
macro_rules! coll_log {
    (trace, $($arg:expr),*) => { ::log::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { ::log::debug!($($arg),*) };
}

#[cfg(not(feature = "log"))]
macro_rules! coll_log {
    ($level:ident, $($arg:expr),*) => { { $( let _ = &$arg; )* } };
}

#[allow(unused_macros)]
macro_rules! coll_trace {
    ($($arg:expr),*) => ($crate::util::log::coll_log!(trace, $($arg),*));
}

#[allow(unused_macros)]
macro_rules! coll_debug {
    ($($arg:expr),*) => ($crate::util::log::coll_log!(debug, $($arg),*));
}

#[allow(unused_imports)]
pub(crate) use {coll_debug, coll_log, coll_trace};
