//! Call-site naming for scoped timers.
//!
//! `profile_scope!` and `profile_function!` bind a hidden [`ScopedTimer`]
//! for the rest of the enclosing block. Building without the `profiling`
//! feature turns both into no-ops.
//!
//! ```ignore
//! fn fibonacci(session: &Session, n: u32) -> u64 {
//!     profile_scope!(session, format!("Fib {}", n));
//!     // ...
//! }
//! ```
//!
//! [`ScopedTimer`]: crate::session::ScopedTimer

/// Strip the helper suffix from `type_name` of a nested `fn f()`
#[doc(hidden)]
pub fn function_path(raw: &'static str) -> &'static str {
    let mut path = raw.strip_suffix("::f").unwrap_or(raw);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Path of the enclosing function, e.g. `my_crate::bench::run`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        $crate::macros::function_path($crate::macros::type_name_of(f))
    }};
}

/// Time the rest of the enclosing block under `name`
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profile_scope {
    ($session:expr, $name:expr) => {
        let _scope_timer = $crate::session::ScopedTimer::new($session, $name);
    };
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($session:expr, $name:expr) => {
        let _ = &$session;
    };
}

/// Time the rest of the enclosing function under its path
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profile_function {
    ($session:expr) => {
        $crate::profile_scope!($session, $crate::function_name!());
    };
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    ($session:expr) => {
        let _ = &$session;
    };
}
