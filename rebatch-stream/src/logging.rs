// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Conditional logging shim: uses `tracing` when enabled, falls back to eprintln!/println!
// with `std`, and only type-checks the arguments otherwise.

#[cfg(feature = "tracing")]
macro_rules! error {
    ($($arg:tt)*) => {{
        tracing::error!($($arg)*);
    }};
}

#[cfg(feature = "tracing")]
macro_rules! warn {
    ($($arg:tt)*) => {{
        tracing::warn!($($arg)*);
    }};
}

#[cfg(feature = "tracing")]
macro_rules! info {
    ($($arg:tt)*) => {{
        tracing::info!($($arg)*);
    }};
}

#[cfg(all(feature = "std", not(feature = "tracing")))]
macro_rules! error {
    ($($arg:tt)*) => {{
        std::eprintln!($($arg)*);
    }};
}

#[cfg(all(feature = "std", not(feature = "tracing")))]
macro_rules! warn {
    ($($arg:tt)*) => {{
        std::eprintln!($($arg)*);
    }};
}

#[cfg(all(feature = "std", not(feature = "tracing")))]
macro_rules! info {
    ($($arg:tt)*) => {{
        std::println!($($arg)*);
    }};
}

#[cfg(not(any(feature = "std", feature = "tracing")))]
macro_rules! error {
    ($($arg:tt)*) => {{
        let _ = core::format_args!($($arg)*);
    }};
}

#[cfg(not(any(feature = "std", feature = "tracing")))]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let _ = core::format_args!($($arg)*);
    }};
}

#[cfg(not(any(feature = "std", feature = "tracing")))]
macro_rules! info {
    ($($arg:tt)*) => {{
        let _ = core::format_args!($($arg)*);
    }};
}
