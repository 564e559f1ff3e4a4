// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The logging macros expand to nothing unless the `logging` feature
// is enabled, so the `log` crate stays an optional dependency.

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        log!(log::debug!($($tt)*))
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        log!(log::trace!($($tt)*))
    };
}
