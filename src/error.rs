// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub enum PatternError {
    // A required argument is absent (`None`).
    MissingArgument {
        argument: &'static str,
    },

    // The argument is present but breaks a structural constraint,
    // e.g. an empty set, a wrong digit count or a digit greater than 9.
    OutOfRange {
        argument: &'static str,
        message: String,
    },

    // The text is not a number in the given radix.
    InvalidFormat {
        argument: &'static str,
        value: String,
        radix: u32,
    },

    // The argument is malformed in a way not covered above,
    // e.g. a negative sign or a blank name.
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    // `first` is greater than `last`.
    ReversedRange {
        first: String,
        last: String,
    },
}

impl PatternError {
    pub fn argument(&self) -> &'static str {
        match self {
            PatternError::MissingArgument { argument }
            | PatternError::OutOfRange { argument, .. }
            | PatternError::InvalidFormat { argument, .. }
            | PatternError::InvalidArgument { argument, .. } => *argument,
            PatternError::ReversedRange { .. } => "first, last",
        }
    }
}

impl Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::MissingArgument { argument } => {
                write!(f, "Argument \"{}\" is missing.", argument)
            }
            PatternError::OutOfRange { argument, message } => {
                write!(f, "Argument \"{}\" is out of range: {}", argument, message)
            }
            PatternError::InvalidFormat {
                argument,
                value,
                radix,
            } => write!(
                f,
                "Argument \"{}\" has the value \"{}\" which is not a valid base-{} number.",
                argument, value, radix
            ),
            PatternError::InvalidArgument { argument, message } => {
                write!(f, "Argument \"{}\" is invalid: {}", argument, message)
            }
            PatternError::ReversedRange { first, last } => {
                write!(f, "[{}-{}], [x-y] range in reverse order.", first, last)
            }
        }
    }
}

impl std::error::Error for PatternError {}
