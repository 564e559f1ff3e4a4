// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

#[macro_use]
mod macros;

mod error;

pub mod anchors;
pub mod charclass;
pub mod chargroup;
pub mod escapes;
pub mod pattern;
pub mod unicode;

pub use anchors::Anchor;
pub use charclass::{CharacterClass, ClassName, MatchingBehavior};
pub use chargroup::{CharacterGroup, Sign, Subtractable};
pub use error::PatternError;
pub use escapes::ControlEscape;
pub use pattern::Pattern;
pub use unicode::{UnicodeBlock, UnicodeCategory, UnicodeGroup, UnicodeGroupKind};
