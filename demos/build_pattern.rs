// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fluent::{CharacterGroup, MatchingBehavior, Pattern, PatternError, UnicodeCategory};

pub fn main() -> Result<(), PatternError> {
    hex_color()?;
    identifier()?;
    consonants()?;
    invalid_range();
    Ok(())
}

fn hex_color() -> Result<(), PatternError> {
    // e.g. "#ffbb33"
    let mut pattern = Pattern::new();
    pattern.add("#", true);
    for _ in 0..6 {
        pattern.any_in("0-9a-fA-F", false)?;
    }

    println!("hex color: {}", pattern);
    Ok(())
}

fn identifier() -> Result<(), PatternError> {
    let mut pattern = Pattern::new();
    pattern
        .start_of_string()
        .range('a', 'z', false)?
        .word(MatchingBehavior::ECMAScript)
        .unicode_category(UnicodeCategory::DecimalNumber)
        .end_of_string(false);

    println!("identifier: {}", pattern);
    Ok(())
}

fn consonants() -> Result<(), PatternError> {
    let mut pattern = Pattern::new();
    pattern.subtraction(
        &CharacterGroup::positive_range('a', 'z', true)?,
        &CharacterGroup::positive("aeiou", true)?,
    );

    println!("consonants: {}", pattern);
    Ok(())
}

fn invalid_range() {
    let mut pattern = Pattern::new();
    if let Err(e) = pattern.digit_range(9, 1) {
        println!("rejected: {}", e);
    }
}
