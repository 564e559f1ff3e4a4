// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fluent::{UnicodeBlock, UnicodeCategory};

// Usage: cargo run --example unicode_catalog [NAME]
//
// Lists the named blocks and general categories, or looks up
// a single one, e.g. `IsCyrillic` or `Lu`.
pub fn main() {
    match std::env::args().nth(1) {
        Some(name) => lookup(&name),
        None => list(),
    }
}

fn lookup(name: &str) {
    if let Some(block) = UnicodeBlock::from_name(name) {
        let range = block.range();
        println!(
            "{:?}: {} ({:04X}..{:04X})",
            block,
            block.positive(),
            range.start(),
            range.end()
        );
    } else if let Some(category) = UnicodeCategory::from_name(name) {
        println!("{:?}: {}", category, category.positive());
    } else {
        println!("unknown block or category: {}", name);
    }
}

fn list() {
    println!("blocks:");
    for block in UnicodeBlock::ALL {
        let range = block.range();
        println!(
            "  {:04X}..{:04X}  {}",
            range.start(),
            range.end(),
            block.name()
        );
    }

    println!("categories:");
    for category in UnicodeCategory::ALL {
        println!("  {:<3} {:?}", category.name(), category);
    }
}
