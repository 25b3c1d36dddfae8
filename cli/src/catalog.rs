//! The set of phones offered for rent. Selection is two-step: brand by
//! number, then variant by name.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::input;

pub const PHONE_CATALOG: &[(&str, &[&str])] = &[
    ("iPhone 16", &["base", "pro", "pro max"]),
    ("Samsung Galaxy S25", &["base", "plus", "ultra"]),
];

pub fn variants_for(model: &str) -> Option<&'static [&'static str]> {
    PHONE_CATALOG
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, variants)| *variants)
}

pub fn prompt_phone<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<(String, String)> {
    writeln!(output, "Select Phone Brand:")?;
    for (idx, (model, _)) in PHONE_CATALOG.iter().enumerate() {
        writeln!(output, "{}. {}", idx + 1, model)?;
    }
    let choice = input::prompt_choice(input, output, "Enter choice: ", PHONE_CATALOG.len())?;
    let (model, variants) = PHONE_CATALOG[choice - 1];

    let prompt = format!("Select Variant ({}): ", variants.join("/"));
    let variant = loop {
        let line = input::prompt_line(input, output, &prompt)?;
        let line = line.trim();
        if variants.contains(&line) {
            break line.to_string();
        }
        writeln!(output, "Invalid variant!")?;
    };

    Ok((model.to_string(), variant))
}
