//! Basic usage example for the stix crate
//!
//! Parses a bundle from a JSON file and prints every object with its category.
//!
//! To run this example:
//! ```sh
//! cd crates/stix
//! cargo run --example basic -- path/to/bundle.json
//! ```

use stix::{classify, Bundle, Result, StixInput};

fn main() -> Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: basic <bundle.json>");
        std::process::exit(2);
    };

    let json = std::fs::read_to_string(&path).map_err(|e| stix::Error::Parse(e.to_string()))?;
    let bundle = Bundle::from_input(StixInput::from(json))?;

    println!("Bundle {} ({} objects)\n", bundle.id, bundle.objects.len());

    for object in &bundle.objects {
        let category = classify(object)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unrecognized".to_string());
        println!("{:<20} {:<20} {}", object.object_type, category, object.id);

        for target in object.object_refs() {
            println!("    refers-to {}", target);
        }
    }

    Ok(())
}
