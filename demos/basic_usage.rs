// ============================================================================
// Basic Usage Example
// ============================================================================

use numeral_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Numeral Engine Example ===\n");

    let codec = CyrillicCodec::default();
    let values = [1u64, 18, 333, 1010, 11000, 1444, 111_111_111];

    // Both marker styles side by side
    println!("{:>12}  {:<24}  {:<24}", "value", "delimited", "plain");
    for value in values {
        let value = match NumeralValue::new(value) {
            Ok(value) => value,
            Err(err) => {
                eprintln!("skipping {}: {}", value, err);
                continue;
            }
        };
        println!(
            "{:>12}  {:<24}  {:<24}",
            value,
            codec.encode_with(value, StyleFlags::DELIM),
            codec.encode_with(value, StyleFlags::PLAIN),
        );
    }

    // Decorations
    println!("\nDecorations for 1001:");
    let value = NumeralValue::new(1001).unwrap();
    for (name, flags) in [
        ("no titlo", StyleFlags::NOTITLO),
        ("delimiter dots", StyleFlags::DELIMDOT),
        ("all dots", StyleFlags::ALLDOT),
    ] {
        println!("  {:<16} {}", name, codec.encode_with(value, flags));
    }

    // Reading back
    println!("\nReading:");
    for text in ["пфхч҃ѱ", " вКА", "҂а.і҃", "҂а҃і", "XIV", ""] {
        match codec.decode(text) {
            Ok(value) => println!("  {:?} -> {}", text, value),
            Err(err) => println!("  {:?} -> error: {}", text, err),
        }
    }

    // Roman through the factory
    println!("\nRoman:");
    let roman = match NumeralCodecBuilder::roman().build() {
        Ok(codec) => codec,
        Err(err) => {
            eprintln!("failed to build Roman codec: {}", err);
            return;
        }
    };
    for value in [14u64, 1919, 3999, 4000] {
        match roman.encode_u64(value) {
            Ok(text) => println!("  {} -> {}", value, text),
            Err(err) => println!("  {} -> error: {}", value, err),
        }
    }
}
