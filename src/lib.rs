// ============================================================================
// Numeral Engine Library
// Alphabetic numeral codecs with pluggable numeral systems
// ============================================================================

//! # Numeral Engine
//!
//! Converts positive integers to and from alphabetic numeral systems.
//!
//! ## Features
//!
//! - **Church Slavonic Cyrillic numerals** with thousand marks, teen order,
//!   titlo and dot decorations
//! - **Roman numerals** in subtractive notation, 1..=3999
//! - **Two marker styles** (plain and delimited) selected with bit flags
//! - **Pluggable codecs** behind the `NumeralCodec` trait
//! - **Dynamic JSON conversion** with the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use numeral_engine::prelude::*;
//!
//! let codec = CyrillicCodec::new(StyleFlags::DELIM);
//! let value = NumeralValue::new(1444).unwrap();
//!
//! let text = codec.encode(value).unwrap();
//! assert_eq!(text, "҂аум҃д");
//! assert_eq!(codec.decode(&text).unwrap(), value);
//!
//! // Same value, one thousand mark per glyph
//! assert_eq!(codec.encode_with(value, StyleFlags::PLAIN), "҂аум҃д");
//!
//! let roman = NumeralCodecBuilder::roman().build().unwrap();
//! assert_eq!(roman.encode(value).unwrap(), "MCDXLIV");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CodecConfig, FormattingState, MarkerStyle, NumeralSystem, NumeralValue, StyleFlags,
    };
    pub use crate::engine::{create_from_config, CyrillicCodec, NumeralCodecBuilder, RomanCodec};
    pub use crate::interfaces::NumeralCodec;
    pub use crate::numeric::{NumeralError, NumeralResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_cyrillic() {
        let codec = create_from_config(CodecConfig::church_slavonic()).unwrap();

        let text = codec.encode_u64(111_111_111).unwrap();
        assert_eq!(text, "҂҂раі҂раіра҃і");
        assert_eq!(codec.decode(&text).unwrap().get(), 111_111_111);

        // Position implies magnitude when marks are absent
        assert_eq!(codec.decode("пфхч҃ѱ").unwrap().get(), 80_500_690_700);
    }

    #[test]
    fn test_end_to_end_manuscript() {
        let codec = create_from_config(CodecConfig::manuscript()).unwrap();

        let text = codec.encode_u64(111_111_111).unwrap();
        assert_eq!(text, "҂҂р҂҂і҂҂а҂р҂і҂ара҃і");
        assert_eq!(codec.decode(&text).unwrap().get(), 111_111_111);
    }

    #[test]
    fn test_end_to_end_printed() {
        let codec = create_from_config(CodecConfig::printed()).unwrap();

        let text = codec.encode_u64(1001).unwrap();
        assert_eq!(text, ".҂а.а҃.");
        assert_eq!(codec.decode(&text).unwrap().get(), 1001);
    }

    #[test]
    fn test_end_to_end_roman() {
        let codec = create_from_config(CodecConfig::roman()).unwrap();

        assert_eq!(codec.encode_u64(2022).unwrap(), "MMXXII");
        assert_eq!(codec.decode("mmxxii").unwrap().get(), 2022);
    }

    #[test]
    fn test_boundaries() {
        let codecs = [
            create_from_config(CodecConfig::church_slavonic()).unwrap(),
            create_from_config(CodecConfig::roman()).unwrap(),
        ];

        for codec in &codecs {
            assert_eq!(codec.encode_u64(0), Err(NumeralError::NonPositiveValue));
            assert_eq!(NumeralValue::try_from(-1i64), Err(NumeralError::NonPositiveValue));
            assert_eq!(codec.decode(""), Err(NumeralError::EmptyInput));
            assert_eq!(codec.decode("Ω"), Err(NumeralError::GrammarMismatch));
        }

        // Each system rejects the other's glyphs
        assert_eq!(codecs[0].decode("XIV"), Err(NumeralError::GrammarMismatch));
        assert_eq!(codecs[1].decode("а҃"), Err(NumeralError::GrammarMismatch));
    }

    #[test]
    fn test_codecs_are_shareable_across_threads() {
        let codec: std::sync::Arc<dyn NumeralCodec> =
            std::sync::Arc::from(create_from_config(CodecConfig::default()).unwrap());

        let handles: Vec<_> = (1..=4u64)
            .map(|n| {
                let codec = std::sync::Arc::clone(&codec);
                std::thread::spawn(move || {
                    let value = n * 1_001;
                    codec.decode(&codec.encode_u64(value).unwrap()).unwrap().get() == value
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
