//! Random password generation.
//!
//! This module is the core of passforge. It is pure and stateless: a
//! configuration value goes in, a random string comes out, and nothing
//! else happens. No I/O, no shared state, no failure modes.
//!
//! Characters are produced by a two-stage draw: first an enabled
//! character class is picked uniformly at random, then a character is
//! picked uniformly from that class's alphabet. Classes are therefore
//! NOT weighted by their size — with all four classes enabled, a digit
//! is exactly as likely per position as a lowercase letter, even though
//! there are 10 digits and 26 lowercase letters. This matches the
//! behavior of the original generator and must be preserved.

use rand::Rng;

/// A fixed alphabet from which generated characters may be drawn.
///
/// Enabled classes are always considered in the declaration order
/// below: lowercase, uppercase, digits, symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharClass {
    /// The full alphabet of this class, as ASCII bytes.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lower => b"abcdefghijklmnopqrstuvwxyz",
            CharClass::Upper => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Digits => b"0123456789",
            CharClass::Symbols => b"!@#$%^&*()-_=+[]{};:,.<>/?",
        }
    }
}

/// The options describing a single generation request.
///
/// Constructed fresh for every call — there is no live options object
/// mutated behind the generator's back. `length` may be zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub length: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
            length: 32,
        }
    }
}

impl GenerationConfig {
    /// The classes enabled by this configuration, in fixed order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(4);
        if self.lower {
            classes.push(CharClass::Lower);
        }
        if self.upper {
            classes.push(CharClass::Upper);
        }
        if self.digits {
            classes.push(CharClass::Digits);
        }
        if self.symbols {
            classes.push(CharClass::Symbols);
        }
        classes
    }
}

/// Generate a random password satisfying the given configuration.
///
/// Returns a string of exactly `config.length` characters drawn from
/// the enabled classes. If no class is enabled the result is the empty
/// string for any requested length; an empty selection pool is not an
/// error.
pub fn generate(config: GenerationConfig) -> String {
    let classes = config.enabled_classes();
    if classes.is_empty() {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(config.length);
    for _ in 0..config.length {
        let class = classes[rng.gen_range(0..classes.len())];
        let alphabet = class.alphabet();
        out.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(lower: bool, upper: bool, digits: bool, symbols: bool, length: usize) -> GenerationConfig {
        GenerationConfig { lower, upper, digits, symbols, length }
    }

    fn class_of(b: u8) -> Option<CharClass> {
        [CharClass::Lower, CharClass::Upper, CharClass::Digits, CharClass::Symbols]
            .into_iter()
            .find(|c| c.alphabet().contains(&b))
    }

    #[test]
    fn alphabets_are_disjoint() {
        let classes = [CharClass::Lower, CharClass::Upper, CharClass::Digits, CharClass::Symbols];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                for ch in a.alphabet() {
                    assert!(!b.alphabet().contains(ch), "{:?} and {:?} share {:?}", a, b, *ch as char);
                }
            }
        }
    }

    #[test]
    fn output_has_requested_length() {
        for len in [0, 1, 5, 32, 100] {
            let pwd = generate(config(true, true, true, true, len));
            assert_eq!(pwd.len(), len);
        }
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(generate(config(true, true, true, true, 0)), "");
    }

    #[test]
    fn no_enabled_classes_is_empty() {
        // Must not panic on the empty selection pool.
        assert_eq!(generate(config(false, false, false, false, 10)), "");
    }

    #[test]
    fn lower_only_stays_in_class() {
        let pwd = generate(config(true, false, false, false, 5));
        assert_eq!(pwd.len(), 5);
        assert!(pwd.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn single_class_outputs_stay_in_class() {
        let cases = [
            (config(true, false, false, false, 50), CharClass::Lower),
            (config(false, true, false, false, 50), CharClass::Upper),
            (config(false, false, true, false, 50), CharClass::Digits),
            (config(false, false, false, true, 50), CharClass::Symbols),
        ];
        for (cfg, expected) in cases {
            let pwd = generate(cfg);
            for b in pwd.bytes() {
                assert_eq!(class_of(b), Some(expected), "{:?} outside {:?}", b as char, expected);
            }
        }
    }

    #[test]
    fn output_stays_in_enabled_union() {
        let cfg = config(true, false, true, false, 200);
        for b in generate(cfg).bytes() {
            let class = class_of(b).expect("character outside every alphabet");
            assert!(class == CharClass::Lower || class == CharClass::Digits);
        }
    }

    #[test]
    fn enabled_classes_keep_fixed_order() {
        assert_eq!(
            config(true, true, true, true, 0).enabled_classes(),
            vec![CharClass::Lower, CharClass::Upper, CharClass::Digits, CharClass::Symbols],
        );
        assert_eq!(
            config(false, true, false, true, 0).enabled_classes(),
            vec![CharClass::Upper, CharClass::Symbols],
        );
        assert!(config(false, false, false, false, 0).enabled_classes().is_empty());
    }

    #[test]
    fn classes_are_picked_uniformly_not_by_size() {
        // Two-stage draw: each class should land near 1/4 of positions
        // even though digits have a smaller alphabet than the letters.
        let n = 40_000;
        let pwd = generate(config(true, true, true, true, n));

        let mut counts = [0usize; 4];
        for b in pwd.bytes() {
            match class_of(b).expect("character outside every alphabet") {
                CharClass::Lower => counts[0] += 1,
                CharClass::Upper => counts[1] += 1,
                CharClass::Digits => counts[2] += 1,
                CharClass::Symbols => counts[3] += 1,
            }
        }

        // ~0.25 each; 0.02 is roughly nine standard deviations at n=40k.
        for count in counts {
            let freq = count as f64 / n as f64;
            assert!((freq - 0.25).abs() < 0.02, "class frequency {} too far from 0.25", freq);
        }
    }

    #[test]
    fn default_config_matches_original_defaults() {
        let cfg = GenerationConfig::default();
        assert!(cfg.lower && cfg.upper && cfg.digits && cfg.symbols);
        assert_eq!(cfg.length, 32);
        assert_eq!(generate(cfg).len(), 32);
    }
}
