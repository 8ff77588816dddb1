use clap::ValueEnum;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WipeMethod {
    #[value(name = "dod_5220_22_m")]
    Dod522022M,
    #[value(name = "nist_800_88")]
    Nist80088,
    #[value(name = "gutmann")]
    Gutmann,
    #[value(name = "random_overwrite")]
    RandomOverwrite,
}

impl WipeMethod {
    /// The identifier the wipe service expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            WipeMethod::Dod522022M => "dod_5220_22_m",
            WipeMethod::Nist80088 => "nist_800_88",
            WipeMethod::Gutmann => "gutmann",
            WipeMethod::RandomOverwrite => "random_overwrite",
        }
    }

    pub fn passes(&self) -> u8 {
        match self {
            WipeMethod::Dod522022M => 3,
            WipeMethod::Nist80088 => 1,
            WipeMethod::Gutmann => 35,
            WipeMethod::RandomOverwrite => 7,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            WipeMethod::Dod522022M => "DoD 5220.22-M",
            WipeMethod::Nist80088 => "NIST 800-88",
            WipeMethod::Gutmann => "Gutmann Method",
            WipeMethod::RandomOverwrite => "Random Overwrite",
        }
    }
}

impl Display for WipeMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}-pass)", self.name(), self.passes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WipeMethod::Dod522022M, "DoD 5220.22-M (3-pass)")]
    #[case(WipeMethod::Nist80088, "NIST 800-88 (1-pass)")]
    #[case(WipeMethod::Gutmann, "Gutmann Method (35-pass)")]
    #[case(WipeMethod::RandomOverwrite, "Random Overwrite (7-pass)")]
    fn displays_name_and_passes(#[case] method: WipeMethod, #[case] expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[test]
    fn parses_the_service_identifiers() {
        for method in WipeMethod::value_variants() {
            assert_eq!(WipeMethod::from_str(method.as_str(), false), Ok(*method));
        }
    }
}
