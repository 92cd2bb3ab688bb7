// hexcmp/src/report.rs

//! Everything the comparator shows for one input, gathered into one value.

use std::fmt;

use crate::compare::{compare, Comparison};
use crate::format::{binary_string, scientific, trimmed_hex, BinaryString};
use crate::parser::parse;
use crate::types::{ParsedHex, Sign};
use crate::Result;

/// Shown in place of scientific notation for values below 10^10.
pub const SCIENTIFIC_NOT_APPLICABLE: &str = "Not applicable (small number)";

/// Display fields for one parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Input exactly as given
    pub input: String,
    /// Sign as written
    pub sign: Sign,
    /// Decimal rendering of the signed value
    pub decimal: String,
    /// `d.dddde+XX`, only for |value| >= 10^10
    pub scientific: Option<String>,
    /// Lowercased digits, shortened past 30
    pub trimmed_hex: String,
    /// Digits after sign and prefix
    pub digit_count: usize,
    /// Bits in the magnitude
    pub bit_length: u64,
    /// Verdict against 2
    pub comparison: Comparison,
    /// Binary digits of the magnitude
    pub binary: BinaryString,
}

impl Report {
    /// Build the report for an already parsed `input`.
    pub fn from_parsed(input: &str, parsed: &ParsedHex) -> Self {
        Self {
            input: input.to_string(),
            sign: parsed.sign(),
            decimal: parsed.value().to_str_radix(10),
            scientific: scientific(parsed),
            trimmed_hex: trimmed_hex(parsed),
            digit_count: parsed.digit_count(),
            bit_length: parsed.bit_length(),
            comparison: compare(parsed),
            binary: binary_string(parsed),
        }
    }

    /// Parse `input` and build its report.
    pub fn from_input(input: &str) -> Result<Self> {
        let parsed = parse(input)?;
        Ok(Self::from_parsed(input, &parsed))
    }

    /// Single-line JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decimal Value: {}", self.decimal)?;
        writeln!(
            f,
            "Scientific Notation: {}",
            self.scientific.as_deref().unwrap_or(SCIENTIFIC_NOT_APPLICABLE)
        )?;
        writeln!(f, "Hex (trimmed for display): {}", self.trimmed_hex)?;
        writeln!(f, "Number of Hex Digits: {}", self.digit_count)?;
        writeln!(f, "Bit Length: {} bits", self.bit_length)?;
        writeln!(f, "{}", self.comparison.verdict())?;
        if self.binary.is_truncated() {
            writeln!(f, "Binary representation too large to display fully.")?;
        }
        write!(f, "Binary Representation: {}", self.binary)
    }
}
