//! Parsing and report settings.
//!
//! Nothing here is read from the environment: every locale-sensitive rule is
//! spelled out so the output does not depend on the host settings.

/// Separators used for amounts, both when reading the export and when
/// printing report values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
    pub currency_symbol: char,
}

impl Default for NumberFormat {
    /// Belgian-Dutch conventions: `1.234,56 €`.
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            currency_symbol: '€',
        }
    }
}

/// Zero-based positions of the interesting columns in an export line.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub recipient: usize,
    pub date: usize,
    pub amount: usize,
    pub description: usize,
}

impl FieldLayout {
    pub fn min_fields(&self) -> usize {
        [self.recipient, self.date, self.amount, self.description]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            recipient: 2,
            date: 4,
            amount: 6,
            description: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub delimiter: u8,
    pub layout: FieldLayout,
    /// `chrono` format string; the field must match it exactly.
    pub date_format: &'static str,
    pub number: NumberFormat,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            layout: FieldLayout::default(),
            date_format: "%d/%m/%Y",
            number: NumberFormat::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub label_width: usize,
    pub value_width: usize,
    pub fraction_digits: u32,
    /// Row limit of the "biggest" reports.
    pub top: usize,
    pub date_format: &'static str,
    pub number: NumberFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_width: 20,
            value_width: 5,
            fraction_digits: 1,
            top: 10,
            date_format: "%d/%m/%Y",
            number: NumberFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub parser: ParserConfig,
    pub report: ReportConfig,
}
