use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::number::parse_amount;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;

/// One booked line of the bank export. Negative amounts are expenses,
/// positive amounts are income.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub recipient: String,
    pub description: String,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        recipient: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            recipient: recipient.into(),
            description: description.into(),
            amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn from_record(record: &StringRecord, config: &ParserConfig) -> Result<Self, ParseError> {
        let layout = &config.layout;
        let expected = layout.min_fields();
        if record.len() < expected {
            return Err(ParseError::MissingField {
                expected,
                found: record.len(),
            });
        }
        let field = |index: usize| record.get(index).unwrap_or_default();

        let amount = parse_amount(field(layout.amount), &config.number)?;
        let date = parse_date(field(layout.date), config.date_format)?;

        Ok(Self {
            date,
            recipient: field(layout.recipient).to_string(),
            description: field(layout.description).to_string(),
            amount,
        })
    }
}

/// Parses a date that must match `format` exactly. `chrono` tolerates
/// single-digit days and months, so the rendered date is compared back to
/// the input to reject those.
pub fn parse_date(raw: &str, format: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw, format)
        .ok()
        .filter(|date| date.format(format).to_string() == raw)
        .ok_or_else(|| ParseError::InvalidDate(raw.to_string()))
}
