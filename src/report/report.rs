use crate::config::ReportConfig;
use crate::transaction::Transaction;

use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: Decimal,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(title: impl Into<String>, rows: Vec<ReportRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// Builds the five reports in the order they are printed.
pub fn all_reports(txs: &[Transaction], config: &ReportConfig) -> Vec<Report> {
    vec![
        expenses_by_month(txs),
        expenses_by_year(txs),
        income_by_year(txs),
        biggest_costs(txs, config),
        biggest_revenue(txs, config),
    ]
}

pub fn expenses_by_month(txs: &[Transaction]) -> Report {
    let totals = sum_by(txs.iter().filter(|tx| tx.is_expense()), |tx| {
        (tx.date.year(), tx.date.month())
    });

    let rows = totals
        .into_iter()
        .map(|((year, month), total)| ReportRow::new(format!("{year}/{month:02}"), total.abs()))
        .collect();

    Report::new("Expenses by month", rows)
}

pub fn expenses_by_year(txs: &[Transaction]) -> Report {
    let totals = sum_by(txs.iter().filter(|tx| tx.is_expense()), |tx| tx.date.year());

    let rows = totals
        .into_iter()
        .map(|(year, total)| ReportRow::new(year.to_string(), total.abs()))
        .collect();

    Report::new("Expenses by year", rows)
}

/// Sorted by year like the expense reports.
pub fn income_by_year(txs: &[Transaction]) -> Report {
    let totals = sum_by(txs.iter().filter(|tx| tx.is_income()), |tx| tx.date.year());

    let rows = totals
        .into_iter()
        .map(|(year, total)| ReportRow::new(year.to_string(), total))
        .collect();

    Report::new("Income by year", rows)
}

pub fn biggest_costs(txs: &[Transaction], config: &ReportConfig) -> Report {
    Report::new(
        "Biggest costs",
        biggest(txs.iter().filter(|tx| tx.is_expense()), config),
    )
}

pub fn biggest_revenue(txs: &[Transaction], config: &ReportConfig) -> Report {
    Report::new(
        "Biggest revenue",
        biggest(txs.iter().filter(|tx| tx.is_income()), config),
    )
}

/// Sums absolute amounts per key. The `BTreeMap` keeps the groups in key
/// order, which is chronological for year and (year, month) keys.
///
/// A total that no longer fits in a `Decimal` is clamped to `Decimal::MAX`.
fn sum_by<'a, K: Ord>(
    txs: impl Iterator<Item = &'a Transaction>,
    key: impl Fn(&Transaction) -> K,
) -> BTreeMap<K, Decimal> {
    txs.fold(BTreeMap::new(), |mut totals, tx| {
        let total = totals.entry(key(tx)).or_insert(Decimal::ZERO);
        *total = total.checked_add(tx.amount.abs()).unwrap_or_else(|| {
            log::warn!("Total overflowed at {} {}, clamping", tx.date, tx.recipient);
            Decimal::MAX
        });
        totals
    })
}

/// Largest amounts first. The sort is stable, so equal amounts keep their
/// order from the export.
fn biggest<'a>(txs: impl Iterator<Item = &'a Transaction>, config: &ReportConfig) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = txs
        .map(|tx| {
            let label = format!(
                "{} {} {}",
                tx.date.format(config.date_format),
                tx.recipient,
                tx.description
            );
            ReportRow::new(label, tx.amount)
        })
        .collect();

    rows.sort_by(|a, b| b.value.abs().cmp(&a.value.abs()));
    rows.truncate(config.top);
    rows
}
