use ingstats::config::{Config, ReportConfig};
use ingstats::report::{
    all_reports, biggest_costs, biggest_revenue, expenses_by_month, expenses_by_year,
    format::write_reports,
};
use ingstats::transaction::Transaction;
use ingstats::TransactionStream;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const EXPORT: &str = "\
A;B;ACME;C;01/03/2023;D;-12,50;E;Groceries
A;B;Employer;C;25/03/2023;D;2.500,00;E;Salary
A;B;Landlord;C;01/04/2023;D;-850,00;E;Rent April
A;B;Landlord;C;01/03/2023;D;-850,00;E;Rent March
A;B;Bakery;C;15/12/2022;D;-4,20;E;Bread
A;B;Employer;C;25/12/2022;D;2.400,00;E;Salary
A;B;Garage;C;03/11/2022;D;-1.210,99;E;Car repair
A;B;Friend;C;04/11/2022;D;25,00;E;Dinner share
A;B;ACME;C;not a date;D;-999,00;E;Broken date
A;B;ACME;C;05/05/2023;D;n/a;E;Broken amount
";

fn parse(content: &str) -> Vec<Transaction> {
    TransactionStream::from_reader(content.as_bytes(), &Config::default().parser).collect()
}

#[test]
fn test_biggest_rows_come_from_parsed_records_with_expected_sign() {
    let txs = parse(EXPORT);
    let config = ReportConfig::default();

    for row in biggest_costs(&txs, &config).rows {
        assert!(row.value < Decimal::ZERO);
        assert!(txs.iter().any(|tx| tx.amount == row.value
            && row.label.contains(&tx.recipient)
            && row.label.contains(&tx.description)));
    }
    for row in biggest_revenue(&txs, &config).rows {
        assert!(row.value > Decimal::ZERO);
        assert!(txs.iter().any(|tx| tx.amount == row.value
            && row.label.contains(&tx.recipient)
            && row.label.contains(&tx.description)));
    }
}

#[test]
fn test_yearly_expenses_equal_sum_of_monthly_expenses() {
    let txs = parse(EXPORT);
    let monthly = expenses_by_month(&txs).rows;
    let yearly = expenses_by_year(&txs).rows;

    assert_eq!(yearly.len(), 2);
    for year in yearly {
        let months: Decimal = monthly
            .iter()
            .filter(|row| row.label.starts_with(&format!("{}/", year.label)))
            .map(|row| row.value)
            .sum();
        assert_eq!(year.value, months, "year {}", year.label);
    }
}

#[test]
fn test_equal_amounts_keep_file_order() {
    let txs = parse(EXPORT);
    let labels: Vec<_> = biggest_costs(&txs, &ReportConfig::default())
        .rows
        .into_iter()
        .map(|row| row.label)
        .collect();

    assert_eq!(
        labels,
        vec![
            "03/11/2022 Garage Car repair",
            "01/04/2023 Landlord Rent April",
            "01/03/2023 Landlord Rent March",
            "01/03/2023 ACME Groceries",
            "15/12/2022 Bakery Bread",
        ]
    );
}

#[test]
fn test_malformed_lines_are_in_no_report() {
    let txs = parse(EXPORT);
    assert_eq!(txs.len(), 8);

    for report in all_reports(&txs, &ReportConfig::default()) {
        for row in report.rows {
            assert!(!row.label.contains("Broken"), "{} in {}", row.label, report.title);
            assert_ne!(row.value, dec!(-999));
        }
    }
}

#[test]
fn test_single_line_contributes_everywhere() {
    let txs = parse("X;Y;ACME;Z;01/03/2023;W;-12,50;Q;Groceries\n");
    let reports = all_reports(&txs, &ReportConfig::default());

    assert_eq!(reports[0].rows[0].label, "2023/03");
    assert_eq!(reports[0].rows[0].value, dec!(12.5));
    assert_eq!(reports[1].rows[0].label, "2023");
    assert_eq!(reports[1].rows[0].value, dec!(12.5));
    assert!(reports[2].rows.is_empty());
    assert_eq!(reports[3].rows[0].value, dec!(-12.50));
    assert!(reports[4].rows.is_empty());
}

#[test]
fn test_full_output() {
    let txs = parse(EXPORT);
    let config = ReportConfig::default();
    let mut out = Vec::new();
    write_reports(&mut out, &all_reports(&txs, &config), &config).unwrap();

    let expected = "
==Expenses by month==
2022/11             \t1.211,0
2022/12             \t  4,2
2023/03             \t862,5
2023/04             \t850,0

==Expenses by year==
2022                \t1.215,2
2023                \t1.712,5

==Income by year==
2022                \t2.425,0
2023                \t2.500,0

==Biggest costs==
03/11/2022 Garage Car repair\t-1.211,0
01/04/2023 Landlord Rent April\t-850,0
01/03/2023 Landlord Rent March\t-850,0
01/03/2023 ACME Groceries\t-12,5
15/12/2022 Bakery Bread\t -4,2

==Biggest revenue==
25/03/2023 Employer Salary\t2.500,0
25/12/2022 Employer Salary\t2.400,0
04/11/2022 Friend Dinner share\t 25,0
";

    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_empty_export_prints_headings_only() {
    let config = ReportConfig::default();
    let mut out = Vec::new();
    write_reports(&mut out, &all_reports(&parse(""), &config), &config).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\n==Expenses by month==\n\n==Expenses by year==\n\n==Income by year==\n\n==Biggest costs==\n\n==Biggest revenue==\n"
    );
}

#[test]
fn test_max_magnitude_amounts_do_not_panic() {
    let line = "A;B;Whale;C;01/01/2023;D;-79.228.162.514.264.337.593.543.950.335;E;Huge\n";
    let txs = parse(&line.repeat(2));
    assert_eq!(txs.len(), 2);

    let config = ReportConfig::default();
    let reports = all_reports(&txs, &config);

    assert_eq!(reports[0].rows[0].value, Decimal::MAX);
    assert_eq!(reports[1].rows[0].value, Decimal::MAX);
    assert_eq!(reports[3].rows.len(), 2);

    let mut out = Vec::new();
    write_reports(&mut out, &reports, &config).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("==Biggest costs=="));
}
