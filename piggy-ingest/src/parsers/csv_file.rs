//! Delimited-text export reader.
//!
//! Expected header (column order free, extra columns ignored):
//!   date,amount,description
//!   2024-01-15,-1500.50,Продукты в Пятерочке

use anyhow::{Context, Result};
use piggy_core::Transaction;
use std::io::Read;
use std::path::Path;

use crate::types::RawRecord;

pub fn read_csv_file(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_csv(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse CSV data with a header row into transactions
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut txns = Vec::new();
    for (i, result) in rdr.deserialize::<RawRecord>().enumerate() {
        // header is line 1
        let record = result.with_context(|| format!("row {}", i + 2))?;
        txns.push(record.into_transaction());
    }
    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_basic() {
        let data = "date,amount,description\n\
                    2024-01-15,-1500.50,Продукты в Пятерочке\n\
                    2024-01-10,50000,Зарплата\n";
        let txns = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(txns[0].amount, -1500.50);
        assert_eq!(txns[0].description, "Продукты в Пятерочке");
        assert_eq!(txns[1].amount, 50000.0);
        assert!(!txns[1].is_categorized());
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let data = "description,type,amount,date\n  Метро ,расход, -350 , 2024-01-08 \n";
        let txns = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txns[0].description, "Метро");
        assert_eq!(txns[0].amount, -350.0);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 1, 8));
    }

    #[test]
    fn test_missing_and_bad_values_default() {
        let data = "date,amount,description\nnot-a-date,abc,\n2024-03-01,,Аптека\n";
        let txns = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, None);
        assert_eq!(txns[0].amount, 0.0);
        assert_eq!(txns[0].description, "");
        assert_eq!(txns[1].amount, 0.0);
    }

    #[test]
    fn test_missing_column() {
        let data = "date,description\n2024-03-01,Аптека\n";
        let txns = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(txns[0].amount, 0.0);
        assert_eq!(txns[0].description, "Аптека");
    }

    #[test]
    fn test_header_only() {
        assert!(parse_csv("date,amount,description\n".as_bytes()).unwrap().is_empty());
    }
}
