//! The AMFI scheme directory and its dump format.
//!
//! AMFI publishes the full scheme list as a semicolon-delimited text
//! dump. Lines ending in "Mutual Fund" are section headers naming the
//! fund house for the rows that follow; rows with fewer than five
//! fields (blank lines, category sub-headers) are skipped.

use serde::{Deserialize, Serialize};

/// One row of the AMFI scheme directory.
///
/// `nav` and `date` hold the dump's point-in-time text verbatim; the
/// directory is a catalogue, not a price series — use
/// [`crate::AmfiClient::nav_history`] for valuations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecord {
    /// AMFI scheme code.
    pub scheme_code: String,
    /// ISIN of the growth/payout plan, if listed.
    pub isin_growth: String,
    /// ISIN of the dividend-reinvestment plan, if listed.
    pub isin_reinvestment: String,
    /// Full scheme name.
    pub scheme_name: String,
    /// NAV as printed in the dump.
    pub nav: String,
    /// NAV date as printed in the dump.
    pub date: String,
    /// Fund house the scheme belongs to, from the section header.
    pub fund_house: String,
}

/// Parses the semicolon-delimited scheme dump.
///
/// The first line (column headers) is skipped. Section-header lines set
/// the fund house attributed to subsequent rows; short rows are
/// silently dropped.
#[must_use]
pub fn parse_scheme_dump(text: &str) -> Vec<SchemeRecord> {
    let mut current_fund_house = String::new();
    let mut records = Vec::new();

    for line in text.lines().skip(1) {
        let line = line.trim();

        if line.ends_with("Mutual Fund") {
            current_fund_house = line.to_string();
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 5 {
            continue;
        }

        records.push(SchemeRecord {
            scheme_code: fields[0].to_string(),
            isin_growth: fields[1].to_string(),
            isin_reinvestment: fields[2].to_string(),
            scheme_name: fields[3].to_string(),
            nav: fields[4].to_string(),
            date: fields.get(5).copied().unwrap_or_default().to_string(),
            fund_house: current_fund_house.clone(),
        });
    }

    records
}
