//! Names, labels and help text for the eight assumption fields

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the eight user-editable assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    PseoPages,
    AvgMsv,
    AvgCtr,
    TrafficCr,
    LeadCr,
    Cltv,
    RampUp,
    MonthlyExpense,
}

/// Returned when a key does not name an assumption field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input field: {0}")]
pub struct UnknownField(pub String);

impl InputField {
    /// Form and share-link order
    pub const ALL: [InputField; 8] = [
        InputField::PseoPages,
        InputField::AvgMsv,
        InputField::AvgCtr,
        InputField::TrafficCr,
        InputField::LeadCr,
        InputField::Cltv,
        InputField::RampUp,
        InputField::MonthlyExpense,
    ];

    /// Key used in JSON documents and query strings
    pub fn key(self) -> &'static str {
        match self {
            InputField::PseoPages => "pSEO_pages",
            InputField::AvgMsv => "avg_msv",
            InputField::AvgCtr => "avg_ctr",
            InputField::TrafficCr => "traffic_cr",
            InputField::LeadCr => "lead_cr",
            InputField::Cltv => "cltv",
            InputField::RampUp => "ramp_up",
            InputField::MonthlyExpense => "monthly_expense",
        }
    }

    /// Short label for reports
    pub fn label(self) -> &'static str {
        match self {
            InputField::PseoPages => "Pages",
            InputField::AvgMsv => "Avg. MSV",
            InputField::AvgCtr => "Avg. CTR",
            InputField::TrafficCr => "Traffic CR",
            InputField::LeadCr => "Lead CR",
            InputField::Cltv => "CLTV",
            InputField::RampUp => "Ramp Up",
            InputField::MonthlyExpense => "Monthly Expense",
        }
    }

    /// Help text shown next to the field
    pub fn description(self) -> &'static str {
        match self {
            InputField::PseoPages => "Total number of targeted pages created.",
            InputField::AvgMsv => {
                "Estimated average monthly searches for keywords targeted by each page."
            }
            InputField::AvgCtr => "Estimated percentage of searchers who click your link.",
            InputField::TrafficCr => "Percentage of visitors who become a lead.",
            InputField::LeadCr => "Percentage of leads who become customers.",
            InputField::Cltv => "Estimated total revenue from one customer.",
            InputField::RampUp => {
                "Months for traffic to reach full potential (linear increase assumed)."
            }
            InputField::MonthlyExpense => {
                "Estimated total recurring monthly cost for this SEO strategy \
                 (tools, content, links, personnel, etc.)."
            }
        }
    }

    /// Entered as a whole-number percentage
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            InputField::AvgCtr | InputField::TrafficCr | InputField::LeadCr
        )
    }

    /// Entered as a currency amount
    pub fn is_currency(self) -> bool {
        matches!(self, InputField::Cltv | InputField::MonthlyExpense)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InputField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
