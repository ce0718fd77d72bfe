use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::observation::Variable;

/// Quality control rules, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    NoData,
    GrossError,
    Swapped,
    Range,
}

impl Rule {
    pub const ALL: [Rule; 4] = [Rule::NoData, Rule::GrossError, Rule::Swapped, Rule::Range];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rule::NoData => "No Data",
            Rule::GrossError => "Gross Error",
            Rule::Swapped => "Swapped",
            Rule::Range => "Range",
        }
    }

    /// Rules that act on a max/min temperature pair and count each record once
    pub fn is_paired(&self) -> bool {
        matches!(self, Rule::Swapped | Rule::Range)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-variable counts for one rule, in `Variable::ALL` order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableCounts([usize; 4]);

impl VariableCounts {
    pub fn new(counts: [usize; 4]) -> Self {
        Self(counts)
    }

    /// Same count under both temperatures, zero elsewhere
    pub fn temperature_pair(count: usize) -> Self {
        Self([0, count, count, 0])
    }

    pub fn get(&self, variable: Variable) -> usize {
        self.0[variable.index()]
    }

    pub fn set(&mut self, variable: Variable, count: usize) {
        self.0[variable.index()] = count;
    }

    pub fn as_array(&self) -> [usize; 4] {
        self.0
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl From<[usize; 4]> for VariableCounts {
    fn from(counts: [usize; 4]) -> Self {
        Self(counts)
    }
}

/// Counts of values affected by each rule. Always four rows by four variables;
/// a rule writing its row again replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLedger {
    rows: [VariableCounts; 4],
}

/// Flattened ledger row used for JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub rule: String,
    #[serde(rename = "Precip")]
    pub precip: usize,
    #[serde(rename = "Max Temp")]
    pub max_temp: usize,
    #[serde(rename = "Min Temp")]
    pub min_temp: usize,
    #[serde(rename = "Wind Speed")]
    pub wind_speed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    pub rules: Vec<LedgerRow>,
}

impl AuditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_row(&mut self, rule: Rule, counts: impl Into<VariableCounts>) {
        self.rows[rule.index()] = counts.into();
    }

    pub fn row(&self, rule: Rule) -> VariableCounts {
        self.rows[rule.index()]
    }

    pub fn count(&self, rule: Rule, variable: Variable) -> usize {
        self.rows[rule.index()].get(variable)
    }

    pub fn rows(&self) -> impl Iterator<Item = (Rule, VariableCounts)> + '_ {
        Rule::ALL.iter().map(move |&rule| (rule, self.row(rule)))
    }

    /// Number of values a rule changed, summed across variables
    pub fn affected_values(&self, rule: Rule) -> usize {
        self.row(rule).total()
    }

    /// Number of distinct records a paired rule touched. Paired rules write the
    /// same count under both temperatures, so the pair is halved. `None` for
    /// single-variable rules, whose rows count values rather than records.
    pub fn paired_records(&self, rule: Rule) -> Option<usize> {
        rule.is_paired().then(|| {
            let row = self.row(rule);
            (row.get(Variable::MaxTemp) + row.get(Variable::MinTemp)) / 2
        })
    }

    pub fn to_report(&self) -> LedgerReport {
        LedgerReport {
            rules: self
                .rows()
                .map(|(rule, counts)| LedgerRow {
                    rule: rule.label().to_string(),
                    precip: counts.get(Variable::Precip),
                    max_temp: counts.get(Variable::MaxTemp),
                    min_temp: counts.get(Variable::MinTemp),
                    wind_speed: counts.get(Variable::WindSpeed),
                })
                .collect(),
        }
    }
}

impl fmt::Display for AuditLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}", "")?;
        for variable in Variable::ALL {
            write!(f, "{:>12}", variable.label())?;
        }
        writeln!(f)?;

        for (rule, counts) in self.rows() {
            write!(f, "{:<12}", rule.label())?;
            for variable in Variable::ALL {
                write!(f, "{:>12}", counts.get(variable))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
