//! Output structures for a twelve-month projection

use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyData {
    /// Display label, e.g. "Month 3"
    pub month: String,

    /// Projection month (1-12)
    #[serde(rename = "monthIndex")]
    pub index: u32,

    pub ramp_factor: f64,

    // Volumes for this month only
    pub traffic: f64,
    pub leads: f64,
    pub customers: f64,
    pub revenue: f64,
    pub expense: f64,
    pub profit: f64,

    // Running totals through this month
    pub cum_revenue: f64,
    pub cum_expense: f64,
    pub cum_profit: f64,
}

/// Complete projection result: the monthly series plus year-end aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResults {
    pub monthly_data: Vec<MonthlyData>,

    pub total_traffic: f64,
    pub total_leads: f64,
    pub total_customers: f64,

    /// Sum of the twelve monthly revenues
    pub total_monthly_revenue: f64,

    pub final_cumulative_revenue: f64,
    pub final_cumulative_expense: f64,
    pub final_cumulative_profit: f64,

    /// First month with non-negative cumulative profit, `None` if not
    /// reached within the horizon (`-1` on the wire)
    #[serde(with = "roi_month_sentinel")]
    pub roi_month: Option<u32>,
}

impl SimulationResults {
    /// Assemble results from the monthly rows, aggregating year-end totals
    pub fn from_months(monthly_data: Vec<MonthlyData>, roi_month: Option<u32>) -> Self {
        let total_traffic: f64 = monthly_data.iter().map(|r| r.traffic).sum();
        let total_leads: f64 = monthly_data.iter().map(|r| r.leads).sum();
        let total_customers: f64 = monthly_data.iter().map(|r| r.customers).sum();
        let total_monthly_revenue: f64 = monthly_data.iter().map(|r| r.revenue).sum();

        let last = monthly_data.last();
        let final_cumulative_revenue = last.map(|r| r.cum_revenue).unwrap_or(0.0);
        let final_cumulative_expense = last.map(|r| r.cum_expense).unwrap_or(0.0);
        let final_cumulative_profit = last.map(|r| r.cum_profit).unwrap_or(0.0);

        Self {
            monthly_data,
            total_traffic,
            total_leads,
            total_customers,
            total_monthly_revenue,
            final_cumulative_revenue,
            final_cumulative_expense,
            final_cumulative_profit,
            roi_month,
        }
    }

    /// Row for a 1-indexed month
    pub fn month(&self, month: u32) -> Option<&MonthlyData> {
        let idx = (month as usize).checked_sub(1)?;
        self.monthly_data.get(idx)
    }

    /// Whether cumulative profit turned non-negative within the horizon
    pub fn roi_reached(&self) -> bool {
        self.roi_month.is_some()
    }

    /// Year total of monthly profit (summed revenue less summed expense)
    pub fn total_monthly_profit(&self) -> f64 {
        self.total_monthly_revenue - self.final_cumulative_expense
    }
}

/// Serialize `Option<u32>` as the month number or `-1`
mod roi_month_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    const NOT_REACHED: i64 = -1;

    pub fn serialize<S: Serializer>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(month) => serializer.serialize_i64(i64::from(*month)),
            None => serializer.serialize_i64(NOT_REACHED),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(u32::try_from(raw).ok().filter(|m| *m >= 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: u32, revenue: f64, expense: f64, cum_revenue: f64, cum_expense: f64) -> MonthlyData {
        MonthlyData {
            month: format!("Month {}", index),
            index,
            ramp_factor: 1.0,
            traffic: 10.0,
            leads: 2.0,
            customers: 1.0,
            revenue,
            expense,
            profit: revenue - expense,
            cum_revenue,
            cum_expense,
            cum_profit: cum_revenue - cum_expense,
        }
    }

    #[test]
    fn test_from_months_aggregates() {
        let months = vec![
            row(1, 100.0, 50.0, 100.0, 50.0),
            row(2, 200.0, 50.0, 300.0, 100.0),
        ];
        let results = SimulationResults::from_months(months, Some(1));

        assert_eq!(results.total_traffic, 20.0);
        assert_eq!(results.total_monthly_revenue, 300.0);
        assert_eq!(results.final_cumulative_expense, 100.0);
        assert_eq!(results.final_cumulative_profit, 200.0);
        assert_eq!(results.total_monthly_profit(), 200.0);
        assert_eq!(results.month(2).map(|r| r.revenue), Some(200.0));
        assert!(results.month(0).is_none());
        assert!(results.month(3).is_none());
    }

    #[test]
    fn test_roi_month_wire_format() {
        let reached = SimulationResults::from_months(vec![row(1, 10.0, 0.0, 10.0, 0.0)], Some(1));
        let json = serde_json::to_value(&reached).unwrap();
        assert_eq!(json["roiMonth"], 1);
        assert_eq!(json["monthlyData"][0]["cumRevenue"], 10.0);

        let missed = SimulationResults::from_months(vec![row(1, 0.0, 10.0, 0.0, 10.0)], None);
        let json = serde_json::to_string(&missed).unwrap();
        assert!(json.contains("\"roiMonth\":-1"));

        let back: SimulationResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back.roi_month, None);
        assert_eq!(back, missed);
    }
}
