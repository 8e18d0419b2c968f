//! Running totals carried from month to month during a projection

/// State of the projection at the end of a month
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Revenue accumulated so far
    pub cum_revenue: f64,

    /// Expense accumulated so far
    pub cum_expense: f64,

    /// Cumulative revenue less cumulative expense
    pub cum_profit: f64,

    /// First month cumulative profit reached zero or better
    pub roi_month: Option<u32>,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close out the next month with its revenue and expense.
    ///
    /// Cumulative profit is re-derived from the running totals rather than
    /// accumulated from monthly profit.
    pub fn advance_month(&mut self, revenue: f64, expense: f64) {
        self.month += 1;
        self.cum_revenue += revenue;
        self.cum_expense += expense;
        self.cum_profit = self.cum_revenue - self.cum_expense;

        if self.roi_month.is_none() && self.cum_profit >= 0.0 {
            self.roi_month = Some(self.month);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_month_is_sticky() {
        let mut state = ProjectionState::new();
        state.advance_month(100.0, 200.0);
        assert_eq!(state.roi_month, None);

        state.advance_month(300.0, 200.0);
        assert_eq!(state.roi_month, Some(2));
        assert_eq!(state.cum_profit, 0.0);

        state.advance_month(0.0, 200.0);
        assert!(state.cum_profit < 0.0);
        assert_eq!(state.roi_month, Some(2));
    }
}
