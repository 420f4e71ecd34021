use rust_decimal::Decimal;

/// Aggregate figures shown in the summary dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_savings: Decimal,
}

impl Summary {
    /// Net savings saturate at the `Decimal` bounds instead of overflowing.
    pub fn new(total_income: Decimal, total_expenses: Decimal) -> Self {
        Self {
            total_income,
            total_expenses,
            net_savings: total_income.saturating_sub(total_expenses),
        }
    }

    pub fn checked_new(total_income: Decimal, total_expenses: Decimal) -> Option<Self> {
        Some(Self {
            total_income,
            total_expenses,
            net_savings: total_income.checked_sub(total_expenses)?,
        })
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Total Income: ₹{}", self.total_income),
            format!("Total Expenses: ₹{}", self.total_expenses),
            format!("Net Savings: ₹{}", self.net_savings),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_savings_is_income_minus_expenses() {
        let summary = Summary::new(Decimal::new(1000, 0), Decimal::new(1250, 0));
        assert_eq!(summary.net_savings, Decimal::new(-250, 0));
    }

    #[test]
    fn test_lines_use_currency_prefix() {
        let summary = Summary::new(Decimal::new(10005, 1), Decimal::new(500, 0));
        assert_eq!(
            summary.lines(),
            [
                "Total Income: ₹1000.5".to_string(),
                "Total Expenses: ₹500".to_string(),
                "Net Savings: ₹500.5".to_string(),
            ]
        );
    }

    #[test]
    fn test_net_savings_at_decimal_bounds() {
        let summary = Summary::new(Decimal::MAX, -Decimal::MAX);
        assert_eq!(summary.net_savings, Decimal::MAX);
        assert_eq!(Summary::checked_new(Decimal::MAX, -Decimal::MAX), None);
        assert!(Summary::checked_new(Decimal::MAX, Decimal::ONE).is_some());
    }

    #[test]
    fn test_default_is_all_zero() {
        let summary = Summary::default();
        assert_eq!(summary.lines()[2], "Net Savings: ₹0");
    }
}
