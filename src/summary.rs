//! Pure balance and summary calculators over a movements list.
//!
//! Everything here is re-derived from scratch on every call; nothing is
//! cached between computations.

use crate::money::Money;
use rust_decimal::Decimal;
use serde::Serialize;

/// Per-deposit interest below this floor does not count toward the total.
///
/// The floor applies to each deposit's interest individually, not to the
/// summed total.
pub const INTEREST_FLOOR: Money = Money::ONE;

/// Sums all movements. Empty movements sum to zero.
pub fn balance(movements: &[Money]) -> Money {
    movements.iter().copied().sum()
}

/// The income/expense/interest triad derived from a movements list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of all deposits (movements > 0).
    pub total_in: Money,

    /// Magnitude of the sum of all withdrawals (movements < 0).
    pub total_out: Money,

    /// Interest earned: `deposit * rate / 100` per deposit, keeping only
    /// per-deposit amounts at or above [`INTEREST_FLOOR`].
    pub interest: Money,
}

impl Summary {
    /// Computes the summary for the given movements at the given
    /// percentage rate.
    ///
    /// Zero movements belong to neither `total_in` nor `total_out`; they
    /// only participate in [`balance`].
    pub fn compute(movements: &[Money], interest_rate: Decimal) -> Self {
        let total_in = movements.iter().copied().filter(|m| *m > Money::ZERO).sum();

        let spent: Money = movements.iter().copied().filter(|m| *m < Money::ZERO).sum();
        let total_out = spent.abs();

        let factor = interest_rate / Decimal::ONE_HUNDRED;
        let interest = movements
            .iter()
            .copied()
            .filter(|m| *m > Money::ZERO)
            .map(|deposit| deposit * factor)
            .filter(|earned| *earned >= INTEREST_FLOOR)
            .sum();

        Summary {
            total_in,
            total_out,
            interest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn movements(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from).collect()
    }

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_movements_yield_all_zeros() {
        let summary = Summary::compute(&[], Decimal::new(12, 1));

        assert_eq!(balance(&[]), Money::ZERO);
        assert_eq!(summary.total_in, Money::ZERO);
        assert_eq!(summary.total_out, Money::ZERO);
        assert_eq!(summary.interest, Money::ZERO);
    }

    #[test]
    fn test_balance_sums_all_movements() {
        let movs = movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]);
        assert_eq!(balance(&movs), Money::from(3840));
    }

    #[test]
    fn test_totals_split_by_sign() {
        let movs = movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]);
        let summary = Summary::compute(&movs, Decimal::new(12, 1));

        assert_eq!(summary.total_in, Money::from(5020));
        assert_eq!(summary.total_out, Money::from(1180));
    }

    #[test]
    fn test_zero_movements_count_toward_neither_total() {
        let movs = movements(&[100, 0, -40]);
        let summary = Summary::compute(&movs, Decimal::ONE);

        assert_eq!(summary.total_in, Money::from(100));
        assert_eq!(summary.total_out, Money::from(40));
        assert_eq!(balance(&movs), Money::from(60));
    }

    #[test]
    fn test_interest_applies_per_deposit_floor() {
        // Deposits 200, 450, 3000, 70, 1300 at 1.2% earn 2.4, 5.4, 36,
        // 0.84 and 15.6; the floor drops the 0.84.
        let movs = movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]);
        let summary = Summary::compute(&movs, Decimal::new(12, 1));

        assert_eq!(summary.interest, money("59.4"));
    }

    #[test]
    fn test_interest_floor_boundary_is_inclusive() {
        // 100 at 1% earns exactly 1, which qualifies.
        let summary = Summary::compute(&movements(&[100]), Decimal::ONE);
        assert_eq!(summary.interest, Money::ONE);
    }

    #[test]
    fn test_interest_ignores_withdrawals() {
        let summary = Summary::compute(&movements(&[-400, -650]), Decimal::new(12, 1));
        assert_eq!(summary.interest, Money::ZERO);
    }

    #[test]
    fn test_fractional_rate() {
        // 0.7% on deposits 200, 340, 50, 400: 1.4, 2.38, 0.35, 2.8;
        // the 0.35 falls under the floor.
        let movs = movements(&[200, -200, 340, -300, -20, 50, 400, -460]);
        let summary = Summary::compute(&movs, Decimal::new(7, 1));

        assert_eq!(summary.interest, money("6.58"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn movements_strategy() -> impl Strategy<Value = Vec<Money>> {
        prop::collection::vec(-100_000i64..=100_000, 0..=40)
            .prop_map(|values| values.into_iter().map(Money::from).collect())
    }

    /// Property: for any movements list, the balance equals income minus
    /// expenses, and all summary components are non-negative.
    #[test]
    fn balance_equals_total_in_minus_total_out() {
        proptest!(|(movements in movements_strategy())| {
            let summary = Summary::compute(&movements, Decimal::new(12, 1));

            prop_assert_eq!(balance(&movements), summary.total_in - summary.total_out);
            prop_assert!(summary.total_in >= Money::ZERO);
            prop_assert!(summary.total_out >= Money::ZERO);
            prop_assert!(summary.interest >= Money::ZERO);
        });
    }
}
