//! Finance aggregation and reports for ExpenseWise
//!
//! The submodules `finance`, `trend`, `category`, `period` and `savings` are the pure
//! aggregator: deterministic reductions of record slices into numbers, zones
//! and fixed-size series. They hold no state and never fail. `dashboard`
//! composes them into a printable, exportable report.

pub mod category;
pub mod dashboard;
pub mod finance;
pub mod period;
pub mod savings;
pub mod trend;

pub use category::{category_budget_share, category_totals, top_categories, CategoryTotal};
pub use dashboard::DashboardReport;
pub use finance::{
    budget_percentage, budget_zone, income_left, net_available, remaining_budget,
    remaining_budget_after_deductions, remaining_income, remaining_money, savings_burn,
    savings_remaining, total_amount, BudgetZone, SavingsBurn,
};
pub use period::{within_period, Period};
pub use savings::{savings_summary, SavingsSummary};
pub use trend::{daily_totals, monthly_totals, round_to_cents, DayTotal, MonthTotal, WEEKDAYS};
