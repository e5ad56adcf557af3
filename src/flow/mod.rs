//! Proportional decomposition of total income and expenses into the
//! node/edge graph behind the drill-down flow diagram.
//!
//! These splits are presentation heuristics with deliberate clamps;
//! edges are not guaranteed to sum exactly to node totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::period::{filter_in_period, Period};
use crate::records::Snapshot;

/// Share of income routed to the savings flow before clamping.
pub const SAVINGS_SHARE: f64 = 0.30;
/// Share of the savings flow available to goals before clamping.
pub const GOALS_SHARE: f64 = 0.40;
/// Flow allowance per active goal, in base units.
pub const GOAL_FLOW_UNIT: f64 = 1000.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// Per-category expense total for the category drill-down level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub total: f64,
}

/// Overview level: income splits into a savings flow (capped by the
/// actual balance) and an expense flow; goals draw from savings up to a
/// per-goal allowance, and goal-funded expenses flow back out.
pub fn overview_graph(snapshot: &Snapshot) -> FlowGraph {
    let total_income: f64 = snapshot.incomes.iter().map(|income| income.amount).sum();
    let balance = snapshot.latest_balance().unwrap_or(0.0);
    let savings_flow = balance.min(SAVINGS_SHARE * total_income);
    let expense_flow = total_income - savings_flow;
    let goals_flow = (GOALS_SHARE * savings_flow)
        .min(snapshot.active_goal_count() as f64 * GOAL_FLOW_UNIT);
    let goal_expense_total: f64 = snapshot
        .expenses
        .iter()
        .filter(|expense| expense.goal_id.is_some())
        .map(|expense| expense.amount)
        .sum();

    FlowGraph {
        nodes: vec![
            node("income", "Income", total_income),
            node("savings", "Savings", savings_flow),
            node("expenses", "Expenses", expense_flow),
            node("goals", "Goals", goals_flow),
        ],
        edges: vec![
            edge("income", "savings", savings_flow),
            edge("income", "expenses", expense_flow),
            edge("savings", "goals", goals_flow),
            edge("goals", "expenses", goal_expense_total),
        ],
    }
}

/// Expense-detail level: total expenses split into fixed and one-time
/// sub-totals.
///
/// The total node honors the active period filter, but the one-time leaf
/// is recomputed from the full unfiltered expense list, so the children
/// need not sum to the parent.
pub fn expense_graph(snapshot: &Snapshot, period: Option<&Period>) -> FlowGraph {
    let filtered_total: f64 = filter_in_period(&snapshot.expenses, period)
        .iter()
        .map(|expense| expense.amount)
        .sum();
    let fixed_total: f64 = snapshot
        .active_fixed_expenses()
        .map(|fixed| fixed.amount)
        .sum();
    let one_time_total: f64 = snapshot.expenses.iter().map(|expense| expense.amount).sum();

    FlowGraph {
        nodes: vec![
            node("expenses", "Expenses", filtered_total + fixed_total),
            node("fixed", "Fixed", fixed_total),
            node("one_time", "One-time", one_time_total),
        ],
        edges: vec![
            edge("expenses", "fixed", fixed_total),
            edge("expenses", "one_time", one_time_total),
        ],
    }
}

/// Category totals of one-time expenses; uncategorized entries already
/// default to the fallback category at the record level. Zero-value
/// categories are omitted.
pub fn expense_category_totals(snapshot: &Snapshot) -> Vec<CategoryTotal> {
    let mut buckets = BTreeMap::new();
    for expense in &snapshot.expenses {
        *buckets.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    collect_totals(buckets.into_iter().map(|(cat, total)| (cat.label(), total)))
}

/// Category totals of active fixed expenses, zero-value categories
/// omitted.
pub fn fixed_category_totals(snapshot: &Snapshot) -> Vec<CategoryTotal> {
    let mut buckets = BTreeMap::new();
    for fixed in snapshot.active_fixed_expenses() {
        *buckets.entry(fixed.category).or_insert(0.0) += fixed.amount;
    }
    collect_totals(buckets.into_iter().map(|(cat, total)| (cat.label(), total)))
}

fn collect_totals<'a, I>(buckets: I) -> Vec<CategoryTotal>
where
    I: Iterator<Item = (&'a str, f64)>,
{
    buckets
        .filter(|(_, total)| total.abs() > f64::EPSILON)
        .map(|(label, total)| CategoryTotal {
            label: label.to_string(),
            total,
        })
        .collect()
}

fn node(id: &str, name: &str, value: f64) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        name: name.to_string(),
        value,
    }
}

fn edge(source: &str, target: &str, value: f64) -> FlowEdge {
    FlowEdge {
        source: source.to_string(),
        target: target.to_string(),
        value,
    }
}
