use chrono::NaiveDate;
use finance_core::flow::{
    expense_category_totals, expense_graph, fixed_category_totals, overview_graph, FlowEdge,
    GOAL_FLOW_UNIT,
};
use finance_core::period::month_period;
use finance_core::records::{
    Expense, ExpenseCategory, FixedExpense, FixedExpenseCategory, Frequency, Goal, Income, Saving,
    SavingType, Snapshot,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn edge_value(edges: &[FlowEdge], source: &str, target: &str) -> f64 {
    edges
        .iter()
        .find(|edge| edge.source == source && edge.target == target)
        .map(|edge| edge.value)
        .expect("edge present")
}

#[test]
fn savings_flow_is_capped_by_the_actual_balance() {
    let mut snapshot = Snapshot::new();
    snapshot
        .incomes
        .push(Income::new(date(2026, 1, 1), "salary", 10000.0));
    snapshot
        .savings
        .push(Saving::new(date(2026, 1, 15), 2000.0, SavingType::Balance));

    let graph = overview_graph(&snapshot);
    assert_eq!(edge_value(&graph.edges, "income", "savings"), 2000.0);
    assert_eq!(edge_value(&graph.edges, "income", "expenses"), 8000.0);
}

#[test]
fn savings_flow_is_capped_by_the_income_share() {
    let mut snapshot = Snapshot::new();
    snapshot
        .incomes
        .push(Income::new(date(2026, 1, 1), "salary", 10000.0));
    snapshot
        .savings
        .push(Saving::new(date(2026, 1, 15), 999999.0, SavingType::Balance));

    let graph = overview_graph(&snapshot);
    assert_eq!(edge_value(&graph.edges, "income", "savings"), 3000.0);
}

#[test]
fn goals_flow_is_capped_by_the_active_goal_allowance() {
    let mut snapshot = Snapshot::new();
    snapshot
        .incomes
        .push(Income::new(date(2026, 1, 1), "salary", 100000.0));
    snapshot
        .savings
        .push(Saving::new(date(2026, 1, 15), 50000.0, SavingType::Balance));
    snapshot.goals.push(Goal::new("emergency fund"));

    let graph = overview_graph(&snapshot);
    // 40% of the 30000 savings flow would be 12000; one active goal caps
    // the flow at the per-goal allowance.
    assert_eq!(edge_value(&graph.edges, "savings", "goals"), GOAL_FLOW_UNIT);
}

#[test]
fn goal_funded_expenses_flow_from_goals_to_expenses() {
    let mut snapshot = Snapshot::new();
    snapshot
        .incomes
        .push(Income::new(date(2026, 1, 1), "salary", 10000.0));
    let goal_id = Uuid::new_v4();
    snapshot.expenses.push(Expense::for_goal(
        date(2026, 1, 5),
        "course",
        750.0,
        goal_id,
        None,
    ));
    snapshot
        .expenses
        .push(Expense::new(date(2026, 1, 6), "unrelated", 9999.0));

    let graph = overview_graph(&snapshot);
    assert_eq!(edge_value(&graph.edges, "goals", "expenses"), 750.0);
}

#[test]
fn expense_detail_recomputes_one_time_from_the_full_list() {
    let mut snapshot = Snapshot::new();
    snapshot
        .expenses
        .push(Expense::new(date(2026, 1, 5), "in window", 1000.0));
    snapshot
        .expenses
        .push(Expense::new(date(2026, 2, 5), "out of window", 400.0));
    snapshot
        .fixed_expenses
        .push(FixedExpense::new("rent", 3000.0, Frequency::Monthly));

    let january = month_period(2026, 1);
    let graph = expense_graph(&snapshot, Some(&january));
    // The one-time leaf ignores the filter while the total honors it, so
    // the children do not sum to the parent.
    assert_eq!(edge_value(&graph.edges, "expenses", "one_time"), 1400.0);
    assert_eq!(edge_value(&graph.edges, "expenses", "fixed"), 3000.0);
    let total = graph
        .nodes
        .iter()
        .find(|node| node.id == "expenses")
        .unwrap()
        .value;
    assert_eq!(total, 4000.0);
}

#[test]
fn category_totals_omit_zero_value_categories() {
    let mut snapshot = Snapshot::new();
    let mut groceries = Expense::new(date(2026, 1, 2), "food", 800.0);
    groceries.category = ExpenseCategory::Groceries;
    snapshot.expenses.push(groceries);
    // Defaults land in the fallback category.
    snapshot
        .expenses
        .push(Expense::new(date(2026, 1, 3), "odd", 200.0));

    let totals = expense_category_totals(&snapshot);
    assert_eq!(totals.len(), 2);
    assert!(totals
        .iter()
        .any(|entry| entry.label == "Groceries" && entry.total == 800.0));
    assert!(totals
        .iter()
        .any(|entry| entry.label == "Misc" && entry.total == 200.0));
}

#[test]
fn fixed_category_totals_only_count_active_bills() {
    let mut snapshot = Snapshot::new();
    let mut rent = FixedExpense::new("rent", 3000.0, Frequency::Monthly);
    rent.category = FixedExpenseCategory::Housing;
    snapshot.fixed_expenses.push(rent);
    let mut cancelled = FixedExpense::new("gym", 900.0, Frequency::Monthly);
    cancelled.category = FixedExpenseCategory::Subscriptions;
    cancelled.is_active = false;
    snapshot.fixed_expenses.push(cancelled);

    let totals = fixed_category_totals(&snapshot);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].label, "Housing");
    assert_eq!(totals[0].total, 3000.0);
}

#[test]
fn decomposition_is_idempotent() {
    let mut snapshot = Snapshot::new();
    snapshot
        .incomes
        .push(Income::new(date(2026, 1, 1), "salary", 10000.0));
    assert_eq!(overview_graph(&snapshot), overview_graph(&snapshot));
    assert_eq!(
        expense_graph(&snapshot, None),
        expense_graph(&snapshot, None)
    );
}
