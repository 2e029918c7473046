use rustledger::models::ExpenseCategory;
use rustledger::months;
use rustledger::services::budget_alerts::{newly_crossed_threshold, render_message, THRESHOLDS};

#[test]
fn thresholds_scan_most_severe_first() {
    assert_eq!(THRESHOLDS, [100, 90, 50]);
}

#[test]
fn no_threshold_below_half() {
    // 0 -> 400 against 1000 stays under every mark
    assert_eq!(newly_crossed_threshold(0.0, 400.0, 1000.0), None);
}

#[test]
fn crossing_half_fires_50() {
    assert_eq!(newly_crossed_threshold(400.0, 600.0, 1000.0), Some(50));
}

#[test]
fn exact_boundary_counts_as_crossed() {
    // landing exactly on ceiling * 0.5 is a crossing
    assert_eq!(newly_crossed_threshold(0.0, 500.0, 1000.0), Some(50));
    // ...and staying there afterwards is not
    assert_eq!(newly_crossed_threshold(500.0, 500.0, 1000.0), None);
}

#[test]
fn single_jump_past_everything_fires_only_100() {
    // one 1200 expense against a 1000 ceiling: 50 and 90 are implied by 100
    // and must not fire
    assert_eq!(newly_crossed_threshold(0.0, 1200.0, 1000.0), Some(100));
}

#[test]
fn jump_over_90_and_100_picks_100() {
    assert_eq!(newly_crossed_threshold(600.0, 1050.0, 1000.0), Some(100));
}

#[test]
fn sequence_400_200_450_fires_at_50_then_100() {
    let ceiling = 1000.0;
    let amounts = [400.0, 200.0, 450.0];

    let mut total = 0.0;
    let mut fired = Vec::new();
    for amount in amounts {
        let before = total;
        total += amount;
        fired.push(newly_crossed_threshold(before, total, ceiling));
    }

    assert_eq!(fired, vec![None, Some(50), Some(100)]);
}

#[test]
fn sequence_1000_850_200_against_2000() {
    let ceiling = 2000.0;

    // A: exactly 50% of the ceiling
    assert_eq!(newly_crossed_threshold(0.0, 1000.0, ceiling), Some(50));
    // B: 1850 >= 1800 (90%)
    assert_eq!(newly_crossed_threshold(1000.0, 1850.0, ceiling), Some(90));
    // C: 2050 >= 2000 (100%)
    assert_eq!(newly_crossed_threshold(1850.0, 2050.0, ceiling), Some(100));
}

#[test]
fn already_crossed_threshold_does_not_refire() {
    // 600 -> 700 against 1000: 50% was crossed earlier, 90% not reached
    assert_eq!(newly_crossed_threshold(600.0, 700.0, 1000.0), None);
}

#[test]
fn zero_or_invalid_ceiling_means_no_budget() {
    assert_eq!(newly_crossed_threshold(0.0, 500.0, 0.0), None);
    assert_eq!(newly_crossed_threshold(0.0, 500.0, -100.0), None);
    assert_eq!(newly_crossed_threshold(0.0, 500.0, f64::NAN), None);
    assert_eq!(newly_crossed_threshold(0.0, 500.0, f64::INFINITY), None);
}

#[test]
fn cent_level_amounts_compare_exactly() {
    // 499.99 -> 500.00 against 1000.00 crosses the 50% mark by one paisa
    assert_eq!(newly_crossed_threshold(499.99, 500.00, 1000.00), Some(50));
    // 499.98 -> 499.99 does not
    assert_eq!(newly_crossed_threshold(499.98, 499.99, 1000.00), None);
}

#[test]
fn fractional_ceiling_boundary() {
    // 50% of 999.99 is 499.995 rupees = 49999.5 scaled paise; 500.00 clears it
    assert_eq!(newly_crossed_threshold(0.0, 500.00, 999.99), Some(50));
    assert_eq!(newly_crossed_threshold(0.0, 499.99, 999.99), None);
}

#[test]
fn message_names_threshold_ceiling_and_category() {
    let msg = render_message(90, 2000.0, ExpenseCategory::Food);
    assert_eq!(msg, "You have used 90% of your ₹2000 budget for Food.");
}

// month key math backing the aggregation window

#[test]
fn month_bounds_are_half_open() {
    let (lo, hi) = months::bounds("2026-01").unwrap();
    // 2026-01-01T00:00:00Z .. 2026-02-01T00:00:00Z
    assert_eq!(lo, 1767225600);
    assert_eq!(hi, 1769904000);

    // the instant the next month starts is excluded
    assert!(months::key_for_timestamp(hi - 1).as_deref() == Some("2026-01"));
    assert!(months::key_for_timestamp(hi).as_deref() == Some("2026-02"));
}

#[test]
fn month_bounds_handle_december_rollover() {
    let (lo, hi) = months::bounds("2025-12").unwrap();
    assert_eq!(months::key_for_timestamp(lo).as_deref(), Some("2025-12"));
    assert_eq!(months::key_for_timestamp(hi).as_deref(), Some("2026-01"));
}

#[test]
fn month_key_validation() {
    assert!(months::is_valid_key("2026-08"));
    assert!(!months::is_valid_key("2026-13"));
    assert!(!months::is_valid_key("2026-00"));
    assert!(!months::is_valid_key("2026-8"));
    assert!(!months::is_valid_key("202608"));
    assert!(!months::is_valid_key("08-2026"));
}

#[test]
fn month_arithmetic_crosses_year_boundaries() {
    assert_eq!(months::key_minus_months("2026-03", 6).as_deref(), Some("2025-09"));
    assert_eq!(months::key_minus_months("2026-01", 1).as_deref(), Some("2025-12"));
    assert_eq!(months::key_minus_months("2026-06", 0).as_deref(), Some("2026-06"));
}
