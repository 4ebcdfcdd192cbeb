//! Production ledger logic — pure functions, fully testable.

use crate::ledger::Ledger;

pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Cost multiplier applied after each upgrade, floored to an integer.
pub const COST_GROWTH: f64 = 1.5;

/// Accrue passive production up to `now_ms` and move the accrual cursor.
///
/// Balance grows by elapsed_hours × rate for every machine; calling again
/// with the same timestamp is a no-op. `now_ms` is expected to be at or
/// after the cursor; a cursor from the future (tampered save) clamps the
/// elapsed time to zero instead of deducting.
pub fn accrue(ledger: &mut Ledger, now_ms: u64) {
    let elapsed_ms = now_ms.saturating_sub(ledger.last_tick_ms);
    ledger.last_tick_ms = now_ms;
    if elapsed_ms == 0 {
        return;
    }
    let hours = elapsed_ms as f64 / MS_PER_HOUR;
    ledger.balance += hours * ledger.total_rate_per_hour();
}

/// Try to level up `machines[index]`. Returns true if the purchase succeeded.
///
/// On success the cost is deducted, the level goes up by one, and the next
/// cost becomes floor(cost × 1.5). Insufficient balance leaves the ledger
/// untouched. An out-of-range index is a precondition violation and panics.
pub fn upgrade(ledger: &mut Ledger, index: usize) -> bool {
    let cost = ledger.machines[index].upgrade_cost;
    if ledger.balance < cost {
        return false;
    }
    ledger.balance -= cost;
    let machine = &mut ledger.machines[index];
    machine.level += 1;
    machine.upgrade_cost = (cost * COST_GROWTH).floor();
    true
}

/// Manually collect one minute's worth of production. Always succeeds.
/// Returns the amount added.
pub fn collect(ledger: &mut Ledger) -> f64 {
    let amount = ledger.total_rate_per_hour() / 60.0;
    ledger.balance += amount;
    amount
}

/// Format an egg count for display: floored, with thousands separators
/// (e.g. 1234567.8 → "1,234,567").
pub fn format_eggs(n: f64) -> String {
    let whole = n.floor().max(0.0) as u64;
    let digits = whole.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}
