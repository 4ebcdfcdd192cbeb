//! Ledger state definitions: the egg balance and the machine roster.

use crate::machines::MachineKind;

/// A single production machine.
#[derive(Clone, Debug)]
pub struct Machine {
    pub kind: MachineKind,
    /// Current level. Zero means the machine produces nothing.
    pub level: u32,
    /// Eggs required for the next level.
    pub upgrade_cost: f64,
}

impl Machine {
    pub fn new(kind: MachineKind) -> Self {
        Self {
            level: kind.starting_level(),
            upgrade_cost: kind.starting_cost(),
            kind,
        }
    }

    /// Eggs per hour from this machine.
    pub fn rate_per_hour(&self) -> f64 {
        self.kind.base_rate() * self.level as f64
    }
}

/// The full production ledger: balance, accrual cursor, machines.
///
/// An explicit value object. All mutation goes through `logic` functions or
/// the owning `Session`; nothing lives in module-level state.
#[derive(Clone, Debug)]
pub struct Ledger {
    /// Current egg balance. Never negative.
    pub balance: f64,
    /// Timestamp of the last accrual, in milliseconds since epoch.
    pub last_tick_ms: u64,
    /// Machines in catalog order.
    pub machines: Vec<Machine>,
}

impl Ledger {
    /// A fresh farm at the given wall-clock time.
    pub fn new(now_ms: u64) -> Self {
        Self {
            balance: 0.0,
            last_tick_ms: now_ms,
            machines: MachineKind::all().iter().cloned().map(Machine::new).collect(),
        }
    }

    /// Eggs per hour across all machines.
    pub fn total_rate_per_hour(&self) -> f64 {
        self.machines.iter().map(|m| m.rate_per_hour()).sum()
    }

    /// Whether the balance covers the next upgrade of `machines[index]`.
    pub fn can_afford(&self, index: usize) -> bool {
        self.balance >= self.machines[index].upgrade_cost
    }
}
