//! Process-wide game session: owns the ledger, the store, and the timer.
//!
//! The presentation layer talks to the core only through this driver: it
//! feeds timestamps into `pump`, sends discrete commands, and subscribes to
//! mutation events for re-rendering. Every mutation is persisted before
//! subscribers run, so a subscriber always observes saved state.

use crate::clock::{Pacer, ACCRUE_INTERVAL_MS};
use crate::ledger::Ledger;
use crate::logic;
use crate::save::{self, KeyValueStore};

/// Discrete player actions forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Level up the machine at this catalog index.
    Upgrade(usize),
    /// Manually collect one minute's worth of production.
    Collect,
}

/// What changed. Emitted to subscribers after the mutation is persisted.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Passive production was credited.
    Accrued { amount: f64 },
    /// An upgrade went through.
    Upgraded { index: usize, level: u32, next_cost: f64 },
    /// An upgrade was rejected; nothing changed.
    InsufficientFunds { index: usize },
    /// A manual collection was credited.
    Collected { amount: f64 },
}

/// User-visible message for the presentation layer to display.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub is_important: bool,
}

const MAX_NOTICES: usize = 50;

type Subscriber = Box<dyn FnMut(&Ledger, &Event)>;

pub struct Session<S: KeyValueStore> {
    ledger: Ledger,
    store: S,
    pacer: Pacer,
    notices: Vec<Notice>,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the persisted farm (or start fresh), credit everything produced
    /// since the last session, and persist the result.
    pub fn resume(mut store: S, now_ms: u64) -> Self {
        let mut ledger = save::load_ledger(&mut store, now_ms);

        let before = ledger.balance;
        logic::accrue(&mut ledger, now_ms);
        let away_earnings = ledger.balance - before;
        save::save_ledger(&mut store, &ledger);

        let mut session = Self {
            ledger,
            store,
            pacer: Pacer::new(ACCRUE_INTERVAL_MS),
            notices: Vec::new(),
            subscribers: Vec::new(),
        };
        if away_earnings >= 1.0 {
            session.push_notice(
                format!(
                    "🥚 +{} eggs produced while you were away",
                    logic::format_eggs(away_earnings)
                ),
                true,
            );
        }
        session
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Tear down the session and hand the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Register a callback run after every persisted mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Ledger, &Event) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Timer entry point. Call at any frequency with a non-decreasing
    /// wall-clock timestamp; accrual runs about once per second.
    pub fn pump(&mut self, now_ms: u64) {
        if !self.pacer.due(now_ms) {
            return;
        }
        let before = self.ledger.balance;
        logic::accrue(&mut self.ledger, now_ms);
        let amount = self.ledger.balance - before;
        self.commit(Event::Accrued { amount });
    }

    /// Apply a player command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Upgrade(index) => {
                if logic::upgrade(&mut self.ledger, index) {
                    let machine = &self.ledger.machines[index];
                    let event = Event::Upgraded {
                        index,
                        level: machine.level,
                        next_cost: machine.upgrade_cost,
                    };
                    self.push_notice(
                        format!(
                            "⬆️ {} upgraded to level {}",
                            self.ledger.machines[index].kind.name(),
                            self.ledger.machines[index].level
                        ),
                        false,
                    );
                    self.commit(event);
                } else {
                    self.push_notice(
                        format!(
                            "❌ Not enough eggs for {}",
                            self.ledger.machines[index].kind.name()
                        ),
                        true,
                    );
                    // Rejected: nothing to persist, but the display still
                    // needs to surface the notice.
                    self.notify(Event::InsufficientFunds { index });
                }
            }
            Command::Collect => {
                let amount = logic::collect(&mut self.ledger);
                self.commit(Event::Collected { amount });
            }
        }
    }

    /// Persist the mutated ledger, then tell subscribers.
    fn commit(&mut self, event: Event) {
        save::save_ledger(&mut self.store, &self.ledger);
        self.notify(event);
    }

    fn notify(&mut self, event: Event) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.ledger, &event);
        }
    }

    fn push_notice(&mut self, text: String, is_important: bool) {
        self.notices.push(Notice { text, is_important });
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Session<crate::save::LocalStorage> {
    /// Resume from the browser's localStorage at the current wall-clock
    /// time. Returns None when storage access is denied.
    pub fn resume_in_browser() -> Option<Self> {
        let store = crate::save::LocalStorage::open()?;
        Some(Self::resume(store, crate::clock::now_ms()))
    }
}
