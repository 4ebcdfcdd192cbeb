/// Static machine catalog. Names and rates are config, never persisted.

/// Kinds of egg-producing machines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MachineKind {
    EggMachine,
    GrainMill,
    ChickenFactory,
}

impl MachineKind {
    /// All machine kinds in display order.
    pub fn all() -> &'static [MachineKind] {
        &[
            MachineKind::EggMachine,
            MachineKind::GrainMill,
            MachineKind::ChickenFactory,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            MachineKind::EggMachine => "Egg Machine",
            MachineKind::GrainMill => "Grain Mill",
            MachineKind::ChickenFactory => "Chicken Factory",
        }
    }

    /// Eggs per hour per level.
    pub fn base_rate(&self) -> f64 {
        match self {
            MachineKind::EggMachine => 5.0,
            MachineKind::GrainMill => 20.0,
            MachineKind::ChickenFactory => 50.0,
        }
    }

    /// Level a fresh farm starts with. Only the Egg Machine produces from the start.
    pub fn starting_level(&self) -> u32 {
        match self {
            MachineKind::EggMachine => 1,
            MachineKind::GrainMill => 0,
            MachineKind::ChickenFactory => 0,
        }
    }

    /// Cost of the first upgrade.
    pub fn starting_cost(&self) -> f64 {
        match self {
            MachineKind::EggMachine => 100.0,
            MachineKind::GrainMill => 500.0,
            MachineKind::ChickenFactory => 2_000.0,
        }
    }

    /// Position in `MachineKind::all()`.
    pub fn index(&self) -> usize {
        match self {
            MachineKind::EggMachine => 0,
            MachineKind::GrainMill => 1,
            MachineKind::ChickenFactory => 2,
        }
    }
}
