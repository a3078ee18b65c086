//! Driver configuration.

/// Tunables for [`RendezvousDriver`](crate::RendezvousDriver).
#[derive(Clone, Copy, Debug)]
pub struct DriverConfig {
    /// Step budget for the symmetric-maze fallback sweep.
    ///
    /// Equal node counts do not prove two graphs describe the same
    /// maze, so the driver falls back to a literal hunt; genuinely
    /// symmetric disjoint mazes would otherwise keep it busy forever.
    /// The default comfortably covers any maze that fits the display
    /// canvas — a resolving sweep never comes near it.
    pub sweep_step_budget: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            sweep_step_budget: 4096,
        }
    }
}
