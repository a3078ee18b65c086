//! End-to-end driver scenarios on scripted worlds.

use proptest::prelude::*;
use wander_core::{AgentId, DriverError};
use wander_engine::{DriverConfig, Outcome, RendezvousDriver};
use wander_test_utils::{random_maze, GridWorld};

// ── Meeting soundness ───────────────────────────────────────────

#[test]
fn adjacent_agents_meet_in_one_joint_step() {
    let driver = RendezvousDriver::new(GridWorld::shared("A.B"));
    let report = driver.run().unwrap();
    assert_eq!(report.outcome, Outcome::Met);
    assert_eq!(report.turns, 1);
}

#[test]
fn corridor_agents_meet_after_two_joint_steps() {
    let driver = RendezvousDriver::new(GridWorld::shared("A...B"));
    let report = driver.run().unwrap();
    assert_eq!(report.outcome, Outcome::Met);
    assert_eq!(report.turns, 2);
}

#[test]
fn meeting_report_carries_both_graphs() {
    let report = RendezvousDriver::new(GridWorld::shared("A.B"))
        .run()
        .unwrap();
    // Meeting on the middle cell: both graphs know the full corridor.
    assert_eq!(report.graph_a.node_count(), 3);
    assert_eq!(report.graph_b.node_count(), 3);
}

// ── The pass-through case and the resolving sweep ───────────────

#[test]
fn swapping_agents_meet_through_the_fallback_sweep() {
    // Two cells: the agents swap places on the first joint step (no
    // same-cell moment), both finish exploring, and the re-sweep walks
    // agent A back onto B.
    let driver = RendezvousDriver::new(GridWorld::shared("AB"));
    let report = driver.run().unwrap();
    assert_eq!(report.outcome, Outcome::Met);
    assert_eq!(report.turns, 2);
}

proptest! {
    // Any connected shared maze ends in a meeting: by the time both
    // agents advise rendezvous the sweep walks every cell, and the
    // partner is standing on one of them.
    #[test]
    fn shared_random_mazes_always_meet(seed in 0u64..1024) {
        let art = random_maze(7, seed);
        let report = RendezvousDriver::new(GridWorld::shared(&art))
            .run()
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        prop_assert_eq!(report.outcome, Outcome::Met, "seed {}", seed);
    }
}

// ── Impossibility ───────────────────────────────────────────────

#[test]
fn unequal_disjoint_mazes_cannot_meet() {
    // Three cells against five: once the smaller side is done, the
    // size pre-check fires.
    let driver = RendezvousDriver::new(GridWorld::disjoint("A..", "....B"));
    let report = driver.run().unwrap();
    assert_eq!(report.outcome, Outcome::CannotMeet);
}

#[test]
fn unequal_disjoint_mazes_cannot_meet_with_roles_flipped() {
    let driver = RendezvousDriver::new(GridWorld::disjoint("A....", "..B"));
    let report = driver.run().unwrap();
    assert_eq!(report.outcome, Outcome::CannotMeet);
}

// ── Symmetric disjoint mazes ────────────────────────────────────

#[test]
fn symmetric_disjoint_sweep_ends_in_a_contradiction() {
    // Equal counts force the fallback hunt; the sweep completes
    // without an encounter, which the driver treats as fatal rather
    // than looping forever.
    let driver = RendezvousDriver::new(GridWorld::disjoint("A..", "B.."));
    let err = driver.run().unwrap_err();
    assert_eq!(err, DriverError::AdviceContradiction { agent: AgentId::A });
}

#[test]
fn sweep_budget_bounds_the_hunt() {
    let config = DriverConfig {
        sweep_step_budget: 1,
    };
    let driver = RendezvousDriver::with_config(GridWorld::disjoint("A..", "B.."), config);
    let err = driver.run().unwrap_err();
    assert_eq!(err, DriverError::SweepExhausted { steps: 1 });
}
