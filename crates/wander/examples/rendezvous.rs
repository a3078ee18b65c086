//! Wander quickstart — a complete two-agent rendezvous from scratch.
//!
//! Demonstrates:
//!   1. Scripting a shared maze world from ASCII art
//!   2. Running the rendezvous driver to a terminal outcome
//!   3. Reading the run report (outcome, turns, both graphs)
//!   4. Overlaying the two graphs into one rendered map
//!
//! Run with:
//!   cargo run --example rendezvous

use wander::prelude::*;
use wander_test_utils::GridWorld;

// ─── The shared maze ────────────────────────────────────────────
//
// A ring with two dead-end spurs. The agents start far apart and
// discover the maze from opposite sides.

const MAZE: &str = "\
A....#
.##..#
.#...#
.#.##.
....#B
##....";

fn main() {
    let world = GridWorld::shared(MAZE);
    let driver = RendezvousDriver::new(world);

    match driver.run() {
        Ok(mut report) => {
            println!("turns elapsed: {}", report.turns);
            println!(
                "connection state: {:?}",
                connection(&report.graph_a, &report.graph_b)
            );
            match report.outcome {
                Outcome::Met => {
                    println!("the agents met\n");
                    match restore_map(&mut report.graph_a, &mut report.graph_b, '@', '&') {
                        Ok(map) => println!("{map}"),
                        Err(e) => println!("map reconstruction failed: {e}"),
                    }
                }
                Outcome::CannotMeet => {
                    println!("the agents wander disjoint mazes; no meeting is possible");
                }
            }
        }
        Err(e) => {
            eprintln!("algorithm error: {e}");
            std::process::exit(1);
        }
    }
}
