use battle::{PilotPolicy, SessionConfig, run_to_outcome};

const BUDGET: u64 = 200_000;

#[test]
fn identical_seeds_produce_identical_runs() {
    for policy in [PilotPolicy::Balanced, PilotPolicy::Cheapest] {
        let first = run_to_outcome(&SessionConfig::new(12345), policy, BUDGET).expect("run");
        let second = run_to_outcome(&SessionConfig::new(12345), policy, BUDGET).expect("run");
        assert_eq!(first, second, "{policy:?} runs must be reproducible");
    }
}

#[test]
fn different_seeds_produce_different_hashes() {
    let run = |seed| {
        run_to_outcome(&SessionConfig::new(seed), PilotPolicy::Balanced, 5_000).expect("run")
    };
    let first = run(123);
    let second = run(456);
    assert_ne!(
        first.final_snapshot_hash, second.final_snapshot_hash,
        "different seeds must produce different hashes"
    );
}
