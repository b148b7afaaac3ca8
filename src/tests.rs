//! Unit tests for the `math_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical batch; different seeds → varied batches |
//! | Answer key | Every problem evaluates exactly; division is whole; subtraction positive |
//! | Ranges | Operands, caps, quotients and divisors stay inside each tier's bounds |
//! | Batch size | Exactly `count` problems for every tier/operator |
//! | Mixed operators | `All` produces all four operators over a large batch |
//! | Scenarios | The worked examples for each operator |
//! | Flow | Session solve flow and narration working together |
//! | Clock | Seeded clock times and their spoken form |

use std::collections::HashSet;

use crate::drill_engine::{
    generate_batch, random_time_seeded, time_text, BatchRequest, Difficulty, DrillSession, DrillSettings, Narrator, Operator,
    OperatorSelector, Preferences, Problem, RecordingSpeaker, SolveOutcome, Voice,
    VoicePreference,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(difficulty: Difficulty, selector: impl Into<OperatorSelector>, count: usize, seed: u64) -> BatchRequest {
    BatchRequest {
        difficulty,
        selector: selector.into(),
        count,
        rng_seed: Some(seed),
    }
}

fn all_selectors() -> [OperatorSelector; 5] {
    [
        OperatorSelector::Single(Operator::Add),
        OperatorSelector::Single(Operator::Subtract),
        OperatorSelector::Single(Operator::Multiply),
        OperatorSelector::Single(Operator::Divide),
        OperatorSelector::All,
    ]
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Range rules for one problem at `d`.
fn assert_in_range(p: &Problem, d: Difficulty) {
    let r = d.range();
    match p.operator {
        Operator::Add => {
            assert!(r.contains(p.first_operand) && r.contains(p.second_operand), "{p} at {d}");
        }
        Operator::Subtract => {
            assert!((r.min + 5..=r.max).contains(&p.first_operand), "{p} at {d}");
            assert!((r.min..p.first_operand).contains(&p.second_operand), "{p} at {d}");
        }
        Operator::Multiply => {
            let cap = r.max.min(d.multiply_cap());
            assert!((r.min..=cap).contains(&p.first_operand), "{p} at {d}");
            assert!((r.min..=cap).contains(&p.second_operand), "{p} at {d}");
        }
        Operator::Divide => {
            assert!((r.min..=r.max.min(20)).contains(&p.result), "{p} at {d}");
            assert!((2..=d.max_divisor()).contains(&p.second_operand), "{p} at {d}");
        }
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_batch() {
    for d in Difficulty::ALL {
        for sel in all_selectors() {
            let a = generate_batch(&req(d, sel, 10, 12345));
            let b = generate_batch(&req(d, sel, 10, 12345));
            assert_eq!(a, b, "batch mismatch for {d} {sel}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_batches() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_batch(&req(Difficulty::Hard, OperatorSelector::All, 10, seed));
        let b = generate_batch(&req(Difficulty::Hard, OperatorSelector::All, 10, seed + 500));
        if a == b {
            same_count += 1;
        }
    }
    assert_eq!(same_count, 0, "identical batches across different seeds ({same_count}/{pairs})");
}

#[test]
fn entropy_seed_produces_a_valid_batch() {
    let batch = generate_batch(&BatchRequest::new(OperatorSelector::All));
    assert_eq!(batch.len(), 10);
    assert!(batch.iter().all(Problem::is_consistent));
}

// ── answer key ───────────────────────────────────────────────────────────────

#[test]
fn every_result_is_the_exact_evaluation() {
    for d in Difficulty::ALL {
        for sel in all_selectors() {
            for seed in SEEDS {
                for p in generate_batch(&req(d, sel, 50, seed)) {
                    assert!(p.is_consistent(), "{p} is not consistent ({d} {sel} seed={seed})");
                }
            }
        }
    }
}

#[test]
fn division_is_always_whole_with_divisor_at_least_two() {
    for d in Difficulty::ALL {
        for p in generate_batch(&req(d, Operator::Divide, 300, 77)) {
            assert!(p.second_operand >= 2, "{p}");
            assert_eq!(p.first_operand % p.second_operand, 0, "{p}");
        }
    }
}

#[test]
fn subtraction_never_goes_negative() {
    for d in Difficulty::ALL {
        for p in generate_batch(&req(d, Operator::Subtract, 300, 78)) {
            assert!(p.first_operand > p.second_operand, "{p}");
            assert!(p.result >= 0, "{p}");
        }
    }
}

// ── ranges ───────────────────────────────────────────────────────────────────

#[test]
fn operands_stay_within_tier_rules() {
    for d in Difficulty::ALL {
        for seed in SEEDS {
            for p in generate_batch(&req(d, OperatorSelector::All, 200, seed)) {
                assert_in_range(&p, d);
            }
        }
    }
}

#[test]
fn tier_ranges_match_the_app() {
    let expected = [(Difficulty::Easy, 10), (Difficulty::Normal, 25), (Difficulty::Hard, 50), (Difficulty::Master, 100)];
    for (d, max) in expected {
        assert_eq!(d.range().min, 1);
        assert_eq!(d.range().max, max, "{d}");
    }
}

// ── batch size ───────────────────────────────────────────────────────────────

#[test]
fn batch_has_exactly_count_problems() {
    for d in Difficulty::ALL {
        for sel in all_selectors() {
            for count in [1usize, 2, 10, 37] {
                assert_eq!(generate_batch(&req(d, sel, count, 3)).len(), count, "{d} {sel}");
            }
        }
    }
}

#[test]
fn zero_count_yields_empty_batch() {
    assert!(generate_batch(&req(Difficulty::Easy, Operator::Add, 0, 1)).is_empty());
}

#[test]
fn single_operator_batches_never_mix() {
    for op in Operator::ALL {
        let batch = generate_batch(&req(Difficulty::Normal, op, 40, 5));
        assert!(batch.iter().all(|p| p.operator == op), "{op} batch contained another operator");
    }
}

// ── mixed operators ──────────────────────────────────────────────────────────

#[test]
fn all_selector_uses_every_operator() {
    let batch = generate_batch(&req(Difficulty::Hard, OperatorSelector::All, 400, 2024));
    let seen: HashSet<Operator> = batch.iter().map(|p| p.operator).collect();
    assert_eq!(seen.len(), 4, "only saw {seen:?}");
}

#[test]
fn all_selector_picks_operator_per_problem() {
    // A per-batch pick would make every 10-problem batch single-operator.
    let mixed = SEEDS
        .iter()
        .filter(|&&seed| {
            let batch = generate_batch(&req(Difficulty::Easy, OperatorSelector::All, 10, seed));
            batch.iter().map(|p| p.operator).collect::<HashSet<_>>().len() > 1
        })
        .count();
    assert!(mixed >= 4, "only {mixed}/5 batches mixed operators");
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn easy_add_scenario() {
    let p = generate_batch(&req(Difficulty::Easy, Operator::Add, 1, 10))[0];
    assert!((1..=10).contains(&p.first_operand) && (1..=10).contains(&p.second_operand));
    assert_eq!(p.result, p.first_operand + p.second_operand);
}

#[test]
fn easy_subtract_scenario() {
    let p = generate_batch(&req(Difficulty::Easy, Operator::Subtract, 1, 11))[0];
    assert!((6..=10).contains(&p.first_operand));
    assert!((1..p.first_operand).contains(&p.second_operand));
}

#[test]
fn master_multiply_scenario_keeps_cap() {
    for p in generate_batch(&req(Difficulty::Master, Operator::Multiply, 100, 12)) {
        assert!(p.first_operand <= 15 && p.second_operand <= 15, "{p}");
    }
}

#[test]
fn normal_divide_scenario() {
    for p in generate_batch(&req(Difficulty::Normal, Operator::Divide, 100, 13)) {
        assert!((1..=20).contains(&p.result), "{p}");
        assert!((2..=8).contains(&p.second_operand), "{p}");
        assert_eq!(p.first_operand, p.result * p.second_operand);
    }
}

#[test]
fn hard_all_scenario() {
    let batch = generate_batch(&req(Difficulty::Hard, OperatorSelector::All, 10, 14));
    assert_eq!(batch.len(), 10);
    for p in &batch {
        assert!(p.is_consistent());
        assert_in_range(p, Difficulty::Hard);
    }
}

// ── flow ─────────────────────────────────────────────────────────────────────

#[test]
fn revealed_solution_is_read_aloud() {
    let settings = DrillSettings {
        difficulty: Difficulty::Normal,
        selector: OperatorSelector::Single(Operator::Divide),
        batch_size: 10,
    };
    let mut session = DrillSession::seeded(settings, 55);
    let mut narrator = Narrator::new(
        RecordingSpeaker::default(),
        Preferences { voice_preference: VoicePreference::Mom },
        vec![Voice::new("Samantha", "en-US")],
    );

    let (problem, outcome) = session.solve(0).unwrap();
    assert_eq!(outcome, SolveOutcome::Revealed);
    narrator.speak_solution(&problem).unwrap();

    let spoken = &narrator.speaker().spoken;
    assert_eq!(spoken.len(), 1);
    assert_eq!(
        spoken[0].text,
        format!("{} divided by {} equals {}", problem.first_operand, problem.second_operand, problem.result)
    );
    assert_eq!(spoken[0].voice.as_deref(), Some("Samantha"));
}

#[test]
fn settings_deserialize_from_toml() {
    let settings: DrillSettings = toml::from_str(
        "difficulty = \"hard\"\nselector = \"all\"\n",
    )
    .unwrap();
    assert_eq!(settings.difficulty, Difficulty::Hard);
    assert_eq!(settings.selector, OperatorSelector::All);
    assert_eq!(settings.batch_size, 10);
}

#[test]
fn settings_request_reproduces_session_batch_size() {
    let settings = DrillSettings { batch_size: 4, ..DrillSettings::default() };
    let batch = generate_batch(&settings.to_request(Some(9)));
    assert_eq!(batch.len(), 4);
    assert!(batch.iter().all(|p| p.operator == Operator::Add));
}

// ── clock ────────────────────────────────────────────────────────────────────

#[test]
fn seeded_clock_times_are_readable() {
    for seed in SEEDS {
        let t = random_time_seeded(Some(seed));
        assert_eq!(t, random_time_seeded(Some(seed)));
        let text = time_text(t);
        assert!(text.starts_with(&format!("The time is {} ", t.hours())), "{text}");
        assert_eq!(text.ends_with("o'clock"), t.minutes() == 0, "{text}");
    }
}
