//! End-to-end tour of `math_drill_gen`.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **One batch per operator** at every tier, with fixed seeds so the
//!    output is reproducible.
//! 2. **Solve flow**: reveal a few problems in a `DrillSession`, then tap an
//!    already-solved one to trigger a fresh batch.
//! 3. **Narration**: the text a `RecordingSpeaker` would have read aloud,
//!    with the voice picked from the stored preference.
//! 4. **Times table**: read all ten rows of one table and advance.
//! 5. **Clock**: read a few seeded clock times aloud.
//!
//! Set `RUST_LOG=math_drill_gen=debug` to see the library's tracing output.

use math_drill_gen::{
    generate_batch, random_time_seeded, times_table, BatchRequest, Difficulty, DrillSession, DrillSettings,
    MemoryStore, Narrator, Operator, OperatorSelector, Preferences, RecordingSpeaker,
    SolveOutcome, TimesTableProgress, Voice,
};
use tracing_subscriber::EnvFilter;

fn print_batch(difficulty: Difficulty, selector: OperatorSelector, seed: u64) {
    let batch = generate_batch(&BatchRequest {
        difficulty,
        selector,
        count: 5,
        rng_seed: Some(seed),
    });
    println!("  [{difficulty} / {selector}]");
    for p in &batch {
        println!("    {:<16} key {}", p.to_string(), p.key());
    }
}

fn main() -> math_drill_gen::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ── Batches ────────────────────────────────────────────────────────────
    println!();
    println!("══ Batches ══");
    for (i, d) in Difficulty::ALL.into_iter().enumerate() {
        let selector = match i {
            0 => OperatorSelector::Single(Operator::Add),
            1 => OperatorSelector::Single(Operator::Divide),
            2 => OperatorSelector::Single(Operator::Subtract),
            _ => OperatorSelector::Single(Operator::Multiply),
        };
        print_batch(d, selector, 100 + i as u64);
    }
    print_batch(Difficulty::Hard, "all".parse()?, 7);

    // ── Solve flow ─────────────────────────────────────────────────────────
    let mut store = MemoryStore::new();
    store.set("voicePreference", "dad");
    let prefs = Preferences::load(&store);
    let voices = vec![
        Voice::new("Google UK English Female", "en-GB"),
        Voice::new("Daniel", "en-GB"),
    ];
    let mut narrator = Narrator::new(RecordingSpeaker::default(), prefs, voices);

    let mut session = DrillSession::seeded(DrillSettings::default(), 2024);
    println!();
    println!("══ Solve flow ({} problems) ══", session.problems().len());
    for index in [0usize, 1, 2, 0] {
        let (problem, outcome) = session.solve(index)?;
        match outcome {
            SolveOutcome::Revealed => {
                narrator.speak_solution(&problem)?;
                println!("  revealed #{index}: {problem}  ({} solved)", session.tracker().solved_count());
            }
            SolveOutcome::RequestNewBatch => {
                println!("  #{index} was already solved, new batch of {}", session.problems().len());
            }
        }
    }

    // ── Times table ────────────────────────────────────────────────────────
    println!();
    println!("══ Times table ══");
    let mut table = TimesTableProgress::new();
    table.select(9)?;
    for row in times_table(table.base())? {
        if let Some(spoken) = table.speak_row(row.second_operand) {
            narrator.speak_times_row(&spoken)?;
        }
    }
    println!("  table 9 complete: {}, next base: {:?}", table.is_complete(), table.advance());

    // ── Clock ──────────────────────────────────────────────────────────────
    println!();
    println!("══ Clock ══");
    for seed in [3u64, 4, 5] {
        let time = random_time_seeded(Some(seed));
        let (hour, minute) = time.hand_angles();
        narrator.speak_time(time)?;
        println!("  {time}  hour hand {hour:.2} rad, minute hand {minute:.2} rad");
    }

    // ── Narration log ──────────────────────────────────────────────────────
    println!();
    println!("══ Spoken ({:?} voice) ══", narrator.preferences().voice_preference);
    for u in &narrator.speaker().spoken {
        println!("  [{}] {}", u.voice.as_deref().unwrap_or("default"), u.text);
    }
    Ok(())
}
