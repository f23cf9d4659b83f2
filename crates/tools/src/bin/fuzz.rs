use anyhow::{Result, bail};
use battle::ritual::Challenge;
use battle::run::{drive, report};
use battle::{
    BattleState, FrameInput, Pilot, PilotPolicy, SCREEN_HEIGHT, SCREEN_WIDTH, ScreenStack,
    SessionConfig, Vec2,
};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 20_000)]
    frames: u64,
    /// Share of frames (out of 100) that take random pointer input instead of the pilot's
    #[arg(short, long, default_value_t = 30)]
    noise: u32,
}

fn random_input(rng: &mut ChaCha8Rng) -> FrameInput {
    let x = (rng.next_u32() % SCREEN_WIDTH as u32) as f32;
    let y = (rng.next_u32() % SCREEN_HEIGHT as u32) as f32;
    let roll = rng.next_u32() % 8;
    FrameInput { pointer: Vec2::new(x, y), primary: roll == 0, secondary: roll == 1 }
}

fn check(stack: &ScreenStack, terminal: Option<BattleState>) -> Option<String> {
    let battle = stack.battle();
    let ctx = battle.current();
    for (who, stats) in [("player", &ctx.player().stats), ("enemy", &ctx.enemy().stats)] {
        if stats.mana() < 0.0 {
            return Some(format!("{who} mana went negative"));
        }
        if stats.health() > stats.max_health() || stats.shield() > stats.max_shield() {
            return Some(format!("{who} was healed past its maximum"));
        }
    }
    if let Some(state) = terminal
        && battle.state() != state
    {
        return Some(format!("left terminal state {state:?}"));
    }
    if let Some(minigame) = battle.ritual().minigame()
        && let Challenge::Drag(drag) = minigame.challenge()
        && drag.held().is_some_and(|held| drag.tokens()[held].deposited)
    {
        return Some("a deposited token is still held".to_string());
    }
    None
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} frames...", args.seed, args.frames);
    let mut stack = SessionConfig::new(args.seed).start()?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut pilot = Pilot::new(PilotPolicy::Balanced);
    let mut violation = None;
    let mut terminal = None;

    let failed = drive(
        &mut stack,
        args.frames,
        |stack| {
            if rng.next_u32() % 100 < args.noise {
                random_input(&mut rng)
            } else {
                pilot.next_input(stack)
            }
        },
        |stack, _| {
            if violation.is_none() {
                violation = check(stack, terminal).map(|what| (stack.battle().frame(), what));
            }
            if stack.battle().outcome().is_some() {
                terminal = Some(stack.battle().state());
            }
        },
    );

    if let Some((frame, what)) = violation {
        bail!("invariant failed at frame {frame}: {what}");
    }

    let report = report(&stack, failed);
    println!(
        "Fuzzing completed: {:?} at frame {}, {} rituals failed.",
        report.final_outcome, report.final_frame, report.rituals_failed
    );
    Ok(())
}
