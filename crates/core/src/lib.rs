pub mod ai;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod context;
pub mod event;
pub mod geometry;
pub mod hud;
pub mod menu;
pub mod message_box;
pub mod output;
pub mod pilot;
pub mod random;
pub mod ritual;
pub mod run;
pub mod screen;
pub mod scripted;
pub mod stack;
pub mod stats;

pub use ai::{AiTier, EnemyMove};
pub use canvas::{Canvas, RecordingCanvas, TextStyle, Tint};
pub use catalog::{CastError, PoolKind, RitualDefinition, RitualPools};
pub use config::{ConfigError, RosterConfig, SessionConfig};
pub use context::{BattleContext, EnemyProfile, Participant};
pub use event::{BattleEvent, BattleEventKind, Side};
pub use geometry::{FT_PER_SECOND, FrameInput, SCREEN_HEIGHT, SCREEN_WIDTH, Vec2};
pub use output::{FrameOutput, ScreenCommand, SoundCue};
pub use pilot::{Pilot, PilotPolicy, ritual_pointer};
pub use ritual::{Minigame, MinigameState, RitualContext, RitualKind};
pub use run::{RunReport, run_to_outcome};
pub use screen::{BattleScreen, BattleState, Outcome};
pub use stack::ScreenStack;
pub use stats::{StatKind, StatValue, Stats};
