//! Ritual definitions and the standard player pools.
//! This module exists to bind each ritual's label, cost and clock to its minigame and effect.
//! It does not own menu navigation or turn sequencing.

use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::context::BattleContext;
use crate::geometry::{SCREEN_HEIGHT, SCREEN_WIDTH, Vec2, screen_center, seconds_to_ft};
use crate::output::SoundCue;
use crate::random::range_f32;
use crate::ritual::{AuraRitual, Challenge, DragRitual, Minigame, RitualKind, SymbolRitual};
use crate::stats::StatValue;

pub type ChallengeFactory = fn(&mut ChaCha8Rng) -> Challenge;
pub type RitualEffect = fn(&mut BattleContext);

#[derive(Debug, Error, PartialEq)]
pub enum CastError {
    #[error("not enough mana: {required} required, {available} available")]
    NotEnoughMana { required: StatValue, available: StatValue },
}

#[derive(Clone, Debug)]
pub struct RitualDefinition {
    pub label: &'static str,
    pub summary: &'static str,
    pub kind: RitualKind,
    /// Time budget in seconds.
    pub time: f32,
    pub mana_cost: StatValue,
    pub make: ChallengeFactory,
    pub effect: RitualEffect,
    /// Played when the effect lands.
    pub cue: Option<SoundCue>,
}

impl RitualDefinition {
    /// Menu description: the summary followed by time and mana lines.
    pub fn description(&self) -> String {
        format!("{}\nTime: {}\tMana: {}", self.summary, self.time, self.mana_cost)
    }

    pub fn duration_ft(&self) -> f32 {
        seconds_to_ft(self.time)
    }

    pub fn check_mana(&self, available: StatValue) -> Result<(), CastError> {
        if self.mana_cost <= available {
            Ok(())
        } else {
            Err(CastError::NotEnoughMana { required: self.mana_cost, available })
        }
    }

    /// A fresh, not yet started minigame for this ritual.
    pub fn make_minigame(&self, rng: &mut ChaCha8Rng) -> Minigame {
        Minigame::new(self.kind, (self.make)(rng))
    }

    pub fn apply(&self, ctx: &mut BattleContext) {
        (self.effect)(ctx);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Offense,
    Utility,
    Mana,
}

#[derive(Clone, Debug, Default)]
pub struct RitualPools {
    pub offense: Vec<RitualDefinition>,
    pub utility: Vec<RitualDefinition>,
    pub mana: Vec<RitualDefinition>,
}

impl RitualPools {
    pub fn pool(&self, kind: PoolKind) -> &[RitualDefinition] {
        match kind {
            PoolKind::Offense => &self.offense,
            PoolKind::Utility => &self.utility,
            PoolKind::Mana => &self.mana,
        }
    }

    pub fn get(&self, kind: PoolKind, index: usize) -> Option<&RitualDefinition> {
        self.pool(kind).get(index)
    }

    pub fn find(&self, label: &str) -> Option<(PoolKind, usize)> {
        [PoolKind::Offense, PoolKind::Utility, PoolKind::Mana].into_iter().find_map(|kind| {
            self.pool(kind)
                .iter()
                .position(|ritual| ritual.label == label)
                .map(|index| (kind, index))
        })
    }

    pub fn standard() -> Self {
        Self {
            offense: vec![fireball(), rend_shield(), obliterate()],
            utility: vec![heal(), repair_shield()],
            mana: vec![restore_mana()],
        }
    }
}

fn fireball() -> RitualDefinition {
    RitualDefinition {
        label: "Fireball",
        summary: "Easy ritual.\nConnect the dots.\nLow HP damage.\nMinimal shield damage.",
        kind: RitualKind::Complete,
        time: 4.0,
        mana_cost: 15.0,
        make: |_| {
            let mut symbol = SymbolRitual::default();
            for (x, y) in [(-30.0, 60.0), (0.0, -60.0), (30.0, 60.0), (-50.0, -10.0), (50.0, -10.0)]
            {
                symbol.add_point(Vec2::new(x * 2.8, y * 2.8), 10.0);
            }
            Challenge::Symbol(symbol)
        },
        effect: |ctx| {
            ctx.damage_enemy_by(20.0);
            ctx.damage_enemy_shield_by(5.0);
        },
        cue: Some(SoundCue::Fireball),
    }
}

fn rend_shield() -> RitualDefinition {
    RitualDefinition {
        label: "Rend shield",
        summary: "Medium ritual.\nPrevent dots from disappearing.\nMinimal HP damage.\nLarge shield damage.",
        kind: RitualKind::Resist,
        time: 6.0,
        mana_cost: 20.0,
        make: |_| {
            let mut aura = AuraRitual::default();
            aura.add_point(Vec2::new(0.0, -45.0 * 3.5), 20.0);
            aura.add_point(Vec2::new(-31.0 * 2.8, 31.0 * 3.5), 20.0);
            aura.add_point(Vec2::new(31.0 * 2.8, 31.0 * 3.5), 20.0);
            Challenge::Aura(aura)
        },
        effect: |ctx| {
            ctx.damage_enemy_by(5.0);
            ctx.damage_enemy_shield_by(25.0);
        },
        cue: Some(SoundCue::Fireball),
    }
}

fn obliterate() -> RitualDefinition {
    RitualDefinition {
        label: "Obliterate",
        summary: "Hard ritual.\nConnect the dots.\nMassive HP damage.\nLow shield damage.",
        kind: RitualKind::Complete,
        time: 4.0,
        mana_cost: 50.0,
        make: |_| Challenge::Symbol(border_trace(6, 3, 40.0, 12.0)),
        effect: |ctx| {
            ctx.damage_enemy_shield_by(20.0);
            ctx.damage_enemy_by(60.0);
        },
        cue: Some(SoundCue::Obliterate),
    }
}

/// Points walking clockwise around the screen border, starting top-left.
fn border_trace(columns: usize, rows: usize, inset: f32, radius: f32) -> SymbolRitual {
    let left = -SCREEN_WIDTH / 2.0 + inset;
    let top = -SCREEN_HEIGHT / 2.0 + inset;
    let full_x = SCREEN_WIDTH - inset * 2.0;
    let full_y = SCREEN_HEIGHT - inset * 2.0;
    let x_step = full_x / columns as f32;
    let y_step = full_y / rows as f32;

    let mut symbol = SymbolRitual::default();
    for ix in 0..columns {
        symbol.add_point(Vec2::new(left + x_step * ix as f32, top), radius);
    }
    for iy in 0..=rows {
        symbol.add_point(Vec2::new(left + full_x, top + y_step * iy as f32), radius);
    }
    for ix in (0..columns).rev() {
        symbol.add_point(Vec2::new(left + x_step * ix as f32, top + full_y), radius);
    }
    for iy in (1..rows).rev() {
        symbol.add_point(Vec2::new(left, top + y_step * iy as f32), radius);
    }
    symbol
}

const DRAG_EDGE_OFFSET: f32 = 20.0 * 2.8;

fn heal() -> RitualDefinition {
    RitualDefinition {
        label: "Heal",
        summary: "Easy ritual.\nCollect the dots.\nMedium HP heal.\nMinimal shield self-damage.",
        kind: RitualKind::Complete,
        time: 5.0,
        mana_cost: 30.0,
        make: |rng| {
            let mut drag = DragRitual::default();
            drag.add_target(screen_center());
            for _ in 0..6 {
                let x = range_f32(rng, DRAG_EDGE_OFFSET, SCREEN_WIDTH - DRAG_EDGE_OFFSET);
                let y = range_f32(rng, DRAG_EDGE_OFFSET, SCREEN_HEIGHT - DRAG_EDGE_OFFSET);
                drag.add_draggable(Vec2::new(x, y));
            }
            Challenge::Drag(drag)
        },
        effect: |ctx| {
            ctx.damage_player_shield_by(10.0);
            ctx.heal_player_by(35.0);
        },
        cue: None,
    }
}

fn repair_shield() -> RitualDefinition {
    RitualDefinition {
        label: "Repair shield",
        summary: "Medium ritual.\nCollect the dots.\nMinimal HP self-damage.\nMedium shield restoration.",
        kind: RitualKind::Complete,
        time: 6.0,
        mana_cost: 40.0,
        make: |_| {
            let mut drag = DragRitual::default();
            drag.add_target(screen_center());
            for i in 0..3 {
                let y = DRAG_EDGE_OFFSET + i as f32 * 60.0;
                drag.add_draggable(Vec2::new(DRAG_EDGE_OFFSET, y));
                drag.add_draggable(Vec2::new(SCREEN_WIDTH - DRAG_EDGE_OFFSET, y));
            }
            Challenge::Drag(drag)
        },
        effect: |ctx| {
            ctx.damage_player_by(5.0);
            ctx.heal_player_shield_by(25.0);
        },
        cue: None,
    }
}

fn restore_mana() -> RitualDefinition {
    RitualDefinition {
        label: "Restore mana",
        summary: "Medium ritual.\nRestores your mana.",
        kind: RitualKind::Resist,
        time: 4.0,
        mana_cost: 0.0,
        make: |_| {
            let mut aura = AuraRitual::default();
            for i in -3..4 {
                let step = 30.0 * i as f32;
                aura.add_point(Vec2::new(step, step), 20.0);
            }
            Challenge::Aura(aura)
        },
        effect: |ctx| ctx.restore_player_mana(),
        cue: Some(SoundCue::ShieldUp),
    }
}
