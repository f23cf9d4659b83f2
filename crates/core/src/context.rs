//! Per-encounter battle state and the stat mutations that emit events.
//! This module exists so every stat change goes through one place that records a `BattleEvent`.
//! It does not own turn sequencing or narration display.

use std::mem;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::ai::AiTier;
use crate::catalog::RitualPools;
use crate::event::{BattleEvent, BattleEventKind, Side};
use crate::stats::{StatKind, StatValue, Stats};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub stats: Stats,
    #[serde(default)]
    pub stunned_turns: u32,
}

impl Participant {
    pub fn new(stats: Stats) -> Self {
        Self { stats, stunned_turns: 0 }
    }
}

/// Who the enemy is and how it decides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub name: String,
    /// Renderer-side key for the enemy sprite.
    pub portrait: String,
    pub tier: AiTier,
}

#[derive(Debug)]
pub struct BattleContext {
    player: Participant,
    enemy: Participant,
    profile: EnemyProfile,
    pools: Rc<RitualPools>,
    turn: Side,
    events: Vec<BattleEvent>,
}

impl BattleContext {
    /// The player always acts first in an encounter.
    pub fn new(
        player: Participant,
        enemy: Participant,
        profile: EnemyProfile,
        pools: Rc<RitualPools>,
    ) -> Self {
        Self { player, enemy, profile, pools, turn: Side::Player, events: Vec::new() }
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn enemy(&self) -> &Participant {
        &self.enemy
    }

    pub fn player_mut(&mut self) -> &mut Participant {
        &mut self.player
    }

    pub fn enemy_mut(&mut self) -> &mut Participant {
        &mut self.enemy
    }

    pub fn profile(&self) -> &EnemyProfile {
        &self.profile
    }

    pub fn pools(&self) -> &RitualPools {
        &self.pools
    }

    pub fn pools_handle(&self) -> Rc<RitualPools> {
        Rc::clone(&self.pools)
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn == Side::Player
    }

    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    /// Carry the player's current stats into another encounter.
    pub fn hand_over_player(&self, next: &mut BattleContext) {
        next.player = self.player.clone();
    }

    /// Events recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[BattleEvent] {
        &self.events
    }

    fn participant_mut(&mut self, side: Side) -> &mut Participant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    fn emit(&mut self, side: Side, kind: BattleEventKind) {
        log::debug!("{side:?} {kind:?}");
        self.events.push(BattleEvent::new(side, kind));
    }

    fn damage(&mut self, side: Side, amount: StatValue) {
        self.participant_mut(side).stats.add(StatKind::Health, -amount);
        self.emit(side, BattleEventKind::Damaged(amount));
    }

    fn damage_shield(&mut self, side: Side, amount: StatValue) {
        self.participant_mut(side).stats.add(StatKind::Shield, -amount);
        self.emit(side, BattleEventKind::ShieldDamaged(amount));
    }

    /// Healing never raises a stat above its maximum.
    fn heal(&mut self, side: Side, amount: StatValue) {
        let stats = &mut self.participant_mut(side).stats;
        let healed = (stats.health() + amount).min(stats.max_health());
        stats.set(StatKind::Health, healed.max(stats.health()));
        self.emit(side, BattleEventKind::Healed(amount));
    }

    fn heal_shield(&mut self, side: Side, amount: StatValue) {
        let stats = &mut self.participant_mut(side).stats;
        let healed = (stats.shield() + amount).min(stats.max_shield());
        stats.set(StatKind::Shield, healed.max(stats.shield()));
        self.emit(side, BattleEventKind::ShieldHealed(amount));
    }

    fn stun(&mut self, side: Side, turns: u32) {
        self.participant_mut(side).stunned_turns += turns;
        self.emit(side, BattleEventKind::Stunned(turns));
    }

    pub fn damage_enemy_by(&mut self, amount: StatValue) {
        self.damage(Side::Enemy, amount);
    }

    pub fn damage_enemy_shield_by(&mut self, amount: StatValue) {
        self.damage_shield(Side::Enemy, amount);
    }

    pub fn heal_enemy_by(&mut self, amount: StatValue) {
        self.heal(Side::Enemy, amount);
    }

    pub fn heal_enemy_shield_by(&mut self, amount: StatValue) {
        self.heal_shield(Side::Enemy, amount);
    }

    pub fn stun_enemy(&mut self, turns: u32) {
        self.stun(Side::Enemy, turns);
    }

    pub fn damage_player_by(&mut self, amount: StatValue) {
        self.damage(Side::Player, amount);
    }

    pub fn damage_player_shield_by(&mut self, amount: StatValue) {
        self.damage_shield(Side::Player, amount);
    }

    pub fn heal_player_by(&mut self, amount: StatValue) {
        self.heal(Side::Player, amount);
    }

    pub fn heal_player_shield_by(&mut self, amount: StatValue) {
        self.heal_shield(Side::Player, amount);
    }

    pub fn stun_player(&mut self, turns: u32) {
        self.stun(Side::Player, turns);
    }

    pub fn restore_player_mana(&mut self) {
        self.player.stats.restore_mana();
    }

    /// Pay a ritual's mana cost up front. Not refunded on failure.
    pub fn spend_player_mana(&mut self, amount: StatValue) {
        self.player.stats.add(StatKind::Mana, -amount);
    }

    /// Consume one stunned turn for `side`, returning whether it was stunned.
    pub fn consume_stun(&mut self, side: Side) -> bool {
        let participant = self.participant_mut(side);
        if participant.stunned_turns == 0 {
            return false;
        }
        participant.stunned_turns -= 1;
        true
    }
}
