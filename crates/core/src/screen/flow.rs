//! Per-state handlers of the battle screen.

use super::{BattleScreen, BattleState};
use crate::catalog::{CastError, PoolKind, RitualDefinition};
use crate::event::Side;
use crate::geometry::FrameInput;
use crate::menu::{BattleMenu, MenuEvent};
use crate::output::{FrameOutput, SoundCue};
use crate::ritual::MinigameState;
use crate::scripted::{ANNOUNCE_SECONDS, OUTCOME_SECONDS};

pub const NOT_ENOUGH_MANA: &str = "Not enough mana.";
pub const NEXT_DEMON: &str = "The next demon approaches...";
pub const VICTORY_MESSAGE: &str = "You won!";
pub const GAME_OVER_MESSAGE: &str = "Game over!";
pub const ENEMY_STUNNED: &str = "The demon is stunned!";
pub const PLAYER_STUNNED: &str = "You are stunned!";

const FAILURE_SCREEN_SHAKE: f32 = 40.0;

impl BattleScreen {
    pub(super) fn update_menu(&mut self, input: &FrameInput, out: &mut FrameOutput) {
        let Some(event) = self.menu.update(input, out) else {
            return;
        };
        match event {
            MenuEvent::InspectEnemy => out.show_message(self.inspect_enemy_text()),
            MenuEvent::Describe(text) => out.show_message(text),
            MenuEvent::Cast(kind, index) => {
                if let Err(err) = self.cast(kind, index, out) {
                    log::debug!("cast rejected: {err}");
                    out.show_message(NOT_ENOUGH_MANA);
                }
            }
        }
    }

    pub fn inspect_enemy_text(&self) -> String {
        let stats = &self.current().enemy().stats;
        format!(
            "Inspecting enemy...\n\nHealth: {} / {}\nShield: {} / {}\nPower: {}",
            stats.health(),
            stats.max_health(),
            stats.shield(),
            stats.max_shield(),
            stats.power()
        )
    }

    /// Mana gate, then up-front payment. A rejected cast changes nothing.
    fn cast(
        &mut self,
        kind: PoolKind,
        index: usize,
        out: &mut FrameOutput,
    ) -> Result<(), CastError> {
        let pools = self.current().pools_handle();
        let Some(ritual) = pools.get(kind, index) else {
            panic!("menu offered ritual {index} missing from the {kind:?} pool");
        };

        ritual.check_mana(self.current().player().stats.mana())?;
        self.current_mut().spend_player_mana(ritual.mana_cost);
        self.menu.reset();
        self.execute_ritual(ritual.clone(), out);
        Ok(())
    }

    fn execute_ritual(&mut self, ritual: RitualDefinition, out: &mut FrameOutput) {
        log::info!("casting {} ({} mana)", ritual.label, ritual.mana_cost);
        self.scripted.push_text(ANNOUNCE_SECONDS, ritual.label);
        let minigame = ritual.make_minigame(&mut self.rng);
        self.ritual.set_and_start(ritual.duration_ft(), minigame);
        self.active_ritual = Some(ritual);
        self.set_state(BattleState::PlayerRitual);
        out.play(SoundCue::Click);
    }

    pub(super) fn update_ritual(&mut self, dt: f32, input: &FrameInput, out: &mut FrameOutput) {
        self.ritual.update(dt, input, out);

        match self.ritual.state() {
            MinigameState::InProgress => return,
            MinigameState::Success => self.ritual_success(out),
            MinigameState::Failure => self.ritual_failure(out),
            MinigameState::Invalid => unreachable!("started minigame reported invalid"),
        }

        self.ritual.discard();
        self.set_state(BattleState::BeforeEnemyTurn);
    }

    fn ritual_success(&mut self, out: &mut FrameOutput) {
        out.play(SoundCue::Success);
        self.scripted.push_text(OUTCOME_SECONDS, "Success!");

        if let Some(ritual) = self.active_ritual.take() {
            log::info!("{} succeeded", ritual.label);
            ritual.apply(self.current_mut());
            if let Some(cue) = ritual.cue {
                out.play(cue);
            }
        }
    }

    fn ritual_failure(&mut self, out: &mut FrameOutput) {
        if let Some(ritual) = self.active_ritual.take() {
            log::info!("{} failed", ritual.label);
        }
        out.shake_screen(FAILURE_SCREEN_SHAKE);
        self.scripted.push_text(OUTCOME_SECONDS, "Failure!");
        out.play(SoundCue::Failure);
    }

    pub(super) fn before_enemy_turn(&mut self) {
        if self.current().enemy().stats.is_defeated() {
            self.set_state(BattleState::ToNextCtx);
        } else {
            self.scripted.push_text(ANNOUNCE_SECONDS, "Enemy turn!");
            self.current_mut().set_turn(Side::Enemy);
            self.set_state(BattleState::EnemyTurn);
        }
    }

    /// The enemy acts exactly once, then hands the turn back.
    pub(super) fn enemy_turn(&mut self, out: &mut FrameOutput) {
        if self.current_mut().consume_stun(Side::Enemy) {
            out.show_message(ENEMY_STUNNED);
        } else {
            let tier = self.current().profile().tier;
            let chosen = tier.decide(self.current());
            log::info!("{} ({tier:?}) chooses {chosen:?}", self.current().profile().name);
            out.show_message(chosen.message());
            tier.rules().apply(chosen, self.current_mut());
        }
        self.set_state(BattleState::BeforePlayerTurn);
    }

    pub(super) fn before_player_turn(&mut self, out: &mut FrameOutput) {
        if self.current().player().stats.is_defeated() {
            self.set_state(BattleState::ToGameOver);
            return;
        }

        self.current_mut().set_turn(Side::Player);
        if self.current_mut().consume_stun(Side::Player) {
            out.show_message(PLAYER_STUNNED);
            self.set_state(BattleState::BeforeEnemyTurn);
        } else {
            self.scripted.push_text(ANNOUNCE_SECONDS, "Player turn!");
            self.set_state(BattleState::PlayerMenu);
        }
    }

    pub(super) fn to_next_ctx(&mut self, out: &mut FrameOutput) {
        let next = self.index + 1;
        if next >= self.encounters.len() {
            log::info!("every encounter cleared");
            out.show_message(VICTORY_MESSAGE);
            self.set_state(BattleState::Victory);
            return;
        }

        let (cleared, remaining) = self.encounters.split_at_mut(next);
        cleared[self.index].hand_over_player(&mut remaining[0]);
        self.index = next;
        self.menu = BattleMenu::new(self.current().pools());
        self.refresh_stat_bars();
        log::info!(
            "encounter {} of {}: {}",
            self.index + 1,
            self.encounters.len(),
            self.current().profile().name
        );

        out.show_message(NEXT_DEMON);
        self.set_state(BattleState::PlayerMenu);
    }

    pub(super) fn to_game_over(&mut self, out: &mut FrameOutput) {
        log::info!("player defeated in encounter {}", self.index + 1);
        self.set_state(BattleState::GameOver);
        out.show_message(GAME_OVER_MESSAGE);
    }
}
