//! Battle screen orchestration across an ordered roster of encounters.
//! This module exists to sequence menus, rituals, enemy turns and narration in a fixed frame order.
//! It does not own overlay stacking, rendering backends, or roster loading.

mod flow;
mod hash;
mod narration;

pub use flow::{
    ENEMY_STUNNED, GAME_OVER_MESSAGE, NEXT_DEMON, NOT_ENOUGH_MANA, PLAYER_STUNNED, VICTORY_MESSAGE,
};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Tint};
use crate::catalog::RitualDefinition;
use crate::context::BattleContext;
use crate::geometry::{FrameInput, SCREEN_HEIGHT, SCREEN_WIDTH, Vec2};
use crate::hud::StatsPanel;
use crate::menu::{BattleMenu, MENU_BAR_HEIGHT};
use crate::output::FrameOutput;
use crate::random::range_f32;
use crate::ritual::RitualContext;
use crate::scripted::{ANNOUNCE_SECONDS, ScriptedQueue};

const ENEMY_BOB_RATE: f32 = 0.06;
const ENEMY_BOB_MAGNITUDE: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BattleState {
    PlayerMenu,
    PlayerRitual,
    BeforeEnemyTurn,
    EnemyTurn,
    BeforePlayerTurn,
    ToNextCtx,
    ToGameOver,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

pub struct BattleScreen {
    seed: u64,
    frame: u64,
    rng: ChaCha8Rng,
    encounters: Vec<BattleContext>,
    index: usize,
    state: BattleState,
    menu: BattleMenu,
    ritual: RitualContext,
    active_ritual: Option<RitualDefinition>,
    scripted: ScriptedQueue,
    notifications: Vec<String>,
    enemy_shake: f32,
    enemy_bob: f32,
    enemy_offset: Vec2,
    player_panel: StatsPanel,
    enemy_panel: StatsPanel,
}

fn enemy_anchor() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - 75.0)
}

impl BattleScreen {
    /// Panics when `encounters` is empty.
    pub fn new(encounters: Vec<BattleContext>, seed: u64) -> Self {
        assert!(!encounters.is_empty(), "battle screen needs at least one encounter");
        // Encounters always open on the player's turn.
        assert!(encounters[0].is_player_turn(), "encounters must start on the player's turn");

        let menu = BattleMenu::new(encounters[0].pools());
        let mut scripted = ScriptedQueue::new();
        scripted.push_text(ANNOUNCE_SECONDS, "Battle start!");
        log::info!("battle start: {} encounters, seed {seed}", encounters.len());

        let mut screen = Self {
            seed,
            frame: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            encounters,
            index: 0,
            state: BattleState::PlayerMenu,
            menu,
            ritual: RitualContext::new(),
            active_ritual: None,
            scripted,
            notifications: Vec::new(),
            enemy_shake: 0.0,
            enemy_bob: 0.0,
            enemy_offset: Vec2::ZERO,
            player_panel: StatsPanel::player(),
            enemy_panel: StatsPanel::enemy(),
        };
        screen.refresh_stat_bars();
        screen
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            BattleState::Victory => Some(Outcome::Victory),
            BattleState::GameOver => Some(Outcome::Defeat),
            _ => None,
        }
    }

    pub fn current(&self) -> &BattleContext {
        &self.encounters[self.index]
    }

    pub fn current_mut(&mut self) -> &mut BattleContext {
        &mut self.encounters[self.index]
    }

    pub fn encounter_index(&self) -> usize {
        self.index
    }

    pub fn encounter_count(&self) -> usize {
        self.encounters.len()
    }

    pub fn menu(&self) -> &BattleMenu {
        &self.menu
    }

    pub fn ritual(&self) -> &RitualContext {
        &self.ritual
    }

    pub fn scripted(&self) -> &ScriptedQueue {
        &self.scripted
    }

    pub fn pending_notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn enemy_shake(&self) -> f32 {
        self.enemy_shake
    }

    /// Where the enemy portrait is drawn this frame.
    pub fn enemy_position(&self) -> Vec2 {
        enemy_anchor() + self.enemy_offset
    }

    pub fn player_panel(&self) -> &StatsPanel {
        &self.player_panel
    }

    pub fn enemy_panel(&self) -> &StatsPanel {
        &self.enemy_panel
    }

    /// One frame in fixed order: stat bars, enemy animation, narration,
    /// notification flush, then the current state. An active enemy shake
    /// or narration beat ends the frame early.
    pub fn update(&mut self, dt: f32, input: &FrameInput, out: &mut FrameOutput) {
        self.frame += 1;
        self.refresh_stat_bars();

        if self.animate_enemy(dt) {
            return;
        }

        if !self.scripted.is_empty() {
            self.scripted.update(dt, out);
            return;
        }

        self.flush_notifications(out);

        match self.state {
            BattleState::PlayerMenu => self.update_menu(input, out),
            BattleState::PlayerRitual => self.update_ritual(dt, input, out),
            BattleState::BeforeEnemyTurn => self.before_enemy_turn(),
            BattleState::EnemyTurn => self.enemy_turn(out),
            BattleState::BeforePlayerTurn => self.before_player_turn(out),
            BattleState::ToNextCtx => self.to_next_ctx(out),
            BattleState::ToGameOver => self.to_game_over(out),
            BattleState::GameOver => out.close_battle(),
            BattleState::Victory => {}
        }

        self.collect_events(out);
    }

    fn refresh_stat_bars(&mut self) {
        let ctx = &self.encounters[self.index];
        self.player_panel.refresh(&ctx.player().stats);
        self.enemy_panel.refresh(&ctx.enemy().stats);
    }

    /// Returns true while a hit shake is playing.
    fn animate_enemy(&mut self, dt: f32) -> bool {
        let bob = Vec2::new(0.0, self.enemy_bob.sin() * ENEMY_BOB_MAGNITUDE);

        if self.enemy_shake > 0.0 {
            self.enemy_shake -= dt;
            let s = self.enemy_shake.abs();
            let jitter_x = range_f32(&mut self.rng, -s, s + 0.1);
            let jitter_y = range_f32(&mut self.rng, -s, s + 0.1);
            self.enemy_offset = bob + Vec2::new(jitter_x, jitter_y);
            return true;
        }

        self.enemy_bob += dt * ENEMY_BOB_RATE;
        self.enemy_shake = 0.0;
        self.enemy_offset = bob;
        false
    }

    fn set_state(&mut self, next: BattleState) {
        log::debug!("battle state {:?} -> {next:?}", self.state);
        self.state = next;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.portrait(&self.current().profile().portrait, self.enemy_position());

        if !self.scripted.is_empty() {
            self.scripted.draw(canvas);
            return;
        }

        match self.state {
            BattleState::PlayerMenu => {
                let bar_top = Vec2::new(0.0, SCREEN_HEIGHT - MENU_BAR_HEIGHT);
                canvas.rect(bar_top, SCREEN_WIDTH, MENU_BAR_HEIGHT, Tint::Panel);
                self.menu.draw(canvas);
                self.draw_stat_bars(canvas);
            }
            BattleState::PlayerRitual => {
                if self.ritual.minigame().is_some() {
                    self.ritual.draw(canvas);
                }
            }
            BattleState::EnemyTurn => self.draw_stat_bars(canvas),
            _ => {}
        }
    }

    fn draw_stat_bars(&self, canvas: &mut dyn Canvas) {
        self.player_panel.draw(canvas);
        self.enemy_panel.draw(canvas);
    }
}
