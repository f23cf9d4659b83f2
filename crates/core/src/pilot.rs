//! Scripted player that drives a session through real pointer input.
//! This module exists so headless harnesses and tests can play whole runs without a window.
//! It does not own battle rules; it only reads public state and produces `FrameInput`.

use crate::catalog::{PoolKind, RitualPools};
use crate::geometry::{FrameInput, Vec2, screen_center};
use crate::menu::MenuPage;
use crate::ritual::{Challenge, MinigameState};
use crate::screen::{BattleScreen, BattleState};
use crate::stack::ScreenStack;
use crate::stats::{StatKind, Stats};

/// How the pilot picks its next ritual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PilotPolicy {
    /// Heal and repair when low, otherwise the strongest affordable attack.
    #[default]
    Balanced,
    /// Always the cheapest attack; restores mana when it cannot pay.
    Cheapest,
}

#[derive(Clone, Debug, Default)]
pub struct Pilot {
    policy: PilotPolicy,
    pointer: Vec2,
    pressed_last_frame: bool,
}

fn affordable(pools: &RitualPools, stats: &Stats, label: &str) -> bool {
    pools
        .find(label)
        .and_then(|(kind, index)| pools.get(kind, index))
        .is_some_and(|ritual| ritual.check_mana(stats.mana()).is_ok())
}

impl Pilot {
    pub fn new(policy: PilotPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    /// Ritual the pilot wants to cast from the current menu.
    pub fn choose_ritual(&self, battle: &BattleScreen) -> &'static str {
        let ctx = battle.current();
        let pools = ctx.pools();
        let stats = &ctx.player().stats;
        let can = |label| affordable(pools, stats, label);

        match self.policy {
            PilotPolicy::Balanced => {
                if stats.ratio(StatKind::Health) < 0.5 && can("Heal") {
                    "Heal"
                } else if stats.ratio(StatKind::Shield) < 0.3 && can("Repair shield") {
                    "Repair shield"
                } else if ctx.enemy().stats.health() > 20.0 && can("Obliterate") {
                    "Obliterate"
                } else if can("Fireball") {
                    "Fireball"
                } else {
                    "Restore mana"
                }
            }
            PilotPolicy::Cheapest => {
                if can("Fireball") {
                    "Fireball"
                } else {
                    "Restore mana"
                }
            }
        }
    }

    /// Input for the next frame. Presses are always followed by a release.
    pub fn next_input(&mut self, stack: &ScreenStack) -> FrameInput {
        if self.pressed_last_frame {
            self.pressed_last_frame = false;
            return FrameInput::hover(self.pointer);
        }

        if stack.top_message().is_some() {
            return self.press(screen_center());
        }

        let battle = stack.battle();
        if !battle.scripted().is_empty() {
            return self.hover(self.pointer);
        }

        match battle.state() {
            BattleState::PlayerMenu => self.navigate_menu(battle),
            BattleState::PlayerRitual => match ritual_pointer(battle) {
                Some(at) => self.hover(at),
                None => self.hover(self.pointer),
            },
            _ => self.hover(self.pointer),
        }
    }

    fn navigate_menu(&mut self, battle: &BattleScreen) -> FrameInput {
        let label = self.choose_ritual(battle);
        let menu = battle.menu();
        let wanted = match battle.current().pools().find(label) {
            Some((PoolKind::Offense, _)) => MenuPage::Offense,
            Some((PoolKind::Utility, _)) => MenuPage::Utility,
            Some((PoolKind::Mana, _)) | None => MenuPage::Main,
        };

        let entry = if menu.page() == wanted {
            label
        } else {
            match (menu.page(), wanted) {
                (MenuPage::Main, MenuPage::Offense) => "Attack rituals",
                (MenuPage::Main, MenuPage::Utility) => "Utility rituals",
                _ => "Go back",
            }
        };

        match menu.entry_center(entry) {
            Some(at) => self.press(at),
            None => self.hover(self.pointer),
        }
    }

    fn press(&mut self, at: Vec2) -> FrameInput {
        self.pointer = at;
        self.pressed_last_frame = true;
        FrameInput::click(at)
    }

    fn hover(&mut self, at: Vec2) -> FrameInput {
        self.pointer = at;
        FrameInput::hover(at)
    }
}

/// Where the pointer should be to make progress on the running minigame.
pub fn ritual_pointer(battle: &BattleScreen) -> Option<Vec2> {
    let minigame = battle.ritual().minigame()?;
    if minigame.state() != MinigameState::InProgress {
        return None;
    }

    match minigame.challenge() {
        Challenge::Symbol(symbol) => symbol.next_point().map(|point| point.center),
        Challenge::Aura(aura) => aura
            .zones()
            .iter()
            .min_by(|a, b| a.radius.total_cmp(&b.radius))
            .map(|zone| zone.center),
        Challenge::Drag(drag) => match drag.held() {
            Some(held) => {
                let from = drag.tokens()[held].position;
                drag.targets()
                    .iter()
                    .min_by(|a, b| from.distance(a.center).total_cmp(&from.distance(b.center)))
                    .map(|target| target.center)
            }
            None => drag.tokens().iter().find(|token| !token.deposited).map(|token| token.position),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::output::FrameOutput;

    #[test]
    fn pilot_casts_an_opening_attack() {
        let mut stack = SessionConfig::new(3).start().expect("session starts");
        let mut pilot = Pilot::new(PilotPolicy::Balanced);
        let mut out = FrameOutput::new();
        for _ in 0..400 {
            let input = pilot.next_input(&stack);
            stack.update(1.0, &input, &mut out);
            if stack.battle().state() == BattleState::PlayerRitual {
                break;
            }
        }
        assert_eq!(stack.battle().state(), BattleState::PlayerRitual);
        // Obliterate costs 50.
        assert_eq!(stack.battle().current().player().stats.get(StatKind::Mana), 50.0);
    }

    #[test]
    fn balanced_policy_heals_when_low() {
        let mut stack = SessionConfig::new(3).start().expect("session starts");
        let pilot = Pilot::default();
        assert_eq!(pilot.choose_ritual(stack.battle()), "Obliterate");

        let screen = stack.battle_mut();
        screen.current_mut().player_mut().stats.set(StatKind::Health, 30.0);
        assert_eq!(pilot.choose_ritual(screen), "Heal");
        screen.current_mut().player_mut().stats.set(StatKind::Mana, 0.0);
        assert_eq!(pilot.choose_ritual(screen), "Restore mana");
    }

    #[test]
    fn presses_never_repeat_on_consecutive_frames() {
        let mut stack = SessionConfig::new(9).start().expect("session starts");
        let mut pilot = Pilot::new(PilotPolicy::Cheapest);
        let mut out = FrameOutput::new();
        let mut previous = false;
        for _ in 0..2_000 {
            let input = pilot.next_input(&stack);
            assert!(!(previous && input.primary));
            previous = input.primary;
            stack.update(1.0, &input, &mut out);
            out.clear();
        }
    }
}
