//! Turns drained battle events into notifications, cues and enemy hit shakes.

use super::BattleScreen;
use crate::event::{BattleEventKind, Side, combine_notifications};
use crate::output::{FrameOutput, SoundCue};

const HEALTH_SHAKE_SCALE: f32 = 3.0;
const SHIELD_SHAKE_SCALE: f32 = 2.0;

impl BattleScreen {
    /// Shows every pending notification as one message box.
    pub(super) fn flush_notifications(&mut self, out: &mut FrameOutput) {
        if self.notifications.is_empty() {
            return;
        }
        out.show_message(combine_notifications(&self.notifications));
        self.notifications.clear();
    }

    pub(super) fn collect_events(&mut self, out: &mut FrameOutput) {
        for event in self.current_mut().drain_events() {
            self.notifications.push(event.notification());
            match (event.side, event.kind) {
                (Side::Enemy, BattleEventKind::Damaged(amount)) => {
                    self.enemy_shake = amount * HEALTH_SHAKE_SCALE;
                }
                (Side::Enemy, BattleEventKind::ShieldDamaged(amount)) => {
                    self.enemy_shake = amount * SHIELD_SHAKE_SCALE;
                }
                (Side::Player, BattleEventKind::Damaged(_))
                | (Side::Player, BattleEventKind::ShieldDamaged(_)) => {
                    out.play(SoundCue::EnemyAttack);
                }
                (_, BattleEventKind::Healed(_) | BattleEventKind::ShieldHealed(_)) => {
                    out.play(SoundCue::ShieldUp);
                }
                (_, BattleEventKind::Stunned(_)) => {}
            }
        }
    }
}
