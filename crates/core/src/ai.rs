//! Rule-based enemy decisions, one priority list per tier.
//! This module exists to keep every tier on the same rule topology with its own thresholds.
//! It does not own turn sequencing or message display.

use serde::{Deserialize, Serialize};

use crate::context::BattleContext;
use crate::stats::StatValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiTier {
    First,
    Second,
    Third,
    Fourth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyMove {
    SelfHeal,
    RestoreShield,
    ArmorPierce,
    Pounce,
}

impl EnemyMove {
    pub fn message(self) -> &'static str {
        match self {
            EnemyMove::SelfHeal => "The demon attempts to heal himself!",
            EnemyMove::RestoreShield => "The demon attempts to restore his shield!",
            EnemyMove::ArmorPierce => "The demon performs\nan armor-piercing attack!",
            EnemyMove::Pounce => "The demon pounces at the player.",
        }
    }
}

/// Amounts applied by a move: the headline stat, then the side cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strike {
    pub primary: StatValue,
    pub secondary: StatValue,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    /// Fraction of the relevant maximum the rule compares against.
    pub ratio: f64,
    pub strike: Strike,
}

/// Priority order: self-heal, restore shield, armor pierce, pounce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AiRules {
    pub self_heal: Rule,
    pub restore_shield: Option<Rule>,
    pub armor_pierce: Option<Rule>,
    pub pounce: Strike,
}

const fn rule(ratio: f64, primary: StatValue, secondary: StatValue) -> Rule {
    Rule { ratio, strike: Strike { primary, secondary } }
}

impl AiTier {
    pub const ALL: [AiTier; 4] = [AiTier::First, AiTier::Second, AiTier::Third, AiTier::Fourth];

    pub fn rules(self) -> AiRules {
        match self {
            AiTier::First => AiRules {
                self_heal: rule(0.2, 10.0, 5.0),
                restore_shield: None,
                armor_pierce: None,
                pounce: Strike { primary: 30.0, secondary: 3.0 },
            },
            AiTier::Second => AiRules {
                self_heal: rule(0.3, 12.0, 4.0),
                restore_shield: None,
                armor_pierce: Some(rule(0.8, 20.0, 5.0)),
                pounce: Strike { primary: 35.0, secondary: 4.0 },
            },
            AiTier::Third => AiRules {
                self_heal: rule(0.3, 14.0, 3.0),
                restore_shield: Some(rule(0.2, 10.0, 5.0)),
                armor_pierce: Some(rule(0.7, 25.0, 7.0)),
                pounce: Strike { primary: 40.0, secondary: 5.0 },
            },
            AiTier::Fourth => AiRules {
                self_heal: rule(0.3, 18.0, 4.0),
                restore_shield: Some(rule(0.3, 20.0, 5.0)),
                armor_pierce: Some(rule(0.6, 30.0, 15.0)),
                pounce: Strike { primary: 50.0, secondary: 7.0 },
            },
        }
    }

    pub fn decide(self, ctx: &BattleContext) -> EnemyMove {
        self.rules().decide(ctx)
    }

    /// Decide and apply this turn's move.
    pub fn act(self, ctx: &mut BattleContext) -> EnemyMove {
        let rules = self.rules();
        let chosen = rules.decide(ctx);
        rules.apply(chosen, ctx);
        chosen
    }
}

fn at_most(current: StatValue, max: StatValue, ratio: f64) -> bool {
    f64::from(current) <= f64::from(max) * ratio
}

fn at_least(current: StatValue, max: StatValue, ratio: f64) -> bool {
    f64::from(current) >= f64::from(max) * ratio
}

impl AiRules {
    pub fn decide(&self, ctx: &BattleContext) -> EnemyMove {
        let enemy = &ctx.enemy().stats;
        let player = &ctx.player().stats;

        if at_most(enemy.health(), enemy.max_health(), self.self_heal.ratio) {
            return EnemyMove::SelfHeal;
        }
        if let Some(rule) = self.restore_shield
            && at_most(enemy.shield(), enemy.max_shield(), rule.ratio)
        {
            return EnemyMove::RestoreShield;
        }
        if let Some(rule) = self.armor_pierce
            && at_least(player.shield(), player.max_shield(), rule.ratio)
        {
            return EnemyMove::ArmorPierce;
        }
        EnemyMove::Pounce
    }

    fn strike(&self, chosen: EnemyMove) -> Strike {
        let from = |rule: Option<Rule>| match rule {
            Some(rule) => rule.strike,
            None => unreachable!("{chosen:?} is not part of this rule list"),
        };
        match chosen {
            EnemyMove::SelfHeal => self.self_heal.strike,
            EnemyMove::RestoreShield => from(self.restore_shield),
            EnemyMove::ArmorPierce => from(self.armor_pierce),
            EnemyMove::Pounce => self.pounce,
        }
    }

    /// `chosen` must come from `decide` on the same rules.
    pub(crate) fn apply(&self, chosen: EnemyMove, ctx: &mut BattleContext) {
        let Strike { primary, secondary } = self.strike(chosen);
        match chosen {
            EnemyMove::SelfHeal => {
                ctx.heal_enemy_by(primary);
                ctx.damage_enemy_shield_by(secondary);
            }
            EnemyMove::RestoreShield => {
                ctx.heal_enemy_shield_by(primary);
                ctx.damage_enemy_by(secondary);
            }
            EnemyMove::ArmorPierce => {
                ctx.damage_player_shield_by(primary);
                ctx.damage_player_by(secondary);
            }
            EnemyMove::Pounce => {
                ctx.damage_player_by(primary);
                ctx.damage_player_shield_by(secondary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::catalog::RitualPools;
    use crate::context::{EnemyProfile, Participant};
    use crate::event::{BattleEventKind, Side};
    use crate::stats::{StatKind, Stats};

    fn ctx(tier: AiTier) -> BattleContext {
        BattleContext::new(
            Participant::new(Stats::full(100.0, 50.0, 100.0, 100.0)),
            Participant::new(Stats::full(100.0, 60.0, 400.0, 40.0)),
            EnemyProfile { name: "Demon".into(), portrait: "d".into(), tier },
            Rc::new(RitualPools::standard()),
        )
    }

    fn set(ctx: &mut BattleContext, side: Side, kind: StatKind, value: StatValue) {
        match side {
            Side::Player => ctx.player_mut().stats.set(kind, value),
            Side::Enemy => ctx.enemy_mut().stats.set(kind, value),
        }
    }

    #[test]
    fn full_health_enemies_pierce_a_full_shield_when_they_can() {
        assert_eq!(AiTier::First.decide(&ctx(AiTier::First)), EnemyMove::Pounce);
        for tier in [AiTier::Second, AiTier::Third, AiTier::Fourth] {
            assert_eq!(tier.decide(&ctx(tier)), EnemyMove::ArmorPierce, "{tier:?}");
        }
    }

    #[test]
    fn self_heal_thresholds_are_inclusive() {
        let mut first = ctx(AiTier::First);
        set(&mut first, Side::Enemy, StatKind::Health, 20.0);
        assert_eq!(AiTier::First.decide(&first), EnemyMove::SelfHeal);
        set(&mut first, Side::Enemy, StatKind::Health, 21.0);
        assert_eq!(AiTier::First.decide(&first), EnemyMove::Pounce);

        let mut second = ctx(AiTier::Second);
        set(&mut second, Side::Enemy, StatKind::Health, 30.0);
        assert_eq!(AiTier::Second.decide(&second), EnemyMove::SelfHeal);
    }

    #[test]
    fn low_health_beats_every_attack_rule() {
        for tier in [AiTier::Second, AiTier::Third, AiTier::Fourth] {
            let mut ctx = ctx(tier);
            set(&mut ctx, Side::Enemy, StatKind::Health, 25.0);
            set(&mut ctx, Side::Enemy, StatKind::Shield, 0.0);
            assert_eq!(tier.decide(&ctx), EnemyMove::SelfHeal, "{tier:?}");
        }
    }

    #[test]
    fn shield_restore_precedes_pierce() {
        let mut third = ctx(AiTier::Third);
        set(&mut third, Side::Enemy, StatKind::Shield, 12.0);
        assert_eq!(AiTier::Third.decide(&third), EnemyMove::RestoreShield);
        set(&mut third, Side::Enemy, StatKind::Shield, 13.0);
        assert_eq!(AiTier::Third.decide(&third), EnemyMove::ArmorPierce);

        let mut fourth = ctx(AiTier::Fourth);
        set(&mut fourth, Side::Enemy, StatKind::Shield, 17.0);
        assert_eq!(AiTier::Fourth.decide(&fourth), EnemyMove::RestoreShield);
    }

    #[test]
    fn pierce_thresholds_per_tier() {
        let cases = [
            (AiTier::Second, 40.0, 39.0),
            (AiTier::Third, 35.0, 34.0),
            (AiTier::Fourth, 30.0, 29.0),
        ];
        for (tier, pierce_at, pounce_at) in cases {
            let mut ctx = ctx(tier);
            set(&mut ctx, Side::Player, StatKind::Shield, pierce_at);
            assert_eq!(tier.decide(&ctx), EnemyMove::ArmorPierce, "{tier:?}");
            set(&mut ctx, Side::Player, StatKind::Shield, pounce_at);
            assert_eq!(tier.decide(&ctx), EnemyMove::Pounce, "{tier:?}");
        }
    }

    #[test]
    fn act_applies_the_chosen_strike() {
        let mut ctx = ctx(AiTier::Fourth);
        set(&mut ctx, Side::Player, StatKind::Shield, 0.0);
        assert_eq!(AiTier::Fourth.act(&mut ctx), EnemyMove::Pounce);
        assert_eq!(ctx.player().stats.health(), 50.0);
        assert_eq!(ctx.player().stats.shield(), -7.0);
        let kinds: Vec<_> = ctx.drain_events().into_iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![BattleEventKind::Damaged(50.0), BattleEventKind::ShieldDamaged(7.0)]
        );
    }

    #[test]
    fn every_decided_move_applies_for_every_tier() {
        for tier in AiTier::ALL {
            for enemy_health in [5.0, 30.0, 100.0] {
                for enemy_shield in [0.0, 15.0, 60.0] {
                    for player_shield in [0.0, 25.0, 50.0] {
                        let mut ctx = ctx(tier);
                        set(&mut ctx, Side::Enemy, StatKind::Health, enemy_health);
                        set(&mut ctx, Side::Enemy, StatKind::Shield, enemy_shield);
                        set(&mut ctx, Side::Player, StatKind::Shield, player_shield);
                        let chosen = tier.act(&mut ctx);
                        assert_eq!(ctx.drain_events().len(), 2, "{tier:?} {chosen:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn self_heal_costs_shield() {
        let mut ctx = ctx(AiTier::First);
        set(&mut ctx, Side::Enemy, StatKind::Health, 10.0);
        assert_eq!(AiTier::First.act(&mut ctx), EnemyMove::SelfHeal);
        assert_eq!(ctx.enemy().stats.health(), 20.0);
        assert_eq!(ctx.enemy().stats.shield(), 55.0);
    }
}
