//! The seven-field stat record shared by the player and every enemy.

use serde::{Deserialize, Serialize};

pub type StatValue = f32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health = 0,
    Shield = 1,
    Power = 2,
    MaxHealth = 3,
    MaxShield = 4,
    Mana = 5,
    MaxMana = 6,
}

pub const STAT_COUNT: usize = 7;

impl StatKind {
    pub const ALL: [StatKind; STAT_COUNT] = [
        StatKind::Health,
        StatKind::Shield,
        StatKind::Power,
        StatKind::MaxHealth,
        StatKind::MaxShield,
        StatKind::Mana,
        StatKind::MaxMana,
    ];
}

/// Current values are not clamped at storage time; callers decide what an
/// out-of-range value means (health at or below zero is defeat).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    values: [StatValue; STAT_COUNT],
}

impl Stats {
    /// Full health, shield and mana at the given maxima.
    pub fn full(
        max_health: StatValue,
        max_shield: StatValue,
        max_mana: StatValue,
        power: StatValue,
    ) -> Self {
        let mut stats = Self::default();
        stats.set(StatKind::Health, max_health);
        stats.set(StatKind::MaxHealth, max_health);
        stats.set(StatKind::Shield, max_shield);
        stats.set(StatKind::MaxShield, max_shield);
        stats.set(StatKind::Mana, max_mana);
        stats.set(StatKind::MaxMana, max_mana);
        stats.set(StatKind::Power, power);
        stats
    }

    pub fn get(&self, kind: StatKind) -> StatValue {
        self.values[kind as usize]
    }

    pub fn set(&mut self, kind: StatKind, value: StatValue) {
        self.values[kind as usize] = value;
    }

    pub fn add(&mut self, kind: StatKind, delta: StatValue) {
        self.values[kind as usize] += delta;
    }

    pub fn health(&self) -> StatValue {
        self.get(StatKind::Health)
    }

    pub fn shield(&self) -> StatValue {
        self.get(StatKind::Shield)
    }

    pub fn power(&self) -> StatValue {
        self.get(StatKind::Power)
    }

    pub fn max_health(&self) -> StatValue {
        self.get(StatKind::MaxHealth)
    }

    pub fn max_shield(&self) -> StatValue {
        self.get(StatKind::MaxShield)
    }

    pub fn mana(&self) -> StatValue {
        self.get(StatKind::Mana)
    }

    pub fn max_mana(&self) -> StatValue {
        self.get(StatKind::MaxMana)
    }

    /// Current-to-max ratio for health, shield or mana. A zero maximum reads as empty.
    pub fn ratio(&self, current: StatKind) -> StatValue {
        let max = match current {
            StatKind::Health => self.max_health(),
            StatKind::Shield => self.max_shield(),
            StatKind::Mana => self.max_mana(),
            other => panic!("{other:?} has no maximum"),
        };
        if max <= 0.0 { 0.0 } else { self.get(current) / max }
    }

    /// Clamp `current` into `[0, max]` for display.
    pub fn clamped(&self, current: StatKind) -> StatValue {
        let max = match current {
            StatKind::Health => self.max_health(),
            StatKind::Shield => self.max_shield(),
            StatKind::Mana => self.max_mana(),
            other => return self.get(other),
        };
        self.get(current).clamp(0.0, max.max(0.0))
    }

    pub fn is_defeated(&self) -> bool {
        self.health() <= 0.0
    }

    pub fn restore_mana(&mut self) {
        self.set(StatKind::Mana, self.max_mana());
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, StatValue)> + '_ {
        StatKind::ALL.iter().map(|kind| (*kind, self.get(*kind)))
    }
}
