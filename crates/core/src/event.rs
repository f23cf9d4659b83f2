//! Typed stat-change events and their player-facing narration.

use crate::stats::StatValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    fn narration_name(self) -> &'static str {
        match self {
            Side::Player => "The player ",
            Side::Enemy => "The enemy ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BattleEventKind {
    Damaged(StatValue),
    ShieldDamaged(StatValue),
    Healed(StatValue),
    ShieldHealed(StatValue),
    Stunned(u32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BattleEvent {
    pub side: Side,
    pub kind: BattleEventKind,
}

impl BattleEvent {
    pub fn new(side: Side, kind: BattleEventKind) -> Self {
        Self { side, kind }
    }

    /// One line of the turn notification box, without the trailing newline.
    pub fn notification(&self) -> String {
        let name = self.side.narration_name();
        let body = match self.kind {
            BattleEventKind::Damaged(amount) => {
                format!("was damaged for\n {} health points", amount as i32)
            }
            BattleEventKind::ShieldDamaged(amount) => {
                format!("shield was damaged for\n {} shield points", amount as i32)
            }
            BattleEventKind::Healed(amount) => {
                format!("was healed for\n {} health points", amount as i32)
            }
            BattleEventKind::ShieldHealed(amount) => {
                format!("shield was restored for\n {} shield points", amount as i32)
            }
            BattleEventKind::Stunned(turns) => format!("was stunned for\n {turns} turns"),
        };
        format!("{name}{body}.")
    }
}

/// Join accumulated notifications into the single message shown after a turn.
pub fn combine_notifications(lines: &[String]) -> String {
    let mut combined = String::new();
    for line in lines {
        combined.push_str(line);
        combined.push('\n');
    }
    combined
}
