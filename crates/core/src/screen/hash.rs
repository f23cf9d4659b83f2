//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from battle flow code.
//! It does not own session replay or any persisted format.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::BattleScreen;

impl BattleScreen {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.frame);
        hasher.write_u8(self.state as u8);
        hasher.write_u64(self.index as u64);
        let ctx = self.current();
        for participant in [ctx.player(), ctx.enemy()] {
            for (_, value) in participant.stats.iter() {
                hasher.write_u32(value.to_bits());
            }
            hasher.write_u32(participant.stunned_turns);
        }
        hasher.finish()
    }
}
