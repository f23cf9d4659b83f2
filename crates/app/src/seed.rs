use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Env(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Env(seed) | Self::Generated(seed) => seed,
        }
    }
}

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let entropy = (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ (pid << 32);
    mix_seed(entropy)
}

/// An unset or blank variable falls back to `generated_seed`.
pub fn resolve_seed(env_value: Option<&str>, generated_seed: u64) -> Result<SeedChoice, String> {
    match env_value.map(str::trim) {
        None | Some("") => Ok(SeedChoice::Generated(generated_seed)),
        Some(raw) => raw
            .parse::<u64>()
            .map(SeedChoice::Env)
            .map_err(|_| format!("seed value '{raw}' must be a number")),
    }
}

/// Successive runs in one session get distinct but reproducible seeds.
pub fn run_seed(base: u64, run_index: u64) -> u64 {
    if run_index == 0 { base } else { mix_seed(base ^ run_index) }
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_generated_seed_when_unset_or_blank() {
        assert_eq!(resolve_seed(None, 9_876_543), Ok(SeedChoice::Generated(9_876_543)));
        assert_eq!(resolve_seed(Some("  "), 5), Ok(SeedChoice::Generated(5)));
    }

    #[test]
    fn parses_env_seed() {
        let choice = resolve_seed(Some("4242"), 1).expect("valid seed should parse");
        assert_eq!(choice, SeedChoice::Env(4_242));
        assert_eq!(choice.value(), 4_242);
    }

    #[test]
    fn errors_when_seed_is_not_a_number() {
        let err = resolve_seed(Some("abc"), 1).expect_err("non-numeric seed should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn first_run_keeps_the_chosen_seed() {
        assert_eq!(run_seed(77, 0), 77);
        assert_ne!(run_seed(77, 1), 77);
        assert_eq!(run_seed(77, 1), run_seed(77, 1));
        assert_ne!(run_seed(77, 1), run_seed(77, 2));
    }
}
