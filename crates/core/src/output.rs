//! Per-frame side effects the engine asks its host to perform.
//! Components push into a `FrameOutput`; the host drains it after each update.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Blip,
    Bip,
    ScriptedText,
    Click,
    Failure,
    Success,
    Fireball,
    Obliterate,
    ShieldUp,
    /// The host picks one of its enemy attack variations.
    EnemyAttack,
    MessageBox,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScreenCommand {
    ShowMessage(String),
    /// Shake the whole view by this many frame-time units.
    ShakeScreen(f32),
    /// Pop the battle screen itself.
    CloseBattle,
}

#[derive(Debug, Default)]
pub struct FrameOutput {
    pub cues: Vec<SoundCue>,
    pub commands: Vec<ScreenCommand>,
}

impl FrameOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, cue: SoundCue) {
        log::trace!("cue {cue:?}");
        self.cues.push(cue);
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.play(SoundCue::MessageBox);
        self.commands.push(ScreenCommand::ShowMessage(text.into()));
    }

    pub fn shake_screen(&mut self, amount: f32) {
        self.commands.push(ScreenCommand::ShakeScreen(amount));
    }

    pub fn close_battle(&mut self) {
        self.commands.push(ScreenCommand::CloseBattle);
    }

    pub fn clear(&mut self) {
        self.cues.clear();
        self.commands.clear();
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            ScreenCommand::ShowMessage(text) => Some(text.as_str()),
            ScreenCommand::ShakeScreen(_) | ScreenCommand::CloseBattle => None,
        })
    }
}
