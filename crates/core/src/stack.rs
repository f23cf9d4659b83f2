//! Battle screen plus the message boxes stacked over it.
//! This module exists so only the top screen sees input, and a dismissing click never leaks below.
//! It does not own what the battle screen decides to show.

use crate::canvas::Canvas;
use crate::geometry::FrameInput;
use crate::message_box::MessageBox;
use crate::output::{FrameOutput, ScreenCommand};
use crate::screen::{BattleScreen, Outcome};

pub struct ScreenStack {
    battle: BattleScreen,
    /// Top of the stack is the last element.
    messages: Vec<MessageBox>,
    swallow_held: bool,
    closed: bool,
}

impl ScreenStack {
    pub fn new(battle: BattleScreen) -> Self {
        Self { battle, messages: Vec::new(), swallow_held: false, closed: false }
    }

    pub fn battle(&self) -> &BattleScreen {
        &self.battle
    }

    pub fn battle_mut(&mut self) -> &mut BattleScreen {
        &mut self.battle
    }

    pub fn messages(&self) -> &[MessageBox] {
        &self.messages
    }

    pub fn top_message(&self) -> Option<&str> {
        self.messages.last().map(MessageBox::text)
    }

    /// True once the battle screen popped itself.
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// The battle outcome once nothing is left for the player to read.
    pub fn settled_outcome(&self) -> Option<Outcome> {
        if self.messages.is_empty() { self.battle.outcome() } else { None }
    }

    pub fn update(&mut self, dt: f32, input: &FrameInput, out: &mut FrameOutput) {
        if self.closed {
            return;
        }

        let first_command = out.commands.len();
        if let Some(top) = self.messages.last_mut() {
            if top.update(dt, input) {
                self.messages.pop();
                self.swallow_held = true;
            }
        } else {
            let input = self.filter_input(input);
            self.battle.update(dt, &input, out);
        }
        self.apply_commands(&out.commands[first_command..]);
    }

    fn filter_input(&mut self, input: &FrameInput) -> FrameInput {
        if !self.swallow_held {
            return *input;
        }
        if input.any_button() {
            input.released()
        } else {
            self.swallow_held = false;
            *input
        }
    }

    fn apply_commands(&mut self, commands: &[ScreenCommand]) {
        let mut shown = Vec::new();
        for command in commands {
            match command {
                ScreenCommand::ShowMessage(text) => shown.push(MessageBox::new(text.clone())),
                ScreenCommand::CloseBattle => {
                    log::debug!("battle screen closed");
                    self.closed = true;
                }
                ScreenCommand::ShakeScreen(_) => {}
            }
        }
        // Messages requested in one frame are read in request order.
        self.messages.extend(shown.into_iter().rev());
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if self.closed {
            return;
        }
        self.battle.draw(canvas);
        if let Some(top) = self.messages.last() {
            top.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterConfig;
    use crate::geometry::{Vec2, screen_center};
    use crate::message_box::MESSAGE_BOX_GUARD_FT;
    use crate::screen::BattleState;

    fn stack() -> ScreenStack {
        let encounters = RosterConfig::default().encounters().expect("standard roster is valid");
        ScreenStack::new(BattleScreen::new(encounters, 11))
    }

    fn idle(stack: &mut ScreenStack, frames: usize) {
        let mut out = FrameOutput::new();
        for _ in 0..frames {
            stack.update(1.0, &FrameInput::hover(Vec2::ZERO), &mut out);
        }
    }

    fn dismiss(stack: &mut ScreenStack) {
        idle(stack, MESSAGE_BOX_GUARD_FT as usize + 2);
        let mut out = FrameOutput::new();
        stack.update(1.0, &FrameInput::click(screen_center()), &mut out);
    }

    #[test]
    fn messages_requested_together_open_in_order() {
        let mut stack = stack();
        stack.apply_commands(&[
            ScreenCommand::ShowMessage("first".into()),
            ScreenCommand::ShowMessage("second".into()),
        ]);
        assert_eq!(stack.top_message(), Some("first"));
        dismiss(&mut stack);
        assert_eq!(stack.top_message(), Some("second"));
    }

    #[test]
    fn battle_is_paused_under_a_message() {
        let mut stack = stack();
        stack.apply_commands(&[ScreenCommand::ShowMessage("hold".into())]);
        let frame = stack.battle().frame();
        idle(&mut stack, 10);
        assert_eq!(stack.battle().frame(), frame);
    }

    #[test]
    fn dismissing_click_is_swallowed_until_release() {
        let mut stack = stack();
        idle(&mut stack, 200);
        assert_eq!(stack.battle().state(), BattleState::PlayerMenu);
        assert!(stack.battle().scripted().is_empty());

        let inspect = stack.battle().menu().entry_center("Inspect enemy").expect("main page");
        let mut out = FrameOutput::new();
        stack.update(1.0, &FrameInput::click(inspect), &mut out);
        assert!(stack.top_message().is_some_and(|text| text.starts_with("Inspecting enemy")));

        // Dismiss while hovering the same button and keep holding it.
        idle(&mut stack, MESSAGE_BOX_GUARD_FT as usize + 2);
        stack.update(1.0, &FrameInput::click(inspect), &mut out);
        assert!(stack.messages().is_empty());
        for _ in 0..5 {
            stack.update(1.0, &FrameInput::click(inspect), &mut out);
        }
        assert!(stack.messages().is_empty());
    }

    #[test]
    fn close_command_stops_updates() {
        let mut stack = stack();
        stack.apply_commands(&[ScreenCommand::CloseBattle]);
        assert!(stack.closed());
        let frame = stack.battle().frame();
        idle(&mut stack, 3);
        assert_eq!(stack.battle().frame(), frame);
    }
}
