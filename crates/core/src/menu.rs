//! Bottom-bar ritual menu: pages, button hit-testing, and the press latch.
//! This module exists to turn raw pointer input into at most one menu event per press.
//! It does not own mana checks, ritual execution, or message box display.

use crate::canvas::{Canvas, TextStyle, Tint};
use crate::catalog::{PoolKind, RitualPools};
use crate::geometry::{FrameInput, Rect, SCREEN_HEIGHT, Vec2};
use crate::output::{FrameOutput, SoundCue};

/// Height of the bottom bar the menu and player stats share.
pub const MENU_BAR_HEIGHT: f32 = 200.0;

const BUTTON_WIDTH: f32 = 280.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_LEFT: f32 = 400.0;
const BUTTON_COLUMN_STEP: f32 = 300.0;
const BUTTON_ROW_STEP: f32 = 60.0;
const BUTTON_ROWS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuPage {
    Main,
    Offense,
    Utility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Open(MenuPage),
    InspectEnemy,
    Cast(PoolKind, usize),
}

/// What the screen has to act on after a menu update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    InspectEnemy,
    Cast(PoolKind, usize),
    Describe(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    /// Empty when the entry has nothing to describe.
    pub description: String,
    pub action: MenuAction,
}

impl MenuEntry {
    fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self { label: label.into(), description: String::new(), action }
    }
}

#[derive(Clone, Debug)]
pub struct BattleMenu {
    page: MenuPage,
    main: Vec<MenuEntry>,
    offense: Vec<MenuEntry>,
    utility: Vec<MenuEntry>,
    hovered: Option<usize>,
    was_pressed: bool,
}

fn ritual_entries(pools: &RitualPools, kind: PoolKind) -> Vec<MenuEntry> {
    pools
        .pool(kind)
        .iter()
        .enumerate()
        .map(|(index, ritual)| MenuEntry {
            label: ritual.label.to_string(),
            description: ritual.description(),
            action: MenuAction::Cast(kind, index),
        })
        .collect()
}

/// Button rectangle for the `index`th entry, filling columns top to bottom.
pub fn button_rect(index: usize) -> Rect {
    let column = index / BUTTON_ROWS;
    let row = index % BUTTON_ROWS;
    Rect {
        x: BUTTON_LEFT + column as f32 * BUTTON_COLUMN_STEP,
        y: SCREEN_HEIGHT - MENU_BAR_HEIGHT + 20.0 + row as f32 * BUTTON_ROW_STEP,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    }
}

impl BattleMenu {
    pub fn new(pools: &RitualPools) -> Self {
        let mut main = vec![
            MenuEntry::new("Attack rituals", MenuAction::Open(MenuPage::Offense)),
            MenuEntry::new("Utility rituals", MenuAction::Open(MenuPage::Utility)),
            MenuEntry::new("Inspect enemy", MenuAction::InspectEnemy),
        ];
        main.extend(ritual_entries(pools, PoolKind::Mana));

        let back = MenuEntry::new("Go back", MenuAction::Open(MenuPage::Main));
        let mut offense = ritual_entries(pools, PoolKind::Offense);
        offense.push(back.clone());
        let mut utility = ritual_entries(pools, PoolKind::Utility);
        utility.push(back);

        Self { page: MenuPage::Main, main, offense, utility, hovered: None, was_pressed: false }
    }

    pub fn page(&self) -> MenuPage {
        self.page
    }

    pub fn entries(&self) -> &[MenuEntry] {
        match self.page {
            MenuPage::Main => &self.main,
            MenuPage::Offense => &self.offense,
            MenuPage::Utility => &self.utility,
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Back to the main page; the latch is kept so a held press stays consumed.
    pub fn reset(&mut self) {
        self.page = MenuPage::Main;
        self.hovered = None;
    }

    /// Position the pointer must be at to hover the entry labelled `label` on the current page.
    pub fn entry_center(&self, label: &str) -> Option<Vec2> {
        let index = self.entries().iter().position(|entry| entry.label == label)?;
        Some(button_rect(index).center())
    }

    pub fn update(&mut self, input: &FrameInput, out: &mut FrameOutput) -> Option<MenuEvent> {
        self.hovered = (0..self.entries().len()).find(|&i| button_rect(i).contains(input.pointer));

        let mut event = None;
        if let Some(index) = self.hovered
            && !self.was_pressed
        {
            let entry = &self.entries()[index];
            let (action, description) = (entry.action, entry.description.clone());
            if input.primary {
                out.play(SoundCue::Blip);
                self.was_pressed = true;
                event = self.activate(action);
            } else if input.secondary && !description.is_empty() {
                out.play(SoundCue::Blip);
                self.was_pressed = true;
                event = Some(MenuEvent::Describe(description));
            }
        }

        if !input.any_button() {
            self.was_pressed = false;
        }
        event
    }

    fn activate(&mut self, action: MenuAction) -> Option<MenuEvent> {
        match action {
            MenuAction::Open(page) => {
                log::debug!("menu page {page:?}");
                self.page = page;
                self.hovered = None;
                None
            }
            MenuAction::InspectEnemy => Some(MenuEvent::InspectEnemy),
            MenuAction::Cast(kind, index) => Some(MenuEvent::Cast(kind, index)),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for (index, entry) in self.entries().iter().enumerate() {
            let rect = button_rect(index);
            let tint = if self.hovered == Some(index) { Tint::PanelHovered } else { Tint::Panel };
            canvas.rect(Vec2::new(rect.x, rect.y), rect.width, rect.height, tint);
            canvas.text(rect.center(), &entry.label, TextStyle::Small, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> BattleMenu {
        BattleMenu::new(&RitualPools::standard())
    }

    fn labels(menu: &BattleMenu) -> Vec<&str> {
        menu.entries().iter().map(|entry| entry.label.as_str()).collect()
    }

    fn press(menu: &mut BattleMenu, label: &str) -> Option<MenuEvent> {
        let at = menu.entry_center(label).expect("entry on current page");
        let mut out = FrameOutput::new();
        let event = menu.update(&FrameInput::click(at), &mut out);
        menu.update(&FrameInput::hover(at), &mut out);
        event
    }

    #[test]
    fn pages_list_rituals_and_navigation() {
        let mut menu = menu();
        assert_eq!(
            labels(&menu),
            ["Attack rituals", "Utility rituals", "Inspect enemy", "Restore mana"]
        );

        assert_eq!(press(&mut menu, "Attack rituals"), None);
        assert_eq!(menu.page(), MenuPage::Offense);
        assert_eq!(labels(&menu), ["Fireball", "Rend shield", "Obliterate", "Go back"]);

        press(&mut menu, "Go back");
        press(&mut menu, "Utility rituals");
        assert_eq!(labels(&menu), ["Heal", "Repair shield", "Go back"]);
    }

    #[test]
    fn ritual_entries_cast_from_their_pool() {
        let mut menu = menu();
        press(&mut menu, "Attack rituals");
        assert_eq!(press(&mut menu, "Obliterate"), Some(MenuEvent::Cast(PoolKind::Offense, 2)));
        menu.reset();
        assert_eq!(press(&mut menu, "Restore mana"), Some(MenuEvent::Cast(PoolKind::Mana, 0)));
        assert_eq!(press(&mut menu, "Inspect enemy"), Some(MenuEvent::InspectEnemy));
    }

    #[test]
    fn held_button_activates_once() {
        let mut menu = menu();
        let at = menu.entry_center("Inspect enemy").expect("main page entry");
        let mut out = FrameOutput::new();
        assert_eq!(menu.update(&FrameInput::click(at), &mut out), Some(MenuEvent::InspectEnemy));
        assert_eq!(menu.update(&FrameInput::click(at), &mut out), None);
        menu.update(&FrameInput::hover(at), &mut out);
        assert_eq!(menu.update(&FrameInput::click(at), &mut out), Some(MenuEvent::InspectEnemy));
        assert_eq!(out.cues, vec![SoundCue::Blip, SoundCue::Blip]);
    }

    #[test]
    fn secondary_press_describes_only_entries_with_text() {
        let mut menu = menu();
        let mut out = FrameOutput::new();
        let inspect = menu.entry_center("Inspect enemy").expect("main page entry");
        let secondary = |at| FrameInput { pointer: at, primary: false, secondary: true };
        assert_eq!(menu.update(&secondary(inspect), &mut out), None);
        assert!(out.cues.is_empty());

        let restore = menu.entry_center("Restore mana").expect("main page entry");
        match menu.update(&secondary(restore), &mut out) {
            Some(MenuEvent::Describe(text)) => assert!(text.ends_with("Time: 4\tMana: 0")),
            other => panic!("expected a description, got {other:?}"),
        }
    }

    #[test]
    fn pointer_outside_buttons_hovers_nothing() {
        let mut menu = menu();
        let input = FrameInput::click(Vec2::new(10.0, 10.0));
        assert_eq!(menu.update(&input, &mut FrameOutput::new()), None);
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn buttons_sit_inside_the_bottom_bar() {
        for index in 0..6 {
            let rect = button_rect(index);
            assert!(rect.y >= SCREEN_HEIGHT - MENU_BAR_HEIGHT);
            assert!(rect.y + rect.height <= SCREEN_HEIGHT);
            assert!(rect.x + rect.width <= crate::geometry::SCREEN_WIDTH);
        }
    }
}
