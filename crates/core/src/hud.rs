//! Stat bars for the player and the current enemy.

use crate::canvas::{Canvas, TextStyle, Tint};
use crate::geometry::{SCREEN_HEIGHT, Vec2};
use crate::menu::MENU_BAR_HEIGHT;
use crate::stats::{StatKind, Stats};

pub const BAR_WIDTH: f32 = 200.0;
pub const BAR_HEIGHT: f32 = 40.0;
const ROW_STEP: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatBar {
    pub value: f32,
    pub max: f32,
    tint: Tint,
}

impl StatBar {
    fn new(tint: Tint) -> Self {
        Self { value: 0.0, max: 0.0, tint }
    }

    /// Filled width; over- and under-flowing values are drawn as-is.
    pub fn width(&self) -> f32 {
        if self.max <= 0.0 { 0.0 } else { self.value / self.max * BAR_WIDTH }
    }

    fn draw(&self, canvas: &mut dyn Canvas, top_left: Vec2) {
        canvas.rect(top_left, BAR_WIDTH, BAR_HEIGHT, Tint::Panel);
        canvas.rect(top_left, self.width().max(0.0), BAR_HEIGHT, self.tint);
        let label = format!("{} / {}", self.value as i32, self.max as i32);
        let center = top_left.offset(BAR_WIDTH / 2.0, BAR_HEIGHT / 2.0);
        canvas.text(center, &label, TextStyle::Small, 0.0);
    }
}

/// Health, mana and shield bars stacked from `origin`. Enemies hide mana.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsPanel {
    origin: Vec2,
    show_mana: bool,
    pub health: StatBar,
    pub shield: StatBar,
    pub mana: StatBar,
}

impl StatsPanel {
    pub fn player() -> Self {
        Self::new(Vec2::new(85.0, SCREEN_HEIGHT - MENU_BAR_HEIGHT + 20.0), true)
    }

    pub fn enemy() -> Self {
        Self::new(Vec2::new(20.0, 20.0), false)
    }

    fn new(origin: Vec2, show_mana: bool) -> Self {
        Self {
            origin,
            show_mana,
            health: StatBar::new(Tint::Health),
            shield: StatBar::new(Tint::Shield),
            mana: StatBar::new(Tint::Mana),
        }
    }

    pub fn refresh(&mut self, stats: &Stats) {
        self.health.value = stats.get(StatKind::Health);
        self.health.max = stats.max_health();
        self.shield.value = stats.get(StatKind::Shield);
        self.shield.max = stats.max_shield();
        self.mana.value = stats.get(StatKind::Mana);
        self.mana.max = stats.max_mana();
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.health.draw(canvas, self.origin);
        if self.show_mana {
            self.mana.draw(canvas, self.origin.offset(0.0, ROW_STEP));
            self.shield.draw(canvas, self.origin.offset(0.0, ROW_STEP * 2.0));
        } else {
            self.shield.draw(canvas, self.origin.offset(0.0, ROW_STEP));
        }
    }
}
