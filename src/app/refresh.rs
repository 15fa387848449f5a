//! Pull-to-refresh gesture tracking for the refreshable lists

use crate::theme;
use eframe::egui;

/// Where a pull currently stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullPhase {
    Idle,
    /// Pulling, with progress toward the threshold in 0..1
    Pulling(f32),
    /// Past the threshold; releasing now fires a refresh
    Armed,
}

#[derive(Debug, Clone)]
pub struct PullToRefresh {
    threshold: f32,
    pulled: f32,
}

impl PullToRefresh {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(1.0),
            pulled: 0.0,
        }
    }

    pub fn phase(&self) -> PullPhase {
        if self.pulled <= 0.0 {
            PullPhase::Idle
        } else if self.pulled >= self.threshold {
            PullPhase::Armed
        } else {
            PullPhase::Pulling(self.pulled / self.threshold)
        }
    }

    pub fn reset(&mut self) {
        self.pulled = 0.0;
    }

    /// Feed one frame of input. `delta_y` is positive when the content is
    /// being pulled down. Returns true exactly once per armed release.
    pub fn update(&mut self, at_top: bool, delta_y: f32, released: bool) -> bool {
        if !at_top {
            self.reset();
            return false;
        }

        self.pulled = (self.pulled + delta_y).max(0.0);

        if released {
            let fire = self.phase() == PullPhase::Armed;
            self.reset();
            return fire;
        }
        false
    }

    /// Read pointer and wheel input over `rect` and advance the gesture.
    pub fn track(&mut self, ui: &egui::Ui, rect: egui::Rect, scroll_offset_y: f32) -> bool {
        let (hovered, pointer_down, drag_delta, wheel_delta) = ui.input(|i| {
            let hovered = i
                .pointer
                .hover_pos()
                .is_some_and(|pos| rect.contains(pos));
            (
                hovered,
                i.pointer.primary_down(),
                i.pointer.delta().y,
                i.smooth_scroll_delta.y,
            )
        });

        let delta = if !hovered {
            0.0
        } else if pointer_down {
            drag_delta
        } else {
            wheel_delta
        };
        let released = !pointer_down && delta == 0.0;

        let fired = self.update(scroll_offset_y <= 0.0, delta, released);
        if self.phase() != PullPhase::Idle {
            ui.ctx().request_repaint();
        }
        fired
    }

    /// Draw the hint strip at the top of `rect` while a pull is in progress.
    pub fn paint_hint(&self, ui: &egui::Ui, rect: egui::Rect) {
        let (icon, label, progress) = match self.phase() {
            PullPhase::Idle => return,
            PullPhase::Pulling(p) => (egui_phosphor::regular::ARROW_DOWN, "Pull to refresh", p),
            PullPhase::Armed => (
                egui_phosphor::regular::ARROW_CLOCKWISE,
                "Release to refresh",
                1.0,
            ),
        };

        let hint_rect = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width(), theme::PULL_HINT_HEIGHT),
        );
        let painter = ui.painter_at(rect);
        painter.rect_filled(hint_rect, 0.0, theme::BG_ELEVATED);
        painter.text(
            hint_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}  {}", icon, label),
            egui::FontId::proportional(theme::FONT_LABEL),
            theme::TEXT_MUTED.gamma_multiply(0.4 + 0.6 * progress),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_pull_does_not_fire() {
        let mut pull = PullToRefresh::new(64.0);
        assert!(!pull.update(true, 30.0, false));
        assert!(matches!(pull.phase(), PullPhase::Pulling(_)));
        assert!(!pull.update(true, 0.0, true));
        assert_eq!(pull.phase(), PullPhase::Idle);
    }

    #[test]
    fn armed_pull_fires_once_on_release() {
        let mut pull = PullToRefresh::new(64.0);
        pull.update(true, 40.0, false);
        pull.update(true, 30.0, false);
        assert_eq!(pull.phase(), PullPhase::Armed);

        assert!(pull.update(true, 0.0, true));
        assert!(!pull.update(true, 0.0, true));
    }

    #[test]
    fn pulling_back_up_disarms() {
        let mut pull = PullToRefresh::new(64.0);
        pull.update(true, 80.0, false);
        pull.update(true, -50.0, false);
        assert!(!pull.update(true, 0.0, true));
    }

    #[test]
    fn leaving_top_cancels() {
        let mut pull = PullToRefresh::new(64.0);
        pull.update(true, 100.0, false);
        assert!(!pull.update(false, 0.0, false));
        assert_eq!(pull.phase(), PullPhase::Idle);
        assert!(!pull.update(true, 0.0, true));
    }

    #[test]
    fn pull_never_goes_negative() {
        let mut pull = PullToRefresh::new(64.0);
        pull.update(true, -40.0, false);
        assert_eq!(pull.phase(), PullPhase::Idle);
        pull.update(true, 70.0, false);
        assert_eq!(pull.phase(), PullPhase::Armed);
    }
}
