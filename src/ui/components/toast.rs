//! Transient notification banner.
//!
//! A toast slides down over the header, holds for the configured dwell and
//! slides back out. Showing a new message while one is visible replaces it and
//! restarts the sequence; there is no queue.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{TOAST_DWELL_MS, TOAST_TRANSITION_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Holding,
    Leaving,
}

#[derive(Debug, Clone)]
pub struct Toast {
    message: Option<String>,
    shown_at: Option<Instant>,
    dwell: Duration,
    transition: Duration,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(Duration::from_millis(TOAST_DWELL_MS))
    }
}

impl Toast {
    pub fn new(dwell: Duration) -> Self {
        Self {
            message: None,
            shown_at: None,
            dwell,
            transition: Duration::from_millis(TOAST_TRANSITION_MS),
        }
    }

    /// Show `message`, replacing whatever is on screen.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.shown_at = Some(now);
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Total time from `show` until the toast is cleared.
    pub fn total_duration(&self) -> Duration {
        self.transition * 2 + self.dwell
    }

    pub fn phase(&self, now: Instant) -> Option<ToastPhase> {
        let elapsed = self.elapsed(now)?;

        if elapsed < self.transition {
            Some(ToastPhase::Entering)
        } else if elapsed < self.transition + self.dwell {
            Some(ToastPhase::Holding)
        } else if elapsed < self.total_duration() {
            Some(ToastPhase::Leaving)
        } else {
            None
        }
    }

    /// How far the banner is shown, from 0.0 (off screen) to 1.0 (fully in).
    pub fn visibility(&self, now: Instant) -> f32 {
        let Some(elapsed) = self.elapsed(now) else {
            return 0.0;
        };
        let transition = self.transition.as_secs_f32().max(f32::EPSILON);

        let visibility = match self.phase(now) {
            Some(ToastPhase::Entering) => elapsed.as_secs_f32() / transition,
            Some(ToastPhase::Holding) => 1.0,
            Some(ToastPhase::Leaving) => {
                let leaving_for = elapsed.saturating_sub(self.transition + self.dwell);
                1.0 - leaving_for.as_secs_f32() / transition
            }
            None => 0.0,
        };
        visibility.clamp(0.0, 1.0)
    }

    /// Advance the animation, clearing the toast once it has left.
    /// Returns true while a toast is still on screen.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.message.is_some() && self.phase(now).is_none() {
            self.message = None;
            self.shown_at = None;
        }
        self.is_visible()
    }

    fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.message.as_ref()?;
        self.shown_at.map(|shown_at| now.saturating_duration_since(shown_at))
    }

    pub fn render(&self, f: &mut Frame, area: Rect, now: Instant) {
        let Some(message) = self.message.as_deref() else {
            return;
        };
        let visibility = self.visibility(now);
        if visibility <= 0.0 {
            return;
        }

        let height: u16 = 3;
        let width = (message.chars().count() as u16 + 6).max(20).min(area.width);
        // Slide in from above the top edge
        let hidden_rows = ((1.0 - visibility) * f32::from(height)).round() as u16;
        let visible_height = height.saturating_sub(hidden_rows).min(area.height);
        if visible_height == 0 {
            return;
        }

        let toast_area = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y,
            width,
            visible_height,
        );

        let color = if visibility < 0.5 { Color::DarkGray } else { Color::White };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(color).bg(Color::Black)),
            );

        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}
