//! The interactive inspection state machine.
//!
//! The engine owns its own armed/disarmed state and an immutable rule
//! snapshot; the host feeds it pointer and keyboard events and executes the
//! actions it returns. It never blocks and never performs I/O itself.

use speclens_linter::{check_style, Violation};
use speclens_rules::RuleSet;
use speclens_style::{ChildBox, ElementStyle, Rect};
use speclens_overlay::{render_overlay, DrawRect, ScrollOffset};
use std::time::{Duration, Instant};

/// Minimum spacing between two screenshot captures.
pub const SCREENSHOT_COOLDOWN: Duration = Duration::from_secs(2);

/// Whether the engine reacts to page events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Disabled,
    Armed,
}

/// The element currently under the pointer, as captured by the host.
#[derive(Debug, Clone)]
pub struct Hovered {
    pub rect: Rect,
    pub style: ElementStyle,
    pub children: Vec<ChildBox>,
    pub scroll: ScrollOffset,
}

/// Input events from the host page.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    PointerEnter(Hovered),
    PointerLeave,
    Click,
    Escape,
}

/// Instructions for the host to execute. The engine itself never touches
/// the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    ShowOverlay(Vec<DrawRect>),
    ShowTooltip(String),
    HideOverlay,
    Capture,
    Notify(String),
}

/// Monotonic cooldown gate. Re-entry inside the window is rejected with the
/// whole seconds remaining (rounded up), never queued.
#[derive(Debug)]
pub struct Cooldown {
    window: Duration,
    last: Option<Instant>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Record an acquisition, or report the seconds left until the next one.
    pub fn try_acquire(&mut self) -> Result<(), u64> {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&mut self, now: Instant) -> Result<(), u64> {
        if let Some(last) = self.last {
            let elapsed = now.duration_since(last);
            if elapsed < self.window {
                let remaining = (self.window - elapsed).as_secs_f64();
                return Err(remaining.ceil() as u64);
            }
        }
        self.last = Some(now);
        Ok(())
    }
}

/// One inspection session for one page.
#[derive(Debug)]
pub struct InspectionEngine {
    state: EngineState,
    rules: RuleSet,
    cooldown: Cooldown,
}

impl InspectionEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            state: EngineState::Disabled,
            rules,
            cooldown: Cooldown::new(SCREENSHOT_COOLDOWN),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Swap the rule snapshot. Observed by the next event, never mid-check.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    pub fn arm(&mut self) -> Vec<SessionAction> {
        self.state = EngineState::Armed;
        tracing::debug!("inspection armed");
        vec![SessionAction::Notify("Speclens enabled".to_string())]
    }

    pub fn disarm(&mut self) -> Vec<SessionAction> {
        self.state = EngineState::Disabled;
        tracing::debug!("inspection disarmed");
        vec![
            SessionAction::HideOverlay,
            SessionAction::Notify("Speclens disabled".to_string()),
        ]
    }

    /// Feed one host event through the state machine.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionAction> {
        if self.state == EngineState::Disabled {
            return Vec::new();
        }

        match event {
            SessionEvent::PointerEnter(hovered) => {
                let violations = check_style(&hovered.style, &self.rules);
                let boxes = render_overlay(
                    hovered.rect,
                    &hovered.style,
                    &hovered.children,
                    hovered.scroll,
                );
                vec![
                    SessionAction::ShowOverlay(boxes),
                    SessionAction::ShowTooltip(tooltip_text(&hovered.style, &violations)),
                ]
            }
            SessionEvent::PointerLeave => vec![SessionAction::HideOverlay],
            SessionEvent::Click => match self.cooldown.try_acquire() {
                Ok(()) => vec![SessionAction::Capture],
                Err(seconds) => vec![SessionAction::Notify(format!(
                    "Wait {} seconds before the next screenshot",
                    seconds
                ))],
            },
            SessionEvent::Escape => self.disarm(),
        }
    }
}

/// The hover tooltip body: the style summary followed by the violation
/// list, if any.
fn tooltip_text(style: &ElementStyle, violations: &[Violation]) -> String {
    let mut text = style.summary();
    if !violations.is_empty() {
        text.push_str("\n\nIssues:");
        for violation in violations {
            text.push_str("\n\u{2022} ");
            text.push_str(&violation.message);
        }
    }
    text
}

/// Download filename for a captured screenshot. Colons and dots in the
/// timestamp are replaced so the name is valid on every filesystem.
pub fn screenshot_filename(captured_at: chrono::DateTime<chrono::Utc>) -> String {
    let stamp = captured_at
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', '.'], "-");
    format!("speclens-screenshot-{}.png", stamp)
}
