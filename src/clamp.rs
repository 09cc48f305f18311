//! Per-card text truncation state.
//!
//! A card's paragraph starts clamped to a fixed number of lines. The layout
//! layer measures whether the full content overflows the clamped height and
//! reports it here; only overflowing cards show the expand affordance.
//! Toggling flips between the clamped preview and a fully expanded,
//! independently scrollable paragraph.

use serde::Serialize;

/// Line limit applied while a card is truncated.
pub const MAX_PREVIEW_LINES: u32 = 8;

/// Slack below which a measured overflow is ignored (sub-pixel rounding).
const OVERFLOW_SLACK: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClampState {
    Truncated,
    Expanded,
}

/// Truncation state machine for one card's paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextClampController {
    state: ClampState,
    overflowing: bool,
    scroll_top: f32,
}

impl TextClampController {
    /// New controller in the truncated state, assumed not overflowing until
    /// the layout layer reports a measurement.
    pub fn new() -> Self {
        Self {
            state: ClampState::Truncated,
            overflowing: false,
            scroll_top: 0.0,
        }
    }

    pub fn state(&self) -> ClampState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == ClampState::Expanded
    }

    /// Record the layout measurement of the clamped paragraph: the full
    /// content height versus the height the clamp leaves visible.
    pub fn measure(&mut self, content_height: f32, clamped_height: f32) {
        self.overflowing = content_height > clamped_height + OVERFLOW_SLACK;
    }

    pub fn overflowing(&self) -> bool {
        self.overflowing
    }

    /// The expand/collapse affordance is only shown when there is hidden text.
    pub fn affordance_visible(&self) -> bool {
        self.overflowing
    }

    pub fn affordance_label(&self) -> &'static str {
        match self.state {
            ClampState::Truncated => "Read more",
            ClampState::Expanded => "Show less",
        }
    }

    /// Line limit the renderer should apply, `None` when expanded.
    pub fn line_limit(&self) -> Option<u32> {
        match self.state {
            ClampState::Truncated => Some(MAX_PREVIEW_LINES),
            ClampState::Expanded => None,
        }
    }

    /// Expanded cards scroll their text region independently.
    pub fn scrollable(&self) -> bool {
        self.is_expanded()
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Scroll position of the expanded region; ignored while truncated.
    pub fn set_scroll_top(&mut self, scroll_top: f32) {
        if self.is_expanded() {
            self.scroll_top = scroll_top.max(0.0);
        }
    }

    /// Flip between truncated and expanded. Collapsing resets the scroll
    /// position to the top.
    pub fn toggle(&mut self) -> ClampState {
        self.state = match self.state {
            ClampState::Truncated => ClampState::Expanded,
            ClampState::Expanded => {
                self.scroll_top = 0.0;
                ClampState::Truncated
            }
        };
        self.state
    }
}

impl Default for TextClampController {
    fn default() -> Self {
        Self::new()
    }
}
