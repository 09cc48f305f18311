//! Visible-window management over the content queue.
//!
//! The controller owns the ordered stack of mounted cards as the single
//! source of truth; the visual layer is a projection of it. New cards are
//! always inserted beneath the existing stack so the user's current focus is
//! never replaced mid-interaction — only a commit advances what is on top.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use super::card::Card;
use crate::content::{ContentQueue, Subject};
use crate::gesture::{GestureRelease, SwipeDirection, EXIT_ANIM};
use crate::VISIBLE;

/// Batch size for background queue refills.
pub const REFILL_BATCH: usize = 8;

/// Exit descriptor handed to the render layer after a commit: the removed
/// card plus the translation direction and animation length to play.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitTransition {
    pub card: Card,
    pub direction: SwipeDirection,
    pub duration: Duration,
}

#[derive(Debug)]
struct DeckWindow {
    /// Top-first: index equals depth.
    cards: Vec<Card>,
    subject: Subject,
}

/// Cheaply cloneable handle owning the visible card window.
///
/// Replenishment spawns background work, so the controller must live inside
/// a Tokio runtime.
#[derive(Clone)]
pub struct DeckController {
    queue: ContentQueue,
    window: Arc<Mutex<DeckWindow>>,
}

impl DeckController {
    pub fn new(queue: ContentQueue) -> Self {
        Self {
            queue,
            window: Arc::new(Mutex::new(DeckWindow {
                cards: Vec::new(),
                subject: Subject::All,
            })),
        }
    }

    pub fn subject(&self) -> Subject {
        self.window
            .lock()
            .map(|w| w.subject)
            .unwrap_or(Subject::All)
    }

    /// Snapshot of the visible window, topmost first.
    pub fn cards(&self) -> Vec<Card> {
        self.window
            .lock()
            .map(|w| w.cards.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.window.lock().map(|w| w.cards.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn top_card(&self) -> Option<Card> {
        self.window
            .lock()
            .ok()
            .and_then(|w| w.cards.first().cloned())
    }

    pub fn top_card_id(&self) -> Option<Uuid> {
        self.top_card().map(|card| card.id)
    }

    fn restack(cards: &mut [Card]) {
        for (depth, card) in cards.iter_mut().enumerate() {
            card.depth = depth;
            card.interactive = depth == 0;
            if !card.interactive {
                card.drag_offset = None;
            }
        }
    }

    /// Pop items off the queue head until the window is full again, mounting
    /// each new card beneath the current stack.
    fn fill_window(&self) {
        let mut window = match self.window.lock() {
            Ok(window) => window,
            Err(_) => return,
        };
        while window.cards.len() < VISIBLE {
            match self.queue.pop() {
                Some(item) => window.cards.push(Card::new(item)),
                None => break,
            }
        }
        Self::restack(&mut window.cards);
    }

    /// Top up the visible window; if the backlog is running low afterwards,
    /// fire off a background refill chained with another window top-up. The
    /// chained top-up does not re-trigger a fetch, so an exhausted source
    /// set settles instead of cascading.
    pub fn replenish(&self) {
        self.fill_window();
        if self.queue.len() < VISIBLE {
            let deck = self.clone();
            let subject = self.subject();
            tokio::spawn(async move {
                deck.queue.fill_queue(subject, REFILL_BATCH).await;
                deck.fill_window();
            });
        }
    }

    /// Remove the topmost card in `direction`, refill the window, and return
    /// the exit transition for the render layer to animate.
    pub fn commit(&self, direction: SwipeDirection) -> Option<CommitTransition> {
        let card = {
            let mut window = self.window.lock().ok()?;
            if window.cards.is_empty() {
                return None;
            }
            let card = window.cards.remove(0);
            Self::restack(&mut window.cards);
            card
        };
        log::debug!("committed card {} ({:?})", card.id, direction);
        self.replenish();
        Some(CommitTransition {
            card,
            direction,
            duration: EXIT_ANIM,
        })
    }

    /// Apply a gesture outcome to the deck. Commits remove the top card;
    /// cancels only clear the drag offset.
    pub fn apply_release(&self, release: GestureRelease) -> Option<CommitTransition> {
        match release {
            GestureRelease::Commit { direction, .. } => self.commit(direction),
            GestureRelease::Cancelled { .. } => {
                self.set_drag_offset(None);
                None
            }
            GestureRelease::Ignored => None,
        }
    }

    /// Record the in-flight drag translation on the topmost card (`None`
    /// when the drag ends or springs back).
    pub fn set_drag_offset(&self, offset: Option<(f32, f32)>) {
        if let Ok(mut window) = self.window.lock() {
            if let Some(card) = window.cards.first_mut() {
                card.drag_offset = offset;
            }
        }
    }

    /// Report a layout measurement for one card's paragraph.
    pub fn measure_card(&self, card_id: Uuid, content_height: f32, clamped_height: f32) {
        if let Ok(mut window) = self.window.lock() {
            if let Some(card) = window.cards.iter_mut().find(|c| c.id == card_id) {
                card.clamp.measure(content_height, clamped_height);
            }
        }
    }

    /// Toggle a card's text between truncated and expanded.
    pub fn toggle_card_clamp(&self, card_id: Uuid) {
        if let Ok(mut window) = self.window.lock() {
            if let Some(card) = window.cards.iter_mut().find(|c| c.id == card_id) {
                card.clamp.toggle();
            }
        }
    }

    /// Prime the deck at startup using the subject persisted by the last
    /// session.
    pub async fn start(&self) {
        let subject = self.queue.last_subject();
        if let Ok(mut window) = self.window.lock() {
            window.subject = subject;
        }
        self.queue.prime_instant(subject).await;
        self.replenish();
    }

    /// Switch subject: clear the window and backlog, persist the selection,
    /// then re-run the prime/replenish/background-fill sequence.
    pub async fn set_subject(&self, subject: Subject) {
        if let Ok(mut window) = self.window.lock() {
            window.subject = subject;
            window.cards.clear();
        }
        self.queue.clear();
        self.queue.remember_subject(subject);
        self.queue.prime_instant(subject).await;
        self.replenish();
    }

    /// Rebuild the deck for the current subject.
    pub async fn reshuffle(&self) {
        let subject = self.subject();
        if let Ok(mut window) = self.window.lock() {
            window.cards.clear();
        }
        self.queue.clear();
        self.queue.prime_instant(subject).await;
        self.replenish();
    }
}
