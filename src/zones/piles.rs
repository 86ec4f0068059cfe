//! Draw, hand, discard and exhaust piles for one combat.
//!
//! Piles own their cards outright; moving a card means moving the value.
//! Every card of the combat-start deck is in exactly one pile at all times:
//!
//! `|draw| + |hand| + |discard| + |exhaust| == deck size`
//!
//! ## Drawing
//!
//! The top of the draw pile is the end of its `Vec`. When the draw pile runs
//! out mid-draw, the discard pile is shuffled into it and drawing continues.
//! When both are empty, drawing stops without error.
//!
//! ```
//! use spire_engine::cards::CardCatalog;
//! use spire_engine::core::GameRng;
//! use spire_engine::zones::Piles;
//!
//! let deck = CardCatalog::standard().starter_deck().unwrap();
//! let mut rng = GameRng::new(7);
//!
//! let mut piles = Piles::start_combat(&deck, &mut rng);
//! let report = piles.draw(5, &mut rng);
//!
//! assert_eq!(report.drawn, 5);
//! assert_eq!(piles.hand().len(), 5);
//! assert_eq!(piles.total(), 10);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::CardInstance;
use crate::core::GameRng;

/// Names the four piles, e.g. for event records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PileKind {
    Draw,
    Hand,
    Discard,
    Exhaust,
}

/// Result of a draw request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    /// Cards actually moved into the hand. Less than requested only when
    /// both draw and discard ran dry.
    pub drawn: usize,
    /// How many times the discard pile was shuffled into the draw pile.
    pub reshuffles: usize,
}

/// The four card piles of a combat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    draw: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    discard: Vec<CardInstance>,
    exhaust: Vec<CardInstance>,
}

impl Piles {
    /// Copy a deck template into a shuffled draw pile.
    #[must_use]
    pub fn start_combat(deck: &[CardInstance], rng: &mut GameRng) -> Self {
        let mut piles = Self {
            draw: deck.to_vec(),
            ..Self::default()
        };
        rng.shuffle(&mut piles.draw);
        piles
    }

    /// Build piles directly. Used to set up specific situations.
    #[must_use]
    pub fn from_parts(
        draw: Vec<CardInstance>,
        hand: Vec<CardInstance>,
        discard: Vec<CardInstance>,
    ) -> Self {
        Self {
            draw,
            hand,
            discard,
            exhaust: Vec::new(),
        }
    }

    /// Shuffle a pile in place (Fisher-Yates, every order equally likely).
    pub fn shuffle(pile: &mut [CardInstance], rng: &mut GameRng) {
        rng.shuffle(pile);
    }

    /// Draw up to `n` cards into the hand, reshuffling discard as needed.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> DrawReport {
        let mut report = DrawReport::default();

        while report.drawn < n {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    trace!(requested = n, drawn = report.drawn, "draw and discard exhausted");
                    break;
                }
                self.draw.append(&mut self.discard);
                rng.shuffle(&mut self.draw);
                report.reshuffles += 1;
                trace!(cards = self.draw.len(), "reshuffled discard into draw pile");
            }

            if let Some(card) = self.draw.pop() {
                self.hand.push(card);
                report.drawn += 1;
            }
        }

        report
    }

    /// Move the whole hand to the discard pile.
    ///
    /// Returns the number of cards discarded.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        self.discard.append(&mut self.hand);
        count
    }

    /// Remove and return the card at `index` in the hand.
    pub fn take_from_hand(&mut self, index: usize) -> Option<CardInstance> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: CardInstance) {
        self.discard.push(card);
    }

    /// Remove a card from play for the rest of the combat.
    pub fn exhaust(&mut self, card: CardInstance) {
        self.exhaust.push(card);
    }

    #[must_use]
    pub fn pile(&self, kind: PileKind) -> &[CardInstance] {
        match kind {
            PileKind::Draw => &self.draw,
            PileKind::Hand => &self.hand,
            PileKind::Discard => &self.discard,
            PileKind::Exhaust => &self.exhaust,
        }
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[CardInstance] {
        &self.draw
    }

    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[CardInstance] {
        &self.discard
    }

    #[must_use]
    pub fn exhaust_pile(&self) -> &[CardInstance] {
        &self.exhaust
    }

    /// Cards across all four piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    /// Merge every pile back into a deck. Order is unspecified.
    #[must_use]
    pub fn into_deck(self) -> Vec<CardInstance> {
        let Self {
            mut draw,
            hand,
            discard,
            exhaust,
        } = self;
        draw.extend(hand);
        draw.extend(discard);
        draw.extend(exhaust);
        draw
    }
}
