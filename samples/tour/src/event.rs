//! A betting event, its game and the game's outcome.
//!
//! [`Event`] implements [`Unapply`] so a single pattern can reach through all
//! three levels at once. An event whose game or outcome is missing has no
//! projection and falls through to the next arm.

use functour::matching::patterns::{any, unapply};
use functour::matching::{Match, Unapply};

/// The result of a game and the odd that was offered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Human readable result, for example `"home win"`.
    pub detail: String,
    /// Decimal odd.
    pub odd: f64,
}

/// A game, possibly still without an outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Name of the game.
    pub name: String,
    /// Present once the game is decided.
    pub outcome: Option<Outcome>,
}

/// A named event, possibly not yet attached to a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Name of the event.
    pub name: String,
    /// The game played at the event.
    pub game: Option<Game>,
}

impl Event {
    /// A fully populated event.
    pub fn decided(
        name: impl Into<String>,
        game: impl Into<String>,
        detail: impl Into<String>,
        odd: f64,
    ) -> Self {
        Self {
            name: name.into(),
            game: Some(Game {
                name: game.into(),
                outcome: Some(Outcome {
                    detail: detail.into(),
                    odd,
                }),
            }),
        }
    }

    /// An event that has no game yet.
    pub fn announced(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            game: None,
        }
    }
}

impl Unapply for Event {
    /// `(event name, game name, outcome detail, outcome odd)`
    type Parts = (String, String, String, f64);

    fn unapply(&self) -> Option<Self::Parts> {
        let game = self.game.as_ref()?;
        let outcome = game.outcome.as_ref()?;
        Some((
            self.name.clone(),
            game.name.clone(),
            outcome.detail.clone(),
            outcome.odd,
        ))
    }
}

/// Describes an event, or reports `"not found"` when it lacks the full shape.
pub fn describe(event: &Event) -> String {
    Match::of(event)
        .case(unapply(any()), |(name, game, detail, odd)| {
            format!("{name}: {game} ended with {detail} at {odd}")
        })
        .otherwise(|_| "not found".to_string())
}
