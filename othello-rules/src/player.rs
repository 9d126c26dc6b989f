//! Player bookkeeping: who sits behind each color.

use crate::piece::Color;
use derive_more::{Display, Error, From, Into};

/// A named participant. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Identifies a registered player. There is one seat per color, so the seat's
/// color is the handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, From, Into)]
pub struct PlayerHandle(Color);

impl PlayerHandle {
    pub fn color(self) -> Color {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    #[display(fmt = "a {} player is already registered", _0)]
    ColorTaken(#[error(not(source))] Color),
    #[display(fmt = "no {} player is registered", _0)]
    MissingPlayer(#[error(not(source))] Color),
}

/// At most one [`Player`] per color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    black: Option<Player>,
    white: Option<Player>,
}

impl PlayerRegistry {
    fn seat(&self, color: Color) -> &Option<Player> {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    fn seat_mut(&mut self, color: Color) -> &mut Option<Player> {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// Register a player for `color`. Each color can be claimed once.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        color: Color,
    ) -> Result<PlayerHandle, RegistryError> {
        let seat = self.seat_mut(color);
        if seat.is_some() {
            return Err(RegistryError::ColorTaken(color));
        }
        *seat = Some(Player::new(name, color));
        Ok(PlayerHandle(color))
    }

    pub fn get(&self, handle: PlayerHandle) -> Option<&Player> {
        self.for_color(handle.color())
    }

    pub fn for_color(&self, color: Color) -> Option<&Player> {
        self.seat(color).as_ref()
    }

    /// Like [`PlayerRegistry::for_color`], but a missing seat is an error.
    pub fn require(&self, color: Color) -> Result<&Player, RegistryError> {
        self.for_color(color)
            .ok_or(RegistryError::MissingPlayer(color))
    }

    /// Registered players, black first.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.black.iter().chain(self.white.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_look_up() {
        let mut registry = PlayerRegistry::default();
        let alice = registry.create("Alice", Color::Black).unwrap();
        let bob = registry.create(String::from("Bob"), Color::White).unwrap();

        assert_eq!(alice.color(), Color::Black);
        assert_eq!(registry.get(alice).map(Player::name), Some("Alice"));
        assert_eq!(registry.get(bob).map(Player::color), Some(Color::White));
        assert_eq!(
            registry.iter().map(Player::name).collect::<Vec<_>>(),
            vec!["Alice", "Bob"]
        );
    }

    #[test]
    fn color_can_only_be_claimed_once() {
        let mut registry = PlayerRegistry::default();
        registry.create("Alice", Color::Black).unwrap();
        assert_eq!(
            registry.create("Carol", Color::Black),
            Err(RegistryError::ColorTaken(Color::Black))
        );
        assert_eq!(registry.for_color(Color::Black).unwrap().name(), "Alice");
    }

    #[test]
    fn missing_player() {
        let registry = PlayerRegistry::default();
        assert_eq!(
            registry.require(Color::White),
            Err(RegistryError::MissingPlayer(Color::White))
        );
        let err = RegistryError::MissingPlayer(Color::White);
        assert_eq!(err.to_string(), "no white player is registered");
        assert!(std::error::Error::source(&err).is_none());
    }
}
