use entity::favorite::FavoriteKind;

/// The target of a favorite as a tagged variant.
///
/// Carrying the target id inside the variant means a favorite's kind can
/// never disagree with which foreign key is populated; the repository
/// derives both from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    /// The storage discriminator matching this target.
    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Character(_) => FavoriteKind::Character,
        }
    }
}
