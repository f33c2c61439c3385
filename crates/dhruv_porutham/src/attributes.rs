//! Per-nakshatra classifications used by the porutham rules.

/// Temperament category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Gana {
    Deva,
    Manusha,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manusha => "Manusha",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

/// Animal archetype. Only identity between two yonis is scored; enmity
/// between animals is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Yoni {
    Horse,
    Elephant,
    Goat,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

impl Yoni {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Goat => "Goat",
            Self::Serpent => "Serpent",
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rat => "Rat",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Tiger => "Tiger",
            Self::Deer => "Deer",
            Self::Monkey => "Monkey",
            Self::Mongoose => "Mongoose",
            Self::Lion => "Lion",
        }
    }
}

/// Body region, from head to foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rajju {
    Siro,
    Kanta,
    Udar,
    Kati,
    Pada,
}

impl Rajju {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Siro => "Siro",
            Self::Kanta => "Kanta",
            Self::Udar => "Udar",
            Self::Kati => "Kati",
            Self::Pada => "Pada",
        }
    }
}
