use std::fmt;

use clap::ValueEnum;

/// A ranking dimension published by the everynoise 1D listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Vector {
    Popularity,
    Modernity,
    Background,
    Tempo,
}

impl Vector {
    /// Keyword used in the listing URL and in emitted symbol names.
    pub fn keyword(self) -> &'static str {
        match self {
            Vector::Popularity => "popularity",
            Vector::Modernity => "modernity",
            Vector::Background => "background",
            Vector::Tempo => "tempo",
        }
    }

    /// Whether the site ranks this vector opposite to the order we emit.
    pub fn is_reversed(self) -> bool {
        matches!(self, Vector::Tempo)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tempo_is_reversed() {
        let reversed: Vec<Vector> = Vector::value_variants()
            .iter()
            .copied()
            .filter(|v| v.is_reversed())
            .collect();
        assert_eq!(reversed, vec![Vector::Tempo]);
    }

    #[test]
    fn keyword_matches_value_name() {
        for vector in Vector::value_variants() {
            let value = vector.to_possible_value().unwrap();
            assert_eq!(value.get_name(), vector.keyword());
            assert_eq!(vector.to_string(), vector.keyword());
        }
    }
}
