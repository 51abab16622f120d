//! Orderings over one canonical, alphabetical genre array.
//!
//! Every ordering is stored as a list of indexes into the alphabetical array
//! so genre names, playlist ids and colors are emitted exactly once.

use std::collections::HashMap;

use log::debug;

use crate::error::Error;
use crate::genre::Genre;
use crate::vector::Vector;
use crate::Result;

/// Genre lists keyed by vector, in the order the vectors were requested.
///
/// The first vector is the reference set every other ordering must match.
#[derive(Debug, Clone)]
pub struct Rankings {
    entries: Vec<(Vector, Vec<Genre>)>,
}

impl Rankings {
    /// Start with every vector present and mapped to an empty list.
    pub fn new(vectors: &[Vector]) -> Self {
        Self {
            entries: vectors.iter().map(|&v| (v, Vec::new())).collect(),
        }
    }

    /// Store a vector's genres in site rank order.
    ///
    /// Reversed vectors are flipped here so every later step sees the
    /// emitted order. Only vectors passed to `new` can be filled.
    pub fn insert(&mut self, vector: Vector, mut genres: Vec<Genre>) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|(v, _)| *v == vector)
            .map(|(_, slot)| slot)
            .ok_or(Error::UnregisteredVector(vector))?;
        if vector.is_reversed() {
            genres.reverse();
        }
        *slot = genres;
        Ok(())
    }

    pub fn get(&self, vector: Vector) -> Option<&[Genre]> {
        self.entries
            .iter()
            .find(|(v, _)| *v == vector)
            .map(|(_, genres)| genres.as_slice())
    }

    /// The reference vector and its genres.
    pub fn reference(&self) -> Option<(Vector, &[Genre])> {
        self.entries.first().map(|(v, g)| (*v, g.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vector, &[Genre])> {
        self.entries.iter().map(|(v, g)| (*v, g.as_slice()))
    }
}

/// One vector expressed against the canonical array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorOrdering {
    pub vector: Vector,
    pub indexes: Vec<u16>,
    /// Present when the first ranked genre carries a label.
    pub labels: Option<Vec<String>>,
}

/// Every ordering needed to render the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collation {
    /// Canonical array: the reference genres sorted by name.
    pub alphabetical: Vec<Genre>,
    pub suffix: Vec<u16>,
    pub orderings: Vec<VectorOrdering>,
}

impl Collation {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.alphabetical.iter().map(|g| g.name.as_str())
    }

    /// Resolve an index list back to genre names.
    pub fn resolve<'a>(&'a self, indexes: &'a [u16]) -> impl Iterator<Item = &'a str> + 'a {
        indexes
            .iter()
            .map(move |&i| self.alphabetical[usize::from(i)].name.as_str())
    }
}

/// Build the canonical array and every ordering from the collected rankings.
pub fn collate(rankings: &Rankings) -> Result<Collation> {
    let (reference_vector, reference) = match rankings.reference() {
        Some(entry) => entry,
        None => return Err(Error::Config("no ranking vectors requested".to_string())),
    };
    if reference.is_empty() {
        return Err(Error::EmptyRankings(reference_vector));
    }
    if reference.len() > usize::from(u16::MAX) {
        return Err(Error::TooManyGenres(reference.len()));
    }

    let mut alphabetical = reference.to_vec();
    alphabetical.sort_by(|a, b| a.name.cmp(&b.name));

    let mut index: HashMap<&str, u16> = HashMap::with_capacity(alphabetical.len());
    for (i, genre) in alphabetical.iter().enumerate() {
        // Bounded by the length check above.
        let i = i as u16;
        if index.insert(genre.name.as_str(), i).is_some() {
            return Err(Error::DuplicateGenre(genre.name.clone()));
        }
    }

    let mut by_suffix: Vec<&Genre> = reference.iter().collect();
    by_suffix.sort_by_cached_key(|g| g.reversed_name());
    let suffix = by_suffix.iter().map(|g| index[g.name.as_str()]).collect();

    let orderings = rankings
        .iter()
        .map(|(vector, genres)| ordering(vector, genres, &index))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Collated {} genres across {} vectors",
        alphabetical.len(),
        orderings.len()
    );

    Ok(Collation {
        alphabetical,
        suffix,
        orderings,
    })
}

fn ordering(
    vector: Vector,
    genres: &[Genre],
    index: &HashMap<&str, u16>,
) -> Result<VectorOrdering> {
    if genres.len() != index.len() {
        return Err(Error::RankingSizeMismatch {
            vector,
            expected: index.len(),
            found: genres.len(),
        });
    }

    let indexes = genres
        .iter()
        .map(|g| {
            index
                .get(g.name.as_str())
                .copied()
                .ok_or_else(|| Error::UnknownGenre {
                    genre: g.name.clone(),
                    vector,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let labels = match genres.first() {
        Some(Genre { label: Some(_), .. }) => Some(
            genres
                .iter()
                .map(|g| g.label.clone().unwrap_or_default())
                .collect(),
        ),
        _ => None,
    };

    Ok(VectorOrdering {
        vector,
        indexes,
        labels,
    })
}
