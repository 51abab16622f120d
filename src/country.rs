use std::collections::HashMap;

/// A country with its everynoise "sound of" playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub playlist_id: String,
}

impl Country {
    pub fn new(name: impl Into<String>, playlist_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            playlist_id: playlist_id.into(),
        }
    }

    /// Name folded to ASCII so ordering does not depend on diacritics.
    pub fn sort_key(&self) -> String {
        deunicode::deunicode(&self.name)
    }
}

/// Playlist id from the last non-empty `:` segment of a link.
pub fn playlist_id_from_href(href: &str) -> &str {
    href.rsplit(':').find(|s| !s.is_empty()).unwrap_or_default()
}

/// Sort countries by transliterated name and collapse repeated names.
///
/// A repeated name keeps the position of its first occurrence and the
/// playlist of its last one.
pub fn sort_countries(countries: Vec<Country>) -> Vec<Country> {
    let mut keyed: Vec<(String, Country)> = countries
        .into_iter()
        .map(|c| (c.sort_key(), c))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut sorted: Vec<Country> = Vec::with_capacity(keyed.len());
    for (_, country) in keyed {
        match positions.get(&country.name) {
            Some(&i) => sorted[i].playlist_id = country.playlist_id,
            None => {
                positions.insert(country.name.clone(), sorted.len());
                sorted.push(country);
            }
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn takes_last_href_segment() {
        assert_eq!(
            playlist_id_from_href("spotify:playlist:37i9dQZF1DX0Ew6u9sRtTY"),
            "37i9dQZF1DX0Ew6u9sRtTY"
        );
        assert_eq!(playlist_id_from_href("no-colon"), "no-colon");
        assert_eq!(playlist_id_from_href("trailing:"), "trailing");
        assert_eq!(playlist_id_from_href(""), "");
    }

    #[test]
    fn folds_diacritics_before_sorting() {
        let sorted = sort_countries(vec![
            Country::new("Zambia", "z"),
            Country::new("Österreich", "o"),
            Country::new("Éire", "e"),
            Country::new("Argentina", "a"),
        ]);
        assert_eq!(names(&sorted), vec!["Argentina", "Éire", "Österreich", "Zambia"]);
    }

    #[test]
    fn repeated_names_keep_last_playlist() {
        let sorted = sort_countries(vec![
            Country::new("Chile", "first"),
            Country::new("Brasil", "b"),
            Country::new("Chile", "second"),
        ]);
        assert_eq!(
            sorted,
            vec![Country::new("Brasil", "b"), Country::new("Chile", "second")]
        );
    }
}
