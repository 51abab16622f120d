use load_genres::extract::{parse_countries, parse_rankings};
use load_genres::{Country, Genre, Html};

const POPULARITY: &str = include_str!("fixtures/popularity.html");
const TEMPO: &str = include_str!("fixtures/tempo.html");
const COUNTRIES: &str = include_str!("fixtures/countries.html");

fn genre(name: &str, id: &str, label: Option<&str>, color: Option<u16>) -> Genre {
    Genre {
        name: name.to_string(),
        id: id.to_string(),
        label: label.map(str::to_string),
        color,
    }
}

#[test]
fn popularity_page_keeps_site_order_and_colors() {
    let genres = parse_rankings(&Html::parse_document(POPULARITY)).unwrap();

    assert_eq!(
        genres,
        vec![
            genre("trance", "Trance0000000000000003", None, Some(0xFFFF)),
            genre("dream pop", "DreamPop00000000000002", None, Some(0xF800)),
            genre("acid rock", "AcidRock00000000000001", None, Some(0x001F)),
        ]
    );
}

#[test]
fn tempo_page_has_labels_but_no_colors() {
    let genres = parse_rankings(&Html::parse_document(TEMPO)).unwrap();

    let labels: Vec<_> = genres.iter().map(|g| g.label.as_deref()).collect();
    assert_eq!(labels, [Some("80"), Some("110"), Some("138")]);
    assert!(genres.iter().all(|g| g.color.is_none()));
}

#[test]
fn countries_sort_by_transliterated_name() {
    let countries = parse_countries(&Html::parse_document(COUNTRIES)).unwrap();

    assert_eq!(
        countries,
        vec![
            Country::new("Argentina", "ArgentinaPlaylist"),
            Country::new("Éire", "EirePlaylist"),
            Country::new("Zambia", "ZambiaPlaylist"),
        ]
    );
}

#[test]
fn country_page_has_no_ranking_rows() {
    // The country page's table rows carry no note cells.
    assert!(parse_rankings(&Html::parse_document(COUNTRIES)).is_err());
}
