//! HTML extraction for everynoise listing pages.
//!
//! Pure functions from a parsed document (or a single row) to typed records.
//! Missing structure is reported as an error instead of being skipped, except
//! for the optional label and color fields.

use log::debug;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::country::{self, Country};
use crate::genre::{self, Genre};

pub const RANKING_ROWS: &str = "body > table > tbody > tr";
pub const COUNTRY_LINKS: &str = "td.column .country a";

const NOTE_CELL: &str = "td.note";
const NOTE_LINK: &str = "a.note";
const NOTE_CELL_LINK: &str = "td.note a";

static RANKING_ROWS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(RANKING_ROWS).unwrap());
static COUNTRY_LINKS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(COUNTRY_LINKS).unwrap());
static NOTE_CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(NOTE_CELL).unwrap());
static NOTE_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(NOTE_LINK).unwrap());
static NOTE_CELL_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(NOTE_CELL_LINK).unwrap());

/// A required field of a single row or link could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("no element matches `{0}`")]
    MissingElement(&'static str),

    #[error("`{selector}` has no `{attribute}` attribute")]
    MissingAttribute {
        selector: &'static str,
        attribute: &'static str,
    },

    #[error("no playlist id in `{0}`")]
    MissingPlaylistId(String),
}

/// A document did not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no elements match `{0}`")]
    NoRows(&'static str),

    #[error("row {row}: {source}")]
    Row { row: usize, source: FieldError },

    #[error("country link {index}: {source}")]
    Country { index: usize, source: FieldError },
}

/// Parse every ranking row of an `everynoise1d.cgi` page, in site rank order.
pub fn parse_rankings(document: &Html) -> Result<Vec<Genre>, ExtractionError> {
    let genres = document
        .select(&RANKING_ROWS_SELECTOR)
        .enumerate()
        .map(|(i, row)| {
            extract_genre(row).map_err(|source| ExtractionError::Row { row: i + 1, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if genres.is_empty() {
        return Err(ExtractionError::NoRows(RANKING_ROWS));
    }
    debug!("Parsed {} ranking rows", genres.len());
    Ok(genres)
}

/// Map one ranking row to a genre.
///
/// The name comes from the last note cell, the label from the title of the
/// first one, the playlist id from the `a.note` link and the color from the
/// inline style of the first link inside a note cell.
pub fn extract_genre(row: ElementRef<'_>) -> Result<Genre, FieldError> {
    let cells: Vec<ElementRef<'_>> = row.select(&NOTE_CELL_SELECTOR).collect();
    let (first_cell, last_cell) = match (cells.first(), cells.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(FieldError::MissingElement(NOTE_CELL)),
    };

    let name = last_cell.text().collect::<String>().trim().to_string();

    let href = row
        .select(&NOTE_LINK_SELECTOR)
        .next()
        .ok_or(FieldError::MissingElement(NOTE_LINK))?
        .value()
        .attr("href")
        .ok_or(FieldError::MissingAttribute {
            selector: NOTE_LINK,
            attribute: "href",
        })?;
    let id = genre::playlist_id(href)
        .ok_or_else(|| FieldError::MissingPlaylistId(href.to_string()))?
        .to_string();

    let label = genre::label_from_title(first_cell.value().attr("title").unwrap_or_default());

    let color = row
        .select(&NOTE_CELL_LINK_SELECTOR)
        .next()
        .and_then(|link| link.value().attr("style"))
        .and_then(genre::style_color);

    Ok(Genre {
        name,
        id,
        label,
        color,
    })
}

/// Parse the country list of `countries.html`, sorted by transliterated name.
pub fn parse_countries(document: &Html) -> Result<Vec<Country>, ExtractionError> {
    let countries = document
        .select(&COUNTRY_LINKS_SELECTOR)
        .enumerate()
        .map(|(i, link)| {
            extract_country(link)
                .map_err(|source| ExtractionError::Country { index: i + 1, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if countries.is_empty() {
        return Err(ExtractionError::NoRows(COUNTRY_LINKS));
    }
    debug!("Parsed {} country links", countries.len());
    Ok(country::sort_countries(countries))
}

/// Map one country anchor to its name and playlist id.
pub fn extract_country(link: ElementRef<'_>) -> Result<Country, FieldError> {
    let href = link.value().attr("href").ok_or(FieldError::MissingAttribute {
        selector: COUNTRY_LINKS,
        attribute: "href",
    })?;
    let name = link.text().collect::<String>();
    Ok(Country::new(name, country::playlist_id_from_href(href)))
}
