use std::io::{self, Write};

use log::info;
use scraper::Html;

use crate::collate::{self, Rankings};
use crate::config::Config;
use crate::error::Error;
use crate::extract::{self, ExtractionError};
use crate::fetch::{Fetcher, PageSource};
use crate::render;
use crate::Result;

/// Fetch from the configured site and report progress on stdout.
pub async fn run(config: &Config) -> Result<()> {
    let fetcher = Fetcher::new(config.base_url.as_str());
    generate(config, &fetcher, &mut io::stdout()).await
}

/// Fetch every page, collate and write the header, one step after another.
///
/// Each fetch writes a `Fetching ...` prefix to `progress` and completes
/// the line with `done` once the page is parsed.
pub async fn generate<S, W>(config: &Config, source: &S, progress: &mut W) -> Result<()>
where
    S: PageSource + ?Sized,
    W: Write,
{
    config.validate()?;

    let mut rankings = Rankings::new(&config.vectors);
    for &vector in &config.vectors {
        begin(progress, &format!("Fetching rankings by {vector}... "))?;
        let url = source.rankings_url(vector);
        let body = source.fetch(&url).await?;
        let genres = parse_page(&url, &body, extract::parse_rankings)?;
        writeln!(progress, "done")?;
        info!("{} genres ranked by {vector}", genres.len());
        rankings.insert(vector, genres)?;
    }

    let countries = if config.skip_countries {
        None
    } else {
        begin(progress, "Fetching countries... ")?;
        let url = source.countries_url();
        let body = source.fetch(&url).await?;
        let countries = parse_page(&url, &body, extract::parse_countries)?;
        writeln!(progress, "done")?;
        info!("{} countries listed", countries.len());
        Some(countries)
    };

    let collation = collate::collate(&rankings)?;
    render::write_header(&config.output, &collation, countries.as_deref())?;
    Ok(())
}

/// Parse a fetched body and attach the page URL to extraction failures.
pub fn parse_page<T>(
    url: &str,
    body: &str,
    parse: impl FnOnce(&Html) -> std::result::Result<T, ExtractionError>,
) -> Result<T> {
    let document = Html::parse_document(body);
    parse(&document).map_err(|source| Error::Extraction {
        page: url.to_string(),
        source,
    })
}

/// Print the first half of a progress line before a slow step.
fn begin<W: Write>(progress: &mut W, message: &str) -> io::Result<()> {
    write!(progress, "{message}")?;
    progress.flush()
}
