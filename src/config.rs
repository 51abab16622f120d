use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;
use crate::fetch::DEFAULT_BASE_URL;
use crate::render::DEFAULT_OUTPUT;
use crate::vector::Vector;
use crate::Result;

/// Generate a C header of everynoise genres, rankings and country playlists
#[derive(Parser, Debug, Clone)]
#[command(name = "load-genres", long_about = None)]
pub struct Config {
    /// Ranking vectors to fetch. The first one defines the genre set
    #[arg(
        short = 'r',
        long = "vector",
        value_enum,
        value_delimiter = ',',
        default_values_t = [Vector::Popularity]
    )]
    pub vectors: Vec<Vector>,

    /// Header file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Do not fetch countries or emit the country arrays
    #[arg(long)]
    pub skip_countries: bool,

    /// Site to fetch from
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.vectors.is_empty() {
            return Err(Error::Config("at least one vector is required".to_string()));
        }
        let mut seen = HashSet::new();
        for vector in &self.vectors {
            if !seen.insert(vector) {
                return Err(Error::Config(format!("vector {vector} requested twice")));
            }
        }
        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_layout() {
        let config = Config::try_parse_from(["load-genres"]).unwrap();
        assert_eq!(config.vectors, vec![Vector::Popularity]);
        assert_eq!(config.output, PathBuf::from("src/genres.h"));
        assert!(!config.skip_countries);
        assert_eq!(config.base_url, "http://everynoise.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn vectors_accept_lists_and_repeats() {
        let config = Config::try_parse_from([
            "load-genres",
            "-r",
            "popularity,tempo",
            "--vector",
            "modernity",
        ])
        .unwrap();
        assert_eq!(
            config.vectors,
            vec![Vector::Popularity, Vector::Tempo, Vector::Modernity]
        );
    }

    #[test]
    fn unknown_vector_is_rejected() {
        assert!(Config::try_parse_from(["load-genres", "--vector", "loudness"]).is_err());
    }

    #[test]
    fn duplicate_vectors_fail_validation() {
        let config = Config::try_parse_from(["load-genres", "-r", "tempo,tempo"]).unwrap();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn verbose_enables_debug() {
        let config = Config::try_parse_from(["load-genres", "-v"]).unwrap();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }
}
