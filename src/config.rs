use crate::options::RunOptions;

use serde::Deserialize;
use std::fs;
use time::macros::format_description;

#[derive(Debug, Clone, Deserialize)]
pub struct ListingsConfig {
    pub url: String,
    #[serde(default = "default_date")]
    pub date: String,
    pub time: String,
    pub row_height: u32,
    pub minutes_per_pixel: f64,
    pub start_hour: i64,
    pub start_minute: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbApiConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriterConfig {
    pub outputfile: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub listings: ListingsConfig,
    pub omdb_api: OmdbApiConfig,
    pub writer: WriterConfig,
}

fn default_date() -> String {
    let format = format_description!("[year]-[month]-[day]");
    time::OffsetDateTime::now_utc()
        .date()
        .format(&format)
        .expect("Could not format the default date.")
}

impl Config {
    pub fn from_file(filename: &str) -> Config {
        let config = fs::read_to_string(filename).unwrap();
        let config: Config = toml::from_str(&config).unwrap();
        config
    }

    pub fn with_options(mut self, options: RunOptions) -> Config {
        if let Some(date) = options.date {
            self.listings.date = date;
        }
        if let Some(time) = options.time {
            self.listings.time = time;
        }
        if let Some(outputfile) = options.outputfile {
            self.writer.outputfile = outputfile;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Self::from_file("config/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file() {
        let config = Config::from_file("config/config.toml");
        assert_eq!(config.listings.row_height, 52);
        assert_eq!(config.listings.minutes_per_pixel, 0.22);
        assert_eq!(config.omdb_api.url, "http://www.omdbapi.com/");
        assert_eq!(config.writer.outputfile, "movies.js");
    }

    #[test]
    #[should_panic]
    fn test_from_file_failure() {
        Config::from_file("should_fail.toml");
    }

    #[test]
    fn test_default_date() {
        let config = Config::default();
        // YYYY-MM-DD
        assert_eq!(config.listings.date.len(), 10);
        assert_eq!(config.listings.date.matches('-').count(), 2);
    }

    #[test]
    fn test_with_options() {
        let config = Config::default().with_options(RunOptions {
            date: Some("2016-01-01".to_owned()),
            time: None,
            outputfile: Some("out.js".to_owned()),
        });
        assert_eq!(config.listings.date, "2016-01-01");
        assert_eq!(config.listings.time, "22:00");
        assert_eq!(config.writer.outputfile, "out.js");
    }
}
