use crate::config::ListingsConfig;
use crate::error::CustomError;
use crate::result::Result;
use crate::sources::Extract;

use async_trait::async_trait;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashMap;

/// One channel row in the grid, keyed by its vertical pixel offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSlot {
    pub channel: String,
    pub network: String,
}

/// One movie anchor in the grid: cleaned title text plus the raw inline
/// style that carries its pixel position.
#[derive(Debug, Clone)]
pub struct MovieCell {
    pub title: String,
    pub style: String,
}

#[derive(Debug, Default)]
pub struct ScheduleGrid {
    pub channels: HashMap<String, ChannelSlot>,
    pub cells: Vec<MovieCell>,
}

/// Scrapes the printable DirecTV listings grid.
pub struct ListingsScraper {
    config: ListingsConfig,
}

impl ListingsScraper {
    pub fn new(config: ListingsConfig) -> ListingsScraper {
        ListingsScraper { config }
    }

    async fn fetch(&self) -> Result<String> {
        let url = format!(
            "{}/{}/{}",
            self.config.url, self.config.date, self.config.time
        );

        let client = reqwest::Client::new();
        let page = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(page)
    }

    /// Parses the grid markup into channel slots and movie cells. Slot keys
    /// are multiples of the row height assigned in document order, which
    /// matches how the page positions one channel per row top to bottom.
    pub fn parse_grid(&self, page: &str) -> Result<ScheduleGrid> {
        let tree = Html::parse_document(page);

        let channel_selector = match Selector::parse("div.grid-source") {
            Ok(selector) => selector,
            Err(err) => {
                eprintln!("Could not parse selector: {}", err);
                return Err(CustomError::boxed("Could not parse selector."));
            }
        };
        let span_selector = match Selector::parse("span") {
            Ok(selector) => selector,
            Err(err) => {
                eprintln!("Could not parse selector: {}", err);
                return Err(CustomError::boxed("Could not parse selector."));
            }
        };
        let movie_selector = match Selector::parse("a.genre-movies") {
            Ok(selector) => selector,
            Err(err) => {
                eprintln!("Could not parse selector: {}", err);
                return Err(CustomError::boxed("Could not parse selector."));
            }
        };

        let mut grid = ScheduleGrid::default();

        println!("Parsing channel list...");

        for (index, element) in tree.select(&channel_selector).enumerate() {
            let fragments: Vec<String> = element
                .select(&span_selector)
                .map(|span| span.text().collect::<String>().trim().to_owned())
                .collect();

            if fragments.len() < 2 {
                eprintln!("Error while parsing a channel. Parse string: {:?}", fragments);
                continue;
            }

            let key = (self.config.row_height * index as u32).to_string();
            grid.channels.insert(
                key,
                ChannelSlot {
                    channel: fragments[0].to_owned(),
                    network: fragments[1].to_owned(),
                },
            );
        }

        println!("Parsing movies...");

        let rx_nonalphanum = Regex::new(r"\W+")?;

        for element in tree.select(&movie_selector) {
            let style = match element.value().attr("style") {
                Some(style) => style.to_owned(),
                None => continue,
            };

            let text = element.text().collect::<String>();
            let title = rx_nonalphanum.replace_all(&text, " ").trim().to_owned();

            grid.cells.push(MovieCell { title, style });
        }

        Ok(grid)
    }
}

#[async_trait]
impl Extract for ListingsScraper {
    type Data = ScheduleGrid;

    async fn extract(&self) -> Result<ScheduleGrid> {
        println!(
            "Fetching channel listings for {} starting from {}.",
            self.config.date, self.config.time
        );

        let page = self.fetch().await?;

        self.parse_grid(&page)
    }
}
