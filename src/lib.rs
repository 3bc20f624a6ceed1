pub mod config;
pub mod error;
pub mod options;
pub mod registry;
pub mod result;
pub mod schedule;
pub mod sources;
pub mod writer;

pub use config::Config;
pub use error::CustomError;
pub use options::RunOptions;
pub use registry::{Movie, Registry};
pub use result::Result;

use schedule::Geometry;
use sources::listings_scraper::ScheduleGrid;
use sources::{Extract, ListingsScraper, OmdbApi};
use writer::Writer;

/// The full listings pipeline: fetch and parse the schedule grid, resolve
/// each movie cell to a channel and start time, dedupe by raw title, enrich
/// every unique title against OMDb, and write the collection out.
pub struct Guide {
    config: Config,
}

impl Guide {
    pub fn new(config: Config) -> Guide {
        Guide { config }
    }

    /// Walks the movie cells in document order and registers each one under
    /// its channel and display time. Cells whose style doesn't match the grid
    /// layout are dropped; cells pointing at a missing channel row are
    /// skipped with a diagnostic rather than aborting the run.
    fn resolve(&self, grid: &ScheduleGrid) -> Result<Registry> {
        let geometry = Geometry::new(&self.config.listings)?;
        let mut registry = Registry::new();

        for cell in &grid.cells {
            let (top, left) = match geometry.parse_style(&cell.style) {
                Some(position) => position,
                None => continue,
            };

            let slot = match grid.channels.get(&top) {
                Some(slot) => slot,
                None => {
                    eprintln!(
                        "No channel at offset {} for movie {}.",
                        top, cell.title
                    );
                    continue;
                }
            };

            let time = geometry.time_string(geometry.offset_minutes(left));
            let movie = Movie::new(&cell.title, &time, &slot.channel);
            registry.add(movie, &slot.channel);
        }

        Ok(registry)
    }

    pub async fn run(&self) -> Result<Vec<Movie>> {
        let scraper = ListingsScraper::new(self.config.listings.clone());
        let grid = scraper.extract().await?;

        let mut registry = self.resolve(&grid)?;

        let enricher = OmdbApi::new(self.config.omdb_api.clone())?;
        registry.enrich(&enricher).await?;

        let writer = Writer::new(self.config.writer.clone());
        writer.write(registry.movies())?;

        Ok(registry.into_movies())
    }
}
