use crate::result::Result;
use crate::sources::Enrich;

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tokio::task::JoinSet;

pub const RAW_TITLE: &str = "RawTitle";
pub const TIME: &str = "Time";
pub const CHANNELS: &str = "Channels";

/// One scheduled movie, stored as the flat field map that ends up in the
/// output file. Seeded with `RawTitle`, `Time` and `Channels`; enrichment
/// merges the provider's top-level keys straight into the same map, so a
/// provider key named like one of the reserved fields overwrites it.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Movie {
    data: Map<String, Value>,
}

impl Movie {
    pub fn new(title: &str, time: &str, channel: &str) -> Movie {
        let mut data = Map::new();
        data.insert(RAW_TITLE.to_owned(), Value::String(title.to_owned()));
        data.insert(TIME.to_owned(), Value::String(time.to_owned()));
        data.insert(
            CHANNELS.to_owned(),
            Value::Array(vec![Value::String(channel.to_owned())]),
        );

        Movie { data }
    }

    pub fn raw_title(&self) -> &str {
        self.data
            .get(RAW_TITLE)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn channels(&self) -> Vec<&str> {
        match self.data.get(CHANNELS) {
            Some(Value::Array(channels)) => {
                channels.iter().filter_map(Value::as_str).collect()
            }
            _ => Vec::new(),
        }
    }

    fn add_channel(&mut self, channel: &str) {
        if let Some(Value::Array(channels)) = self.data.get_mut(CHANNELS) {
            if !channels.iter().any(|c| c == channel) {
                channels.push(Value::String(channel.to_owned()));
            }
        }
    }

    fn merge_info(&mut self, info: Map<String, Value>) {
        for (key, value) in info {
            self.data.insert(key, value);
        }
    }
}

/// Deduplicates movies by raw title and owns the skip list of titles that
/// failed enrichment. Movies keep the order they were first seen in.
#[derive(Debug, Default)]
pub struct Registry {
    movies: Vec<Movie>,
    skip: HashSet<String>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Adds a movie, or appends the channel if the title is already known.
    /// Skipped titles are checked first so they never touch an existing entry.
    pub fn add(&mut self, candidate: Movie, channel: &str) {
        let title = candidate.raw_title().to_owned();

        if self.skip.contains(&title) {
            return;
        }

        for movie in &mut self.movies {
            if movie.raw_title() == title {
                movie.add_channel(channel);
                return;
            }
        }

        self.movies.push(candidate);
    }

    /// Looks up every registered title against the enricher, one task per
    /// title. Lookups are independent, so they fan out concurrently; results
    /// are merged back by index, which keeps first-seen order in the output
    /// no matter which lookup finishes first. Titles that fail are dropped
    /// from the collection and added to the skip list.
    pub async fn enrich<E>(&mut self, enricher: &E) -> Result<()>
    where
        E: Enrich + Clone + Send + Sync + 'static,
    {
        let mut futures = JoinSet::new();

        for (index, movie) in self.movies.iter().enumerate() {
            let title = movie.raw_title().to_owned();
            let enricher = enricher.clone();
            futures.spawn(async move { (index, enricher.lookup(&title).await) });
        }

        let mut merged: Vec<Option<Map<String, Value>>> =
            self.movies.iter().map(|_| None).collect();

        while let Some(joined) = futures.join_next().await {
            let (index, info) = joined?;
            match info {
                Ok(info) => merged[index] = info,
                Err(err) => {
                    eprintln!(
                        "Lookup failed for movie {}: {}",
                        self.movies[index].raw_title(),
                        err
                    );
                }
            }
        }

        let mut kept = Vec::with_capacity(self.movies.len());
        for (mut movie, info) in self.movies.drain(..).zip(merged) {
            match info {
                Some(info) => {
                    movie.merge_info(info);
                    kept.push(movie);
                }
                None => {
                    eprintln!(
                        "Could not retrieve information about movie {}.",
                        movie.raw_title()
                    );
                    self.skip.insert(movie.raw_title().to_owned());
                }
            }
        }
        self.movies = kept;

        Ok(())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }

    pub fn is_skipped(&self, title: &str) -> bool {
        self.skip.contains(title)
    }
}
