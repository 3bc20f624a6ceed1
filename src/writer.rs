use crate::config::WriterConfig;
use crate::registry::Movie;
use crate::result::Result;

use std::fs;

/// Serializes the movie collection to a script-embeddable data file:
/// `var movies = [...];`. The output file is fully overwritten each run.
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    pub fn new(config: WriterConfig) -> Writer {
        Writer { config }
    }

    pub fn render(&self, movies: &[Movie]) -> Result<String> {
        Ok(format!("var movies = {};", serde_json::to_string(movies)?))
    }

    pub fn write(&self, movies: &[Movie]) -> Result<()> {
        println!(
            "Writing {} movies to {}.",
            movies.len(),
            self.config.outputfile
        );

        fs::write(&self.config.outputfile, self.render(movies)?)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(outputfile: &str) -> Writer {
        Writer::new(WriterConfig {
            outputfile: outputfile.to_owned(),
        })
    }

    #[test]
    fn test_render() {
        let movies = vec![Movie::new("The Matrix", "21:00", "KABC")];
        let rendered = writer("movies.js").render(&movies).unwrap();

        assert!(rendered.starts_with("var movies = ["));
        assert!(rendered.ends_with("];"));
        assert!(rendered.contains(r#""RawTitle":"The Matrix""#));
        assert!(rendered.contains(r#""Channels":["KABC"]"#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let movies = vec![
            Movie::new("The Matrix", "21:00", "KABC"),
            Movie::new("Alien", "19:00", "KCBS"),
        ];
        let writer = writer("movies.js");

        assert_eq!(
            writer.render(&movies).unwrap(),
            writer.render(&movies).unwrap()
        );
    }

    #[test]
    fn test_write_overwrites() {
        let path = std::env::temp_dir().join("tvguide_writer_test.js");
        let path = path.to_string_lossy().into_owned();
        let writer = writer(&path);

        writer
            .write(&[
                Movie::new("The Matrix", "21:00", "KABC"),
                Movie::new("Alien", "19:00", "KCBS"),
            ])
            .unwrap();
        writer.write(&[Movie::new("Alien", "19:00", "KCBS")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("The Matrix"));
        assert_eq!(contents, writer.render(&[Movie::new("Alien", "19:00", "KCBS")]).unwrap());

        fs::remove_file(&path).unwrap();
    }
}
