/// Overrides for run configuration, usually sourced from the command line.
/// Anything left unset falls back to the value in the config file.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub date: Option<String>,
    pub time: Option<String>,
    pub outputfile: Option<String>,
}
