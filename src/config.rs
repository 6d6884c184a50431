use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub docroot: PathBuf,
}

impl Config {
    /// Builds the configuration from the process arguments.
    ///
    /// Exactly one positional argument is accepted: the document root.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args())
    }

    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let program = args.next().unwrap_or_else(|| "oneshotd".to_string());
        match (args.next(), args.next()) {
            (Some(root), None) => Ok(Self {
                docroot: PathBuf::from(root),
            }),
            _ => anyhow::bail!("Usage: {program} <docroot>"),
        }
    }
}
