use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::OnceLock;

pub struct Dirs;

impl Dirs {
    /// Project directory specifically for blogpipe.
    ///
    /// `None` if no valid home directory could be retrieved from the operating system.
    pub fn project() -> Option<&'static ProjectDirs> {
        static CELL: OnceLock<Option<ProjectDirs>> = OnceLock::new();

        CELL.get_or_init(|| ProjectDirs::from("com", "blogpipe", "blogpipe"))
            .as_ref()
    }

    /// Default location of the config file.
    pub fn config_file() -> Option<PathBuf> {
        Self::project().map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
