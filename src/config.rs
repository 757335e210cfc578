use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

pub const SETTINGS_VERSION: u32 = 1;

/// Launcher settings. Nothing here changes the launched command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_file_logging")]
    pub file_logging: bool,
    #[serde(default)]
    pub version: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Paths {
    pub cfg_file: PathBuf,
    pub cfg_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            file_logging: default_file_logging(),
            version: Some(SETTINGS_VERSION),
        }
    }
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_file_logging() -> bool {
    true
}

pub fn project_paths() -> Result<Paths> {
    let dirs = ProjectDirs::from("ch", "ETH Zurich", "SCUOpenBISImporter")
        .context("Failed to determine project directories")?;
    let cfg_dir = dirs.config_dir().to_path_buf();
    Ok(Paths {
        cfg_file: cfg_dir.join("launcher.json"),
        cfg_dir,
        log_dir: dirs.data_local_dir().join("logs"),
    })
}

/// Settings, their paths, and any problem met while reading them. The problem
/// is returned rather than logged since no subscriber exists yet.
pub fn load_or_default() -> Result<(Settings, Paths, Option<anyhow::Error>)> {
    let paths = project_paths()?;
    let (settings, problem) = load_from(&paths);
    Ok((settings, paths, problem))
}

/// Read settings from `paths`, writing defaults on first run. An existing file
/// that cannot be read or parsed is left alone and defaults are used.
pub fn load_from(paths: &Paths) -> (Settings, Option<anyhow::Error>) {
    match fs::read(&paths.cfg_file) {
        Ok(data) => match serde_json::from_slice(&data) {
            Ok(settings) => (settings, None),
            Err(e) => {
                let e = anyhow::Error::new(e).context(format!(
                    "Failed to parse launcher settings {}",
                    paths.cfg_file.display()
                ));
                (Settings::default(), Some(e))
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let settings = Settings::default();
            let problem = save_atomic(&settings, paths)
                .context("Failed to write default launcher settings")
                .err();
            (settings, problem)
        }
        Err(e) => {
            let e = anyhow::Error::new(e).context(format!(
                "Failed to read launcher settings {}",
                paths.cfg_file.display()
            ));
            (Settings::default(), Some(e))
        }
    }
}

pub fn save_atomic(settings: &Settings, paths: &Paths) -> Result<()> {
    fs::create_dir_all(&paths.cfg_dir).context("create config dir")?;
    let tmp = paths.cfg_file.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(settings)?;
    {
        let mut f = fs::File::create(&tmp).context("create temp settings")?;
        f.write_all(&data).context("write temp settings")?;
        f.sync_all().ok();
    }
    fs::rename(&tmp, &paths.cfg_file).context("rename temp to final")?;
    Ok(())
}
