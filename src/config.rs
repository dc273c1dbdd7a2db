use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Site {
    pub title: String,
    pub base_url: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct Paths {
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
    pub posts_dir: PathBuf,
}

#[derive(Deserialize, Debug)]
pub struct Defaults {
    pub post_file_name: Option<String>,
    pub page_size: u32,
    pub feed_size: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: PathBuf,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub site: Site,
    pub paths: Paths,
    pub defaults: Defaults,
    pub server: Server,
    pub log: Option<Log>,
}

impl Config {
    pub fn post_file_name(&self) -> &str {
        self.defaults.post_file_name.as_deref().unwrap_or("index.mdx")
    }

    pub fn feed_size(&self) -> u32 {
        self.defaults.feed_size.unwrap_or(20)
    }
}

// Paths may be given relative to the executable with a ${exe_dir} prefix.
fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let Ok(cur_exe) = env::current_exe() else {
        return path;
    };
    let Some(exe_dir) = cur_exe.parent().and_then(|p| p.to_str()) else {
        return path;
    };
    let Some(str_path) = path.to_str() else {
        return path;
    };
    PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Error opening configuration file {}: {}", cfg_path.display(), e),
        )
    })?;

    let mut cfg: Config = toml::from_str(cfg_content.as_str()).map_err(|e| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("Error parsing configuration file: {}", e),
        )
    })?;

    cfg.paths = Paths {
        template_dir: parse_path(cfg.paths.template_dir),
        public_dir: parse_path(cfg.paths.public_dir),
        posts_dir: parse_path(cfg.paths.posts_dir),
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const CONFIG: &str = r#"
[site]
title = "Pitchside"
base_url = "https://example.com"
description = "Cricket previews and betting guides"

[paths]
template_dir = "templates"
public_dir = "public"
posts_dir = "${exe_dir}/posts"

[defaults]
page_size = 10

[server]
address = "127.0.0.1"
port = 8080
"#;

    #[test]
    fn test_read_config() {
        let dir = TempDir::new().unwrap();
        let cfg_path = dir.path().join("pitchside.toml");
        fs::write(&cfg_path, CONFIG).unwrap();

        let config = read_config(&cfg_path).unwrap();
        assert_eq!(config.site.title, "Pitchside");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.defaults.page_size, 10);
        assert_eq!(config.post_file_name(), "index.mdx");
        assert_eq!(config.feed_size(), 20);
        assert!(config.log.is_none());
        // ${exe_dir} expanded to an absolute path
        assert!(!config.paths.posts_dir.starts_with("${exe_dir}"));
        assert!(config.paths.posts_dir.ends_with("posts"));
    }

    #[test]
    fn test_read_config_missing_file() {
        let err = read_config(&PathBuf::from("/nonexistent/pitchside.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_read_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let cfg_path = dir.path().join("pitchside.toml");
        fs::write(&cfg_path, "[site]\ntitle = ").unwrap();

        let err = read_config(&cfg_path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
