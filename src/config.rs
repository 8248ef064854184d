//! Loads the project configuration (`tintero.yaml`): site title, base URL,
//! and the author roster. The roster is passed explicitly into the build
//! function; there is no ambient global configuration.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Name of the project file searched for by [`Config::from_directory`].
pub const PROJECT_FILE: &str = "tintero.yaml";

/// An author of the blog: static configuration, not derived from content.
/// The `slug` doubles as the source/output directory name, so every post's
/// author identifier references an existing roster entry by construction.
#[derive(Clone, Debug, Deserialize)]
pub struct Author {
    pub slug: String,
    pub name: String,
    pub initial: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub links: Vec<SocialLink>,

    /// Curated topic list shown on the author's page.
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: Url,
}

/// The project configuration. `root_directory` is derived from the
/// location of the project file, not from the file's contents.
#[derive(Debug)]
pub struct Config {
    pub title: String,

    /// Absolute base URL of the published site, used for feed links. Should
    /// end with a trailing slash so relative post URLs join onto it.
    pub site_url: Url,

    pub authors: Vec<Author>,

    /// The directory containing the author directories; output is written
    /// here as well.
    pub root_directory: PathBuf,
}

#[derive(Deserialize)]
struct Project {
    title: String,
    site_url: Url,
    authors: Vec<Author>,
}

impl Config {
    /// Searches `dir` and its parents for a [`PROJECT_FILE`] and loads it.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        let path = dir.join(PROJECT_FILE);
        if path.exists() {
            Config::from_project_file(&path)
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    PROJECT_FILE
                )),
            }
        }
    }

    /// Loads the configuration from a specific project file. The site root
    /// is the directory containing the file.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        use crate::util::open;
        let project: Project = serde_yaml::from_reader(open(path, "project")?)?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(project_root) => Ok(Config {
                title: project.title,
                site_url: project.site_url,
                authors: project.authors,
                root_directory: project_root.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    const PROJECT_YAML: &str = "\
title: NousArchives
site_url: https://example.org/
authors:
  - slug: angel
    name: Ángel
    initial: Á
    bio: Ingeniero de telecomunicaciones.
    topics: [ia, derecho]
  - slug: antonio
    name: Antonio
    initial: A
    links:
      - label: YouTube
        url: https://youtube.com/@nous
";

    #[test]
    fn test_from_project_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(PROJECT_FILE);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(PROJECT_YAML.as_bytes())?;

        let config = Config::from_project_file(&path)?;
        assert_eq!("NousArchives", config.title);
        assert_eq!("https://example.org/", config.site_url.as_str());
        assert_eq!(dir.path(), config.root_directory);
        assert_eq!(2, config.authors.len());
        assert_eq!("angel", config.authors[0].slug);
        assert_eq!(vec!["ia", "derecho"], config.authors[0].topics);
        assert_eq!("", config.authors[1].bio);
        assert_eq!("YouTube", config.authors[1].links[0].label);
        Ok(())
    }

    #[test]
    fn test_from_directory_walks_up() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(PROJECT_FILE);
        std::fs::write(&path, PROJECT_YAML)?;
        let nested = dir.path().join("angel");
        std::fs::create_dir(&nested)?;

        let config = Config::from_directory(&nested)?;
        assert_eq!("NousArchives", config.title);
        Ok(())
    }
}
