use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::scroll::ScrollThresholds;

pub const PROFILE_FILE: &str = "profile.json";

pub static GLOBAL_PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::load().unwrap_or_else(|e| {
        log::error!("{e}, falling back to the default profile");
        Profile::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectIcon {
    Code,
    BookOpen,
    Clock,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: ProjectIcon,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            heading: "Let's connect.".to_string(),
            blurb: String::new(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub github: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub scroll: ScrollThresholds,
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile file {0} not found")]
    NotFound(&'static str),
    #[error("Couldn't parse profile: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl Profile {
    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE).ok_or(ProfileError::NotFound(PROFILE_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ProfileError> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub fn profile() -> &'static Profile {
    &GLOBAL_PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().expect("embedded profile should parse");
        assert_eq!(profile.name, "arXiVius");
        assert_eq!(profile.mailto(), "mailto:johnnyalbrent@gmail.com");
        assert_eq!(profile.scroll, ScrollThresholds::default());
        let icons = profile.projects.iter().map(|p| p.icon).collect::<Vec<_>>();
        assert_eq!(
            icons,
            vec![ProjectIcon::Code, ProjectIcon::BookOpen, ProjectIcon::Clock]
        );
    }

    #[test]
    fn test_thresholds_default_when_missing() {
        let json = br#"{
            "name": "n", "tagline": "t", "email": "e@x.dev", "github": "https://github.com/n"
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.scroll.hero_tolerance, 100.0);
        assert_eq!(profile.scroll.scroll_to_top, 400.0);
        assert!(profile.projects.is_empty());
        assert_eq!(profile.contact, Contact::default());
    }

    #[test]
    fn test_partial_thresholds() {
        let json = br#"{
            "name": "n", "tagline": "t", "email": "e", "github": "g",
            "scroll": { "scroll_to_top": 250 }
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.scroll.hero_tolerance, 100.0);
        assert_eq!(profile.scroll.scroll_to_top, 250.0);
    }

    #[test]
    fn test_invalid_profile() {
        let err = Profile::from_json(b"{ \"name\": 3 }").unwrap_err();
        assert!(matches!(err, ProfileError::ParseError(_)));

        let json = br#"{
            "name": "n", "tagline": "t", "email": "e", "github": "g",
            "projects": [{ "title": "x", "description": "d", "url": "u", "icon": "rocket" }]
        }"#;
        assert!(Profile::from_json(json).is_err());
    }

    #[test]
    fn test_global_profile_matches_embedded() {
        assert_eq!(profile(), &Profile::load().unwrap());
    }
}
