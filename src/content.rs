use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().expect("embedded portfolio content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    Missing,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub profile_image: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub position: String,
    pub company: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub github_link: String,
    #[serde(default)]
    pub demo_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMedia {
    pub instagram: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

impl SocialMedia {
    /// `(platform, url)` pairs in display order.
    pub fn links(&self) -> [(&'static str, &str); 4] {
        [
            ("instagram", &self.instagram),
            ("linkedin", &self.linkedin),
            ("github", &self.github),
            ("twitter", &self.twitter),
        ]
    }
}

/// Entry in the scrolling technology marquee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub social_media: SocialMedia,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing)?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let mut portfolio: Portfolio =
            serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))?;
        for skill in portfolio.skills.iter_mut() {
            skill.level = skill.level.min(100);
        }
        Ok(portfolio)
    }
}

/// The site's content, parsed once on first access.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Ada",
            "tagline": "Engineer",
            "description": "Builds things",
            "profileImage": "./images/ada.jpg",
            "email": "ada@example.com",
            "location": "London"
        },
        "skills": [{ "name": "Rust", "level": 140 }],
        "education": [],
        "experience": [],
        "projects": [{
            "id": 1,
            "title": "Engine",
            "description": "Difference engine",
            "image": "./images/engine.png",
            "technologies": ["Brass"],
            "githubLink": "https://github.com/ada/engine"
        }],
        "socialMedia": {
            "instagram": "https://instagram.com/ada",
            "linkedin": "https://linkedin.com/in/ada",
            "github": "https://github.com/ada",
            "twitter": "https://x.com/ada"
        }
    }"#;

    #[test]
    fn test_embedded_portfolio_parses() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.technologies.is_empty());
        assert!(portfolio.skills.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_optional_fields_default() {
        let portfolio = Portfolio::from_json(MINIMAL.as_bytes()).unwrap();
        assert!(portfolio.projects[0].demo_link.is_none());
        assert!(portfolio.technologies.is_empty());
        assert!(portfolio.services.is_empty());
        assert_eq!(portfolio.profile.profile_image, "./images/ada.jpg");
    }

    #[test]
    fn test_skill_levels_are_clamped() {
        let portfolio = Portfolio::from_json(MINIMAL.as_bytes()).unwrap();
        assert_eq!(portfolio.skills[0].level, 100);
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let err = Portfolio::from_json(b"{\"profile\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_social_links_order() {
        let portfolio = Portfolio::from_json(MINIMAL.as_bytes()).unwrap();
        let platforms = portfolio
            .social_media
            .links()
            .map(|(platform, _)| platform);
        assert_eq!(platforms, ["instagram", "linkedin", "github", "twitter"]);
    }
}
