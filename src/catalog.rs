use std::{path::Path, sync::Arc, time::Duration};

use regex::{Regex, RegexBuilder};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

pub mod models;

use models::Course;

/// Read-only list of every course having an exam, in the order of the source
#[derive(Clone, Debug)]
pub struct Catalog {
    courses: Arc<[Course]>,
}

impl Catalog {
    /// Build the catalog, refusing courses without any room
    pub fn new(courses: Vec<Course>) -> Result<Self> {
        if let Some(course) = courses.iter().find(|course| course.rooms.is_empty()) {
            return Err(Error::catalog(format!("{} has no room", course.acronym)));
        }

        Ok(Self {
            courses: courses.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading catalog");
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Get the catalog from a webpage
    pub async fn fetch(url: &str, user_agent: &str) -> Result<Self> {
        debug!(url, "fetching catalog");

        // Use custom User-Agent
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        let json = client
            .get(url)
            .timeout(Duration::from_secs(5))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Self::from_json(&json)
    }

    /// Load from an URL or from a local file
    pub async fn load(source: &str, user_agent: &str) -> Result<Self> {
        let catalog = if is_url(source) {
            Self::fetch(source, user_agent).await?
        } else {
            Self::from_file(Path::new(source))?
        };

        if catalog.is_empty() {
            warn!(source, "the catalog has no course");
        }
        info!(courses = catalog.len(), source, "catalog loaded");
        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses whose acronym contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let re = acronym_matcher(query);
        self.courses()
            .iter()
            .filter(|course| re.is_match(&course.acronym))
            .collect()
    }

    /// Course with exactly this acronym, ignoring case
    pub fn find(&self, acronym: &str) -> Result<&Course> {
        let wanted = acronym.trim().to_lowercase();
        self.courses()
            .iter()
            .find(|course| course.acronym.to_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownCourse(acronym.to_owned()))
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Case-insensitive literal matcher, the query never being a pattern
fn acronym_matcher(query: &str) -> Regex {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .expect("an escaped literal is always a valid pattern")
}
