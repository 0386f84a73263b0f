use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const SAMPLE_SOURCE: &str = "sample";

/// One roster record. Covers both source shapes: the built-in sample carries
/// a flat `city` and an `age`, the public test endpoint carries a nested
/// `address.city` and no age.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Person {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Address {
    pub city: String,
}

impl Person {
    /// Resolved city: the flat field wins over the nested address.
    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or_else(|| self.address.as_ref().map(|a| a.city.as_str()))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("person not found: {0}")]
    PersonNotFound(String),
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_roster_text(url: &str, timeout_ms: u64) -> anyhow::Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

pub fn sample_roster() -> Vec<Person> {
    let person = |id, name: &str, age, city: &str| Person {
        id,
        name: name.to_string(),
        age: Some(age),
        city: Some(city.to_string()),
        address: None,
    };
    vec![
        person(1, "Alice", 25, "New York"),
        person(2, "Bob", 30, "London"),
        person(3, "Alice", 27, "Paris"),
        person(4, "Charlie", 28, "Berlin"),
    ]
}

pub fn load_roster(source: &str) -> anyhow::Result<Vec<Person>> {
    if source == SAMPLE_SOURCE {
        return Ok(sample_roster());
    }
    if is_remote(source) {
        let body = fetch_roster_text(source, 5000)?;
        return Ok(serde_json::from_str(&body)?);
    }
    let raw = std::fs::read_to_string(Path::new(source))?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn name_matches(p: &Person, name: &str) -> bool {
    p.name.eq_ignore_ascii_case(name)
}

pub fn find<'a>(people: &'a [Person], name: &str) -> anyhow::Result<&'a Person> {
    people
        .iter()
        .find(|p| name_matches(p, name))
        .ok_or_else(|| RosterError::PersonNotFound(name.to_string()).into())
}

pub fn filter<'a>(people: &'a [Person], name: &str) -> Vec<&'a Person> {
    people.iter().filter(|p| name_matches(p, name)).collect()
}

pub fn names(people: &[Person]) -> Vec<String> {
    people.iter().map(|p| p.name.clone()).collect()
}

pub fn exists(people: &[Person], name: &str) -> bool {
    people.iter().any(|p| name_matches(p, name))
}

/// Strict universal check: a record without an age fails it.
pub fn all_adults(people: &[Person], min_age: u32) -> bool {
    people.iter().all(|p| p.age.map_or(false, |a| a >= min_age))
}

pub fn all_located(people: &[Person]) -> bool {
    people.iter().all(|p| p.city().map_or(false, |c| !c.is_empty()))
}
