//! Placeholder threat intelligence feed.
//!
//! Stands in for a real threat-intelligence backend. Returns canned threat
//! sets branched on keywords in the system description; the branching is
//! illustrative, not a classifier contract.

use async_trait::async_trait;
use vigil_core::{BaseThreat, Result, SystemDetails};

use crate::source::ThreatSource;

/// Curated threat intelligence source.
///
/// # Examples
///
/// ```
/// use vigil_suggest::intel::IntelFeed;
/// use vigil_suggest::ThreatSource;
///
/// let feed = IntelFeed::new();
/// assert_eq!(feed.name(), "intel");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntelFeed;

impl IntelFeed {
    /// Create the placeholder feed.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThreatSource for IntelFeed {
    fn name(&self) -> &str {
        "intel"
    }

    async fn threats(&self, details: &SystemDetails) -> Result<Vec<BaseThreat>> {
        Ok(canned_threats(&details.description))
    }
}

fn threat(name: &str, description: &str) -> BaseThreat {
    BaseThreat {
        name: name.into(),
        description: description.into(),
    }
}

/// Canned threat sets keyed on description keywords.
///
/// TODO: replace with a call to an external threat intelligence API; the
/// keyword branches are illustrative mock data, not a classifier.
fn canned_threats(description: &str) -> Vec<BaseThreat> {
    let lowered = description.to_lowercase();

    if lowered.contains("database") {
        return vec![
            threat(
                "SQL Injection",
                "A code injection technique that might exploit security \
                 vulnerabilities in a database layer.",
            ),
            threat(
                "Data Exfiltration",
                "Unauthorized transfer of data from a computer or other device.",
            ),
            threat(
                "Insecure Database Configuration",
                "Misconfigurations in the database settings that could expose \
                 data or allow unauthorized access.",
            ),
        ];
    }

    if lowered.contains("web app") || lowered.contains("frontend") {
        return vec![
            threat(
                "Cross-Site Scripting (XSS)",
                "Allows attackers to inject client-side scripts into web pages \
                 viewed by other users.",
            ),
            threat(
                "Cross-Site Request Forgery (CSRF)",
                "Forces an end user to execute unwanted actions on a web \
                 application in which they are currently authenticated.",
            ),
            threat(
                "Insecure Direct Object References (IDOR)",
                "Occurs when an application provides direct access to objects \
                 based on user-supplied input.",
            ),
        ];
    }

    vec![
        threat(
            "Denial of Service (DoS)",
            "An attack meant to shut down a machine or network, making it \
             inaccessible to its intended users.",
        ),
        threat(
            "Phishing",
            "Attempting to acquire sensitive information by masquerading as a \
             trustworthy entity.",
        ),
        threat(
            "Malware Infection",
            "Software intentionally designed to cause damage to a computer, \
             server, client, or computer network.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(text: &str) -> SystemDetails {
        SystemDetails::new(text).unwrap()
    }

    #[tokio::test]
    async fn database_keyword_returns_database_threats() {
        let feed = IntelFeed::new();
        let threats = feed
            .threats(&details("An API backed by a Postgres database"))
            .await
            .unwrap();
        assert_eq!(threats.len(), 3);
        assert_eq!(threats[0].name, "SQL Injection");
    }

    #[tokio::test]
    async fn keyword_match_is_case_insensitive() {
        let feed = IntelFeed::new();
        let threats = feed
            .threats(&details("A legacy DATABASE cluster"))
            .await
            .unwrap();
        assert_eq!(threats[0].name, "SQL Injection");
    }

    #[tokio::test]
    async fn frontend_keyword_returns_web_threats() {
        let feed = IntelFeed::new();
        let threats = feed
            .threats(&details("A React frontend for account management"))
            .await
            .unwrap();
        assert!(threats.iter().any(|t| t.name.contains("XSS")));
    }

    #[tokio::test]
    async fn unmatched_description_returns_default_set() {
        let feed = IntelFeed::new();
        let threats = feed
            .threats(&details("An embedded firmware updater"))
            .await
            .unwrap();
        assert_eq!(threats.len(), 3);
        assert!(threats.iter().any(|t| t.name.contains("DoS")));
    }

    #[test]
    fn canned_threats_have_non_empty_fields() {
        for text in ["with a database", "a web app", "something else entirely"] {
            for t in canned_threats(text) {
                assert!(!t.name.is_empty());
                assert!(!t.description.is_empty());
            }
        }
    }
}
