use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/query-agent`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// A beginner-friendly issue attached to a recommended repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub title: String,
    pub url: String,
}

/// A repository suggested by the recommendation service.
///
/// `name` and `url` are required; everything else falls back to an empty
/// default, whether missing or `null`, so one sparse entry doesn't sink the
/// whole response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub good_first_issues: Vec<Issue>,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Maximum number of good-first-issues shown per repository.
pub const MAX_VISIBLE_ISSUES: usize = 3;

impl Repository {
    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::parse(&self.difficulty)
    }

    /// The issues that are actually presented (first three at most).
    pub fn visible_issues(&self) -> &[Issue] {
        let end = self.good_first_issues.len().min(MAX_VISIBLE_ISSUES);
        &self.good_first_issues[..end]
    }
}

/// Difficulty rating as classified from the backend's free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Unknown,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Difficulty {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            "advanced" => Difficulty::Advanced,
            _ => Difficulty::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Unknown => "Unrated",
        }
    }
}

/// Successful response of `POST /api/query-agent`.
///
/// Every field is optional on the wire; unknown fields (the backend echoes
/// `query` when the agent answered in plain text) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct QueryResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Repository>,
    #[serde(default)]
    pub agent_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with_issues(count: usize) -> Repository {
        Repository {
            name: "foo".to_string(),
            url: "https://x".to_string(),
            description: String::new(),
            language: "Rust".to_string(),
            stars: 1,
            difficulty: "Advanced".to_string(),
            good_first_issues: (0..count)
                .map(|i| Issue {
                    title: format!("issue {i}"),
                    url: format!("https://x/issues/{i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("Beginner"), Difficulty::Beginner);
        assert_eq!(Difficulty::parse("intermediate"), Difficulty::Intermediate);
        assert_eq!(Difficulty::parse(" ADVANCED "), Difficulty::Advanced);
        assert_eq!(Difficulty::parse("Expert"), Difficulty::Unknown);
        assert_eq!(Difficulty::parse(""), Difficulty::Unknown);
    }

    #[test]
    fn test_visible_issues_capped_at_three() {
        assert_eq!(repo_with_issues(5).visible_issues().len(), 3);
        assert_eq!(repo_with_issues(2).visible_issues().len(), 2);
        assert!(repo_with_issues(0).visible_issues().is_empty());
    }

    #[test]
    fn test_query_response_full_payload() {
        let json = r#"{
            "message": "Found 1 project",
            "recommendations": [{
                "name": "foo",
                "url": "https://x",
                "description": "d",
                "language": "Python",
                "stars": 10,
                "difficulty": "Beginner",
                "good_first_issues": [{"title": "Fix typo", "url": "https://x/1"}]
            }],
            "agent_id": "agent-42"
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Found 1 project"));
        assert_eq!(response.agent_id.as_deref(), Some("agent-42"));
        assert_eq!(response.recommendations.len(), 1);
        let repo = &response.recommendations[0];
        assert_eq!(repo.stars, 10);
        assert_eq!(repo.difficulty_level(), Difficulty::Beginner);
        assert_eq!(repo.good_first_issues[0].title, "Fix typo");
    }

    #[test]
    fn test_query_response_plain_text_fallback_shape() {
        // Backend wraps non-JSON agent output as {message, query}
        let json = r#"{"message": "Try tokio", "query": "async rust"}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Try tokio"));
        assert!(response.recommendations.is_empty());
        assert!(response.agent_id.is_none());
    }

    #[test]
    fn test_sparse_repository_uses_defaults() {
        let json = r#"{"recommendations": [{"name": "bar", "url": "https://y"}]}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let repo = &response.recommendations[0];
        assert_eq!(repo.stars, 0);
        assert!(repo.language.is_empty());
        assert_eq!(repo.difficulty_level(), Difficulty::Unknown);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let json = r#"{
            "message": null,
            "recommendations": [{
                "name": "bar",
                "url": "https://y",
                "description": null,
                "language": null,
                "stars": null,
                "difficulty": null,
                "good_first_issues": null
            }],
            "agent_id": null
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let repo = &response.recommendations[0];
        assert!(repo.description.is_empty());
        assert!(repo.language.is_empty());
        assert_eq!(repo.stars, 0);
        assert_eq!(repo.difficulty_level(), Difficulty::Unknown);
        assert!(repo.good_first_issues.is_empty());
        assert!(response.message.is_none());
        assert!(response.agent_id.is_none());
    }

    #[test]
    fn test_null_recommendations_is_empty_list() {
        let json = r#"{"message": "Nothing matched", "recommendations": null}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Nothing matched"));
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_negative_stars_rejected() {
        let json = r#"{"recommendations": [{"name": "bar", "url": "https://y", "stars": -3}]}"#;
        assert!(serde_json::from_str::<QueryResponse>(json).is_err());
    }

    #[test]
    fn test_query_request_serializes_query_field() {
        let body = serde_json::to_value(QueryRequest { query: "python" }).unwrap();
        assert_eq!(body, serde_json::json!({"query": "python"}));
    }
}
