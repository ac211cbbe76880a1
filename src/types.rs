use serde::{Deserialize, Deserializer};

// GitHub API response structures
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    /// Empty when the API sends `null` or omits the field.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub html_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
