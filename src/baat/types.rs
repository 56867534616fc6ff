//! Response types returned by the BAAT authorization service

use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a lookup against the authorization service.
///
/// `Empty` means nothing could be retrieved (failed request, unexpected
/// status or unreadable body). It is distinct from a `Found` value whose
/// fields happen to be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Empty,
}

impl<T> Lookup<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Lookup::Empty)
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Empty => None,
        }
    }

    pub fn into_found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Empty => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Lookup::Empty, Lookup::Found)
    }
}

/// User information from `authzinfo/<username>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    /// User identifier
    #[serde(default)]
    pub user: Option<String>,
    /// Organization the user belongs to
    #[serde(default)]
    pub organization: Option<Organization>,
    /// Full name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Start of the authorization window
    #[serde(default, deserialize_with = "string_or_number")]
    pub authorized_from: String,
    /// End of the authorization window
    #[serde(default, deserialize_with = "string_or_number")]
    pub authorized_until: String,
}

/// Organization details attached to a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub name: Option<String>,
    /// Organization number
    #[serde(default)]
    pub orgnr: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// Role list from `authzlist/<username>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRolesResponse {
    /// Service (role) identifiers in the order the service returned them
    #[serde(default, deserialize_with = "null_as_empty")]
    pub services: Vec<String>,
}

impl UserRolesResponse {
    pub fn new<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            services: services.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

/// Accepts a JSON string, integer or null and yields its string form.
/// `null` becomes the empty string.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(StringOrNumber::Signed(n)) => n.to_string(),
        Some(StringOrNumber::Unsigned(n)) => n.to_string(),
        Some(StringOrNumber::Float(n)) => n.to_string(),
        Some(StringOrNumber::Text(s)) => s,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
