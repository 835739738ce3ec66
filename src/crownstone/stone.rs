use serde::Deserialize;

use super::device_type::prettify_device_type;

const DIMMING_ABILITY: &str = "dimming";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Ability {
    #[serde(rename = "type")]
    pub kind: String,
    pub enabled: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub name: Option<String>,
}

/// A Crownstone device as returned by `GET /Stones/all` with locations and
/// abilities included.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stone {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub sphere_id: Option<String>,
    #[serde(rename = "type")]
    pub device_type: String,
    pub location: Option<Location>,
    pub abilities: Option<Vec<Ability>>,
}

impl Stone {
    pub fn abilities(&self) -> &[Ability] {
        self.abilities.as_deref().unwrap_or_default()
    }

    /// Only the first dimming ability counts, later ones are ignored.
    pub fn is_dimmable(&self) -> bool {
        self.abilities()
            .iter()
            .find(|ability| ability.kind == DIMMING_ABILITY)
            .map(|ability| ability.enabled == Some(true))
            .unwrap_or(false)
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|location| location.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Human readable summary, e.g. "Crownstone Plug in Kitchen\nNext to the fridge".
    pub fn display_description(&self) -> String {
        let mut description = prettify_device_type(&self.device_type);

        if let Some(location) = self.location_name() {
            description.push_str(" in ");
            description.push_str(location);
        }

        if let Some(own) = self.description.as_deref().filter(|d| !d.is_empty()) {
            description.push('\n');
            description.push_str(own);
        }

        description
    }
}
