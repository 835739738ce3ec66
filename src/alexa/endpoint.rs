use serde::Serialize;

use crate::crownstone::stone::Stone;

pub const MANUFACTURER_NAME: &str = "Crownstone";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedProperty {
    pub name: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProperties {
    pub supported: &'static [SupportedProperty],
    pub proactively_reported: bool,
    pub retrievable: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub interface: &'static str,
    pub version: &'static str,
    pub properties: CapabilityProperties,
}

pub const POWER_STATE_CAPABILITY: Capability = Capability {
    kind: "AlexaInterface",
    interface: "Alexa.PowerController",
    version: "3",
    properties: CapabilityProperties {
        supported: &[SupportedProperty { name: "powerState" }],
        proactively_reported: true,
        retrievable: false,
    },
};

pub const POWER_LEVEL_CAPABILITY: Capability = Capability {
    kind: "AlexaInterface",
    interface: "Alexa.PowerLevelController",
    version: "3",
    properties: CapabilityProperties {
        supported: &[SupportedProperty { name: "powerLevel" }],
        proactively_reported: true,
        retrievable: false,
    },
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    Light,
    Switch,
}

/// Which endpoint shape a stone is exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Light,
    Switch,
}

impl EndpointKind {
    pub fn for_stone(stone: &Stone) -> Self {
        if stone.is_dimmable() {
            Self::Light
        } else {
            Self::Switch
        }
    }

    pub fn display_categories(self) -> Vec<DisplayCategory> {
        match self {
            Self::Light => vec![DisplayCategory::Light],
            Self::Switch => vec![DisplayCategory::Switch],
        }
    }

    pub fn capabilities(self) -> Vec<Capability> {
        match self {
            Self::Light => vec![POWER_LEVEL_CAPABILITY, POWER_STATE_CAPABILITY],
            Self::Switch => vec![POWER_STATE_CAPABILITY],
        }
    }
}

/// Handed back to us by the assistant with every control directive for
/// this endpoint.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere: Option<String>,
    pub dimmable: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub endpoint_id: String,
    pub manufacturer_name: &'static str,
    pub description: String,
    pub friendly_name: String,
    pub display_categories: Vec<DisplayCategory>,
    pub cookie: Cookie,
    pub capabilities: Vec<Capability>,
}

impl From<&Stone> for Endpoint {
    fn from(stone: &Stone) -> Self {
        let kind = EndpointKind::for_stone(stone);

        Endpoint {
            endpoint_id: stone.id.clone(),
            manufacturer_name: MANUFACTURER_NAME,
            description: stone.display_description(),
            friendly_name: stone.name.clone(),
            display_categories: kind.display_categories(),
            cookie: Cookie {
                address: stone.address.clone(),
                sphere: stone.sphere_id.clone(),
                dimmable: kind == EndpointKind::Light,
            },
            capabilities: kind.capabilities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    use super::*;

    fn stone(value: serde_json::Value) -> Stone {
        serde_json::from_value(value).unwrap()
    }

    fn power_state_json() -> serde_json::Value {
        json!({
            "type": "AlexaInterface",
            "interface": "Alexa.PowerController",
            "version": "3",
            "properties": {
                "supported": [{ "name": "powerState" }],
                "proactivelyReported": true,
                "retrievable": false,
            },
        })
    }

    fn power_level_json() -> serde_json::Value {
        json!({
            "type": "AlexaInterface",
            "interface": "Alexa.PowerLevelController",
            "version": "3",
            "properties": {
                "supported": [{ "name": "powerLevel" }],
                "proactivelyReported": true,
                "retrievable": false,
            },
        })
    }

    #[test]
    fn dimmable_stone_becomes_light() {
        let stone = stone(json!({
            "id": "58de6bda62a2241400f10c67",
            "name": "Desk lamp",
            "description": "Backup light",
            "address": "F3:2A:11:00:00:01",
            "sphereId": "58de6bda62a2241400f10c60",
            "type": "BUILTIN",
            "location": { "name": "Kitchen" },
            "abilities": [
                { "type": "tapToToggle", "enabled": true },
                { "type": "dimming", "enabled": true },
            ],
        }));

        assert_json_eq!(
            serde_json::to_value(Endpoint::from(&stone)).unwrap(),
            json!({
                "endpointId": "58de6bda62a2241400f10c67",
                "manufacturerName": "Crownstone",
                "description": "Crownstone Built-in in Kitchen\nBackup light",
                "friendlyName": "Desk lamp",
                "displayCategories": ["LIGHT"],
                "cookie": {
                    "address": "F3:2A:11:00:00:01",
                    "sphere": "58de6bda62a2241400f10c60",
                    "dimmable": true,
                },
                "capabilities": [power_level_json(), power_state_json()],
            })
        );
    }

    #[test]
    fn non_dimmable_stone_becomes_switch() {
        let stone = stone(json!({
            "id": "1",
            "name": "Heater",
            "address": "F3:2A:11:00:00:02",
            "sphereId": "s1",
            "type": "PLUG",
            "abilities": [{ "type": "dimming", "enabled": false }],
        }));

        assert_json_eq!(
            serde_json::to_value(Endpoint::from(&stone)).unwrap(),
            json!({
                "endpointId": "1",
                "manufacturerName": "Crownstone",
                "description": "Crownstone Plug",
                "friendlyName": "Heater",
                "displayCategories": ["SWITCH"],
                "cookie": {
                    "address": "F3:2A:11:00:00:02",
                    "sphere": "s1",
                    "dimmable": false,
                },
                "capabilities": [power_state_json()],
            })
        );
    }

    #[test]
    fn stone_without_abilities_becomes_switch() {
        let stone = stone(json!({ "id": "1", "name": "Heater", "type": "PLUG" }));
        let endpoint = Endpoint::from(&stone);

        assert_eq!(endpoint.display_categories, vec![DisplayCategory::Switch]);
        assert_eq!(endpoint.capabilities, vec![POWER_STATE_CAPABILITY]);
        assert!(!endpoint.cookie.dimmable);
    }

    #[test]
    fn later_dimming_ability_is_ignored() {
        let stone = stone(json!({
            "id": "1",
            "name": "Heater",
            "type": "PLUG",
            "abilities": [
                { "type": "dimming", "enabled": false },
                { "type": "dimming", "enabled": true },
            ],
        }));

        assert_eq!(EndpointKind::for_stone(&stone), EndpointKind::Switch);
    }

    #[test]
    fn translation_is_repeatable() {
        let stone = stone(json!({
            "id": "1",
            "name": "Lamp",
            "type": "PLUG",
            "abilities": [{ "type": "dimming", "enabled": true }],
        }));

        assert_eq!(Endpoint::from(&stone), Endpoint::from(&stone));
    }
}
