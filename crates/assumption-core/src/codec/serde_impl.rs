//! Serde integration for [`Group`].
//!
//! `Serialize` writes the same logical mapping as the encoder, so groups can
//! be rendered in any serde format. `Deserialize` buffers the input into a
//! generic tree and runs the two-phase decoder on it, which makes the tag
//! check apply to every self-describing format, not just YAML.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Value;

use super::decoder;
use crate::config::CodecConfig;
use crate::model::Group;

#[derive(serde::Serialize)]
struct ItemFields<'a, V: Serialize> {
    name: &'a str,
    value: &'a V,
}

impl Serialize for Group {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let id = self.id();
        let mut map = serializer.serialize_map(Some(if id.is_some() { 3 } else { 2 }))?;
        if let Some(id) = id {
            map.serialize_entry("id", id)?;
        }
        match self {
            Self::A(group) => map.serialize_entry(
                "item",
                &ItemFields {
                    name: &group.item.name,
                    value: &group.item.value,
                },
            )?,
            Self::B(group) => map.serialize_entry(
                "item",
                &ItemFields {
                    name: &group.item.name,
                    value: &group.item.value,
                },
            )?,
        }
        map.serialize_entry("type", &self.tag())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root = Value::deserialize(deserializer)?;
        decoder::decode_value(&root, &CodecConfig::default()).map_err(de::Error::custom)
    }
}
