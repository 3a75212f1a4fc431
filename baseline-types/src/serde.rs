//! Serde helpers for types we don't own.

/// Reads and writes a [`Tag`](write_fonts::types::Tag) as its four character string.
pub(crate) mod tag {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
    use write_fonts::types::Tag;

    pub(crate) fn serialize<S: Serializer>(tag: &Tag, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&tag.to_string())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tag, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<Tag>()
            .map_err(|e| D::Error::custom(format!("bad tag '{raw}': {e}")))
    }
}
