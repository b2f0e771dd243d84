//! Descriptive header fields extracted from a DNA container.

/// Which of the two known header layouts a DNA file uses.
///
/// The two variants are distinguishable only by file content (a version
/// field in the container header), not by the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchemaVariant {
    /// MetaHuman 4 layout.
    #[cfg_attr(feature = "serde", serde(rename = "MH.4"))]
    Mh4,
    /// Digital Human Identity layout.
    #[cfg_attr(feature = "serde", serde(rename = "DHI"))]
    Dhi,
}

impl SchemaVariant {
    /// The on-disk tag for this variant.
    pub const fn tag(&self) -> &'static str {
        match self {
            SchemaVariant::Mh4 => "MH.4",
            SchemaVariant::Dhi => "DHI",
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Character gender as recorded in the rig metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Descriptive header fields for a character rig.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RigMetadata {
    /// Rig name, derived from the source file name with the extension
    /// stripped.
    pub name: String,
    /// Which header layout the file uses.
    pub schema_variant: SchemaVariant,
    /// Free-form archetype label; `"Unknown"` when unresolved.
    pub archetype: String,
    /// Character gender.
    pub gender: Gender,
    /// Character age in years; `0` means unknown.
    pub age: u32,
}

impl RigMetadata {
    /// Metadata with everything but the name unresolved.
    pub fn unresolved(name: impl Into<String>, schema_variant: SchemaVariant) -> Self {
        Self {
            name: name.into(),
            schema_variant,
            archetype: "Unknown".to_string(),
            gender: Gender::Unknown,
            age: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_tags() {
        assert_eq!(SchemaVariant::Mh4.to_string(), "MH.4");
        assert_eq!(SchemaVariant::Dhi.to_string(), "DHI");
    }

    #[test]
    fn test_unresolved_metadata() {
        let meta = RigMetadata::unresolved("hero", SchemaVariant::Mh4);

        assert_eq!(meta.name, "hero");
        assert_eq!(meta.archetype, "Unknown");
        assert_eq!(meta.gender, Gender::Unknown);
        assert_eq!(meta.age, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_stable_field_names() {
        let meta = RigMetadata::unresolved("hero", SchemaVariant::Dhi);
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["name"], "hero");
        assert_eq!(json["schemaVariant"], "DHI");
        assert_eq!(json["archetype"], "Unknown");
        assert_eq!(json["gender"], "Unknown");
        assert_eq!(json["age"], 0);
    }
}
