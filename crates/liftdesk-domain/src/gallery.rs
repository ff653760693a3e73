//! Gallery image domain types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageCategory {
    Exterior,
    Interior,
    Equipment,
    Gallery,
    Transformation,
}

impl ImageCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "EXTERIOR" => Some(Self::Exterior),
            "INTERIOR" => Some(Self::Interior),
            "EQUIPMENT" => Some(Self::Equipment),
            "GALLERY" => Some(Self::Gallery),
            "TRANSFORMATION" => Some(Self::Transformation),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exterior => "EXTERIOR",
            Self::Interior => "INTERIOR",
            Self::Equipment => "EQUIPMENT",
            Self::Gallery => "GALLERY",
            Self::Transformation => "TRANSFORMATION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageVisibility {
    Public,
    AdminOnly,
}

impl ImageVisibility {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PUBLIC" => Some(Self::Public),
            "ADMIN_ONLY" => Some(Self::AdminOnly),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::AdminOnly => "ADMIN_ONLY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_category_and_visibility() {
        assert_eq!(
            ImageCategory::parse("TRANSFORMATION"),
            Some(ImageCategory::Transformation)
        );
        assert_eq!(ImageCategory::parse("LOBBY"), None);
        assert_eq!(
            ImageVisibility::parse("ADMIN_ONLY"),
            Some(ImageVisibility::AdminOnly)
        );
        assert_eq!(ImageVisibility::parse("PRIVATE"), None);
    }
}
