//! Grouping of parsed properties by token level

use serde::Serialize;

use crate::css::parser::ParsedProperty;
use crate::tokens::name::TokenLevel;

/// Parsed properties partitioned by level. Every bucket is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertiesByLevel {
    pub primitive: Vec<ParsedProperty>,
    pub core: Vec<ParsedProperty>,
    pub semantic: Vec<ParsedProperty>,
    pub component: Vec<ParsedProperty>,
    pub unknown: Vec<ParsedProperty>,
}

impl PropertiesByLevel {
    /// Bucket for a level
    pub fn get(&self, level: TokenLevel) -> &[ParsedProperty] {
        match level {
            TokenLevel::Primitive => &self.primitive,
            TokenLevel::Core => &self.core,
            TokenLevel::Semantic => &self.semantic,
            TokenLevel::Component => &self.component,
            TokenLevel::Unknown => &self.unknown,
        }
    }

    fn bucket_mut(&mut self, level: TokenLevel) -> &mut Vec<ParsedProperty> {
        match level {
            TokenLevel::Primitive => &mut self.primitive,
            TokenLevel::Core => &mut self.core,
            TokenLevel::Semantic => &mut self.semantic,
            TokenLevel::Component => &mut self.component,
            TokenLevel::Unknown => &mut self.unknown,
        }
    }

    /// Total number of properties across all buckets
    pub fn len(&self) -> usize {
        TokenLevel::ALL.iter().map(|level| self.get(*level).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition properties by the level in their name, keeping input order
/// inside each bucket.
pub fn group_properties_by_level(properties: &[ParsedProperty]) -> PropertiesByLevel {
    let mut groups = PropertiesByLevel::default();
    for property in properties {
        groups
            .bucket_mut(TokenLevel::from_css_var_name(&property.name))
            .push(property.clone());
    }
    groups
}
