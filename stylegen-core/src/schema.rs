//! The component schema produced by declaration scanners.

use serde::Serialize;

use crate::category::Category;

/// Order in which flat property groups appear on the style itself.
pub const STYLE_GROUP_ORDER: [Category; 4] = [
    Category::Typography,
    Category::Shape,
    Category::Shadow,
    Category::FloatValue,
];

/// A named property tagged with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub category: Category,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Property names grouped by category. Order within each list is preserved
/// into the generated declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentProperties {
    pub shape_props: Vec<String>,
    pub shadow_props: Vec<String>,
    pub float_value_props: Vec<String>,
    pub typography_props: Vec<String>,
    pub color_props: Vec<String>,
    pub dimension_props: Vec<String>,
}

impl ComponentProperties {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Shape => &self.shape_props,
            Category::Shadow => &self.shadow_props,
            Category::FloatValue => &self.float_value_props,
            Category::Typography => &self.typography_props,
            Category::Color => &self.color_props,
            Category::Dimension => &self.dimension_props,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Shape => &mut self.shape_props,
            Category::Shadow => &mut self.shadow_props,
            Category::FloatValue => &mut self.float_value_props,
            Category::Typography => &mut self.typography_props,
            Category::Color => &mut self.color_props,
            Category::Dimension => &mut self.dimension_props,
        }
    }

    /// Descriptors for the given categories, category by category.
    pub fn descriptors(&self, categories: &[Category]) -> Vec<PropertyDescriptor> {
        categories
            .iter()
            .flat_map(|&category| {
                self.get(category)
                    .iter()
                    .map(move |name| PropertyDescriptor::new(name.clone(), category))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.get(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structured description of one component's visual attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSchema {
    /// Base name of every generated artifact, e.g. `Button`.
    pub name: String,
    pub properties: ComponentProperties,
}

impl ComponentSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: ComponentProperties::default(),
        }
    }

    /// Append properties to one category.
    pub fn with<I, S>(mut self, category: Category, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties
            .get_mut(category)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Flat properties of the style itself: typography, shape, shadow, float.
    pub fn style_props(&self) -> Vec<PropertyDescriptor> {
        self.properties.descriptors(&STYLE_GROUP_ORDER)
    }

    pub fn color_props(&self) -> Vec<PropertyDescriptor> {
        self.properties.descriptors(&[Category::Color])
    }

    pub fn dimension_props(&self) -> Vec<PropertyDescriptor> {
        self.properties.descriptors(&[Category::Dimension])
    }

    /// Every category a property name is listed under.
    pub fn categories_of(&self, name: &str) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.properties.get(c).iter().any(|p| p == name))
            .collect()
    }
}
