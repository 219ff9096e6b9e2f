// Typed attribute access for entities and events.
//
// Purpose
// - Read named attributes from heterogeneous objects through one capability.
//
// Responsibilities
// - Expose each attribute as a typed value, listed in declaration order.
// - Fail with MissingAttribute when a name does not resolve.
// - Describe attribute name mappings between the event side and the entity side.
//
// Comparison
// - Two values are equal when they have the same type and compare equal, or when one is
//   `Some` of the other's type holding an equal value. Different types never match.

use crate::application::errors::FixtureError;
use std::any::Any;
use std::fmt;

/// A single attribute value, comparable without knowing its concrete type.
pub trait AttributeValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn value_type(&self) -> &'static str;

    fn equals_or_wraps(&self, other: &dyn AttributeValue) -> bool;
}

impl<T> AttributeValue for T
where
    T: Any + fmt::Debug + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn equals_or_wraps(&self, other: &dyn AttributeValue) -> bool {
        let other = other.as_any();
        if let Some(other) = other.downcast_ref::<T>() {
            return self == other;
        }
        other
            .downcast_ref::<Option<T>>()
            .is_some_and(|other| other.as_ref() == Some(self))
    }
}

pub fn values_equal(left: &dyn AttributeValue, right: &dyn AttributeValue) -> bool {
    left.equals_or_wraps(right) || right.equals_or_wraps(left)
}

pub trait Attributes {
    fn attribute_names(&self) -> Vec<String>;

    fn attribute_value(&self, name: &str) -> Option<&dyn AttributeValue>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_value(name).is_some()
    }

    fn attribute(&self, name: &str) -> Result<&dyn AttributeValue, FixtureError> {
        self.attribute_value(name)
            .ok_or_else(|| FixtureError::missing_attribute(std::any::type_name::<Self>(), name))
    }
}

/// Implements `Attributes` for a struct by listing its fields.
///
/// ```
/// use entity_projection::{Attributes, impl_attributes};
///
/// #[derive(Debug, Clone)]
/// struct Account {
///     id: Option<String>,
///     balance: i64,
/// }
/// impl_attributes!(Account { id, balance });
///
/// let account = Account { id: None, balance: 10 };
/// assert_eq!(account.attribute_names(), vec!["id", "balance"]);
/// assert!(account.has_attribute("balance"));
/// ```
#[macro_export]
macro_rules! impl_attributes {
    ($type:ty { $($field:ident),* $(,)? }) => {
        impl $crate::core::attributes::Attributes for $type {
            fn attribute_names(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![$(::std::string::String::from(::std::stringify!($field))),*]
            }

            fn attribute_value(
                &self,
                name: &str,
            ) -> ::std::option::Option<&dyn $crate::core::attributes::AttributeValue> {
                match name {
                    $(::std::stringify!($field) => ::std::option::Option::Some(
                        &self.$field as &dyn $crate::core::attributes::AttributeValue,
                    ),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}

/// Where an attribute is read on the event, and where it is expected on the entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Same(String),
    Mapped { event: String, entity: String },
}

impl AttributeName {
    pub fn mapped(event: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::Mapped {
            event: event.into(),
            entity: entity.into(),
        }
    }

    pub fn event_name(&self) -> &str {
        match self {
            Self::Same(name) => name,
            Self::Mapped { event, .. } => event,
        }
    }

    pub fn entity_name(&self) -> &str {
        match self {
            Self::Same(name) => name,
            Self::Mapped { entity, .. } => entity,
        }
    }

    pub fn label(&self) -> String {
        printed_attribute_name(self.event_name(), self.entity_name())
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        Self::Same(name.to_string())
    }
}

impl From<String> for AttributeName {
    fn from(name: String) -> Self {
        Self::Same(name)
    }
}

impl From<(&str, &str)> for AttributeName {
    fn from((event, entity): (&str, &str)) -> Self {
        Self::mapped(event, entity)
    }
}

impl From<(String, String)> for AttributeName {
    fn from((event, entity): (String, String)) -> Self {
        Self::mapped(event, entity)
    }
}

pub fn printed_attribute_name(event_attribute: &str, entity_attribute: &str) -> String {
    if event_attribute == entity_attribute {
        event_attribute.to_string()
    } else {
        format!("{event_attribute} => {entity_attribute}")
    }
}
