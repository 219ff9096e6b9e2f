// Type descriptors for the objects a fixture reports on.
//
// Purpose
// - Give entities and events a declared display name for report labels.
//
// Responsibilities
// - Entity exposes its entity type, Message exposes its message type.
// - Both expose the full type path for "Class" detail lines.

/// Last path segment of a type name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    shorten(std::any::type_name::<T>())
}

pub(crate) fn shorten(type_path: &str) -> &str {
    let without_generics = type_path.split('<').next().unwrap_or(type_path);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Type name with every path segment dropped, generic arguments included.
pub fn readable_type_name(type_path: &str) -> String {
    let mut readable = String::with_capacity(type_path.len());
    let mut segment = String::new();
    for character in type_path.chars() {
        match character {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                readable.push_str(shorten(&segment));
                segment.clear();
                readable.push(character);
            }
            _ => segment.push(character),
        }
    }
    readable.push_str(shorten(&segment));
    readable
}

pub trait Entity {
    fn entity_type(&self) -> &str {
        short_type_name::<Self>()
    }

    fn type_path(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

pub trait Message {
    fn message_type(&self) -> &str {
        short_type_name::<Self>()
    }

    fn type_path(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
