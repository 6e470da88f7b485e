//! Indented text outline of a validator tree.
//!
//! ```text
//! object (additionalProperties false)
//!   name*: string (minLength 1)
//!   tags: array (uniqueItems)
//!     items: string
//! ```
//!
//! Required properties are marked with `*`. Positional items are labeled
//! with their index in the schema's `items` array.

use json_schema_parse::{Additional, ArrayItems, NumberBound, Validator};

pub fn render(validator: &Validator) -> String {
    let mut out = String::new();
    write_validator(&mut out, validator, 0);
    out
}

/// Outline of a validator under a heading line, e.g. a definition.
pub fn render_named(name: &str, validator: &Validator) -> String {
    let mut out = String::new();
    write_child(&mut out, 0, name, validator);
    out
}

fn write_validator(out: &mut String, validator: &Validator, depth: usize) {
    out.push_str(&summary(validator));
    out.push('\n');

    match validator {
        Validator::Object(object) => {
            let mut names: Vec<&String> = object.properties.keys().collect();
            names.sort();
            for name in names {
                let label = if object.is_required(name) {
                    format!("{}*", name)
                } else {
                    name.clone()
                };
                write_child(out, depth + 1, &label, &object.properties[name]);
            }
            if let Additional::Schema(extra) = &object.additional_properties {
                write_child(out, depth + 1, "additionalProperties", extra);
            }
        }
        Validator::Array(array) => {
            match &array.items {
                ArrayItems::Unspecified => {}
                ArrayItems::Single(item) => write_child(out, depth + 1, "items", item),
                ArrayItems::Positional(items) => {
                    for item in items {
                        let label = format!("[{}]", item.index);
                        write_child(out, depth + 1, &label, &item.validator);
                    }
                }
            }
            if let Additional::Schema(extra) = &array.additional_items {
                write_child(out, depth + 1, "additionalItems", extra);
            }
        }
        _ => {}
    }
}

fn write_child(out: &mut String, depth: usize, label: &str, validator: &Validator) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(label);
    out.push_str(": ");
    write_validator(out, validator, depth);
}

fn bound(name: &str, bound: &NumberBound) -> String {
    if bound.exclusive {
        format!("{} {} (exclusive)", name, bound.value)
    } else {
        format!("{} {}", name, bound.value)
    }
}

/// One line: the type name and whatever constraints are set.
fn summary(validator: &Validator) -> String {
    let mut parts: Vec<String> = Vec::new();

    let head = match validator {
        Validator::String(string) => {
            if string.min_length > 0 {
                parts.push(format!("minLength {}", string.min_length));
            }
            if let Some(max) = string.max_length {
                parts.push(format!("maxLength {}", max));
            }
            if let Some(pattern) = &string.pattern {
                parts.push(format!("pattern {}", pattern));
            }
            if let Some(format) = &string.format {
                parts.push(format!("format {}", format));
            }
            validator.type_name().to_string()
        }
        Validator::Integer(number) | Validator::Number(number) => {
            if let Some(min) = &number.minimum {
                parts.push(bound("minimum", min));
            }
            if let Some(max) = &number.maximum {
                parts.push(bound("maximum", max));
            }
            if let Some(step) = number.multiple_of {
                parts.push(format!("multipleOf {}", step));
            }
            validator.type_name().to_string()
        }
        Validator::Array(array) => {
            if array.min_items > 0 {
                parts.push(format!("minItems {}", array.min_items));
            }
            if let Some(max) = array.max_items {
                parts.push(format!("maxItems {}", max));
            }
            if array.unique_items {
                parts.push("uniqueItems".to_string());
            }
            if array.additional_items == Additional::Allowed(false) {
                parts.push("additionalItems false".to_string());
            }
            validator.type_name().to_string()
        }
        Validator::Object(object) => {
            if object.min_properties > 0 {
                parts.push(format!("minProperties {}", object.min_properties));
            }
            if let Some(max) = object.max_properties {
                parts.push(format!("maxProperties {}", max));
            }
            if object.additional_properties == Additional::Allowed(false) {
                parts.push("additionalProperties false".to_string());
            }
            validator.type_name().to_string()
        }
        Validator::Reference(reference) => {
            if reference.resolve().is_none() {
                parts.push("unresolved".to_string());
            }
            format!("ref {}", reference.reference())
        }
        _ => validator.type_name().to_string(),
    };

    let mut line = head;
    if !parts.is_empty() {
        line.push_str(&format!(" ({})", parts.join(", ")));
    }
    if let Some(title) = &validator.annotations().title {
        line.push_str(&format!(" \"{}\"", title));
    }
    line
}
