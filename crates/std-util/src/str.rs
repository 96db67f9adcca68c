//! Identifier case conversion and inflection.
//!
//! Thin wrappers so callers never depend on `heck` or `pluralizer` directly.
//! Inputs that the inflector does not understand are returned with only the
//! case conversion applied.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// `user_profiles` -> `userProfiles`
pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// `user_profiles` -> `UserProfiles`
pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn singularize(src: &str) -> String {
    if src.is_empty() {
        return String::new();
    }

    pluralizer::pluralize(src, 1, false)
}

pub fn pluralize(src: &str) -> String {
    if src.is_empty() {
        return String::new();
    }

    pluralizer::pluralize(src, 2, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversion() {
        assert_eq!(upper_camel_case("user_profile"), "UserProfile");
        assert_eq!(camel_case("user_profile"), "userProfile");
        assert_eq!(camel_case("order_line_items"), "orderLineItems");
    }

    #[test]
    fn inflection() {
        assert_eq!(singularize("orders"), "order");
        assert_eq!(singularize("replies"), "reply");
        assert_eq!(pluralize("comment"), "comments");
        assert_eq!(pluralize("orders"), "orders");
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(singularize(""), "");
        assert_eq!(pluralize(""), "");
        assert_eq!(upper_camel_case(""), "");
    }
}
