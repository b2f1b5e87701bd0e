//! Underscore detection and the underscore-to-camelCase rewrite.
//!
//! Leading and trailing underscore runs mark "private" names. They are never
//! judged and always survive a rewrite unchanged.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_UNDERSCORES: Regex = Regex::new(r"^_+").unwrap();
    static ref TRAILING_UNDERSCORES: Regex = Regex::new(r"_+$").unwrap();
}

/// Split `name` into `(prefix, core, suffix)` where `prefix` and `suffix` are
/// the leading and trailing underscore runs.
///
/// The runs never overlap: a name made only of underscores is all prefix.
pub fn split_underscore_markers(name: &str) -> (&str, &str, &str) {
    let prefix_end = LEADING_UNDERSCORES.find(name).map_or(0, |m| m.end());
    let rest = &name[prefix_end..];
    let suffix_start = TRAILING_UNDERSCORES
        .find(rest)
        .map_or(rest.len(), |m| m.start());

    (
        &name[..prefix_end],
        &rest[..suffix_start],
        &rest[suffix_start..],
    )
}

/// Whether a (marker-stripped) name uses underscores as word separators.
///
/// All-uppercase names such as `MAX_SIZE` are constants and never count.
pub fn is_underscored(name: &str) -> bool {
    name.contains('_') && name != name.to_uppercase()
}

/// Rewrite an underscored identifier to camelCase.
///
/// Each inner underscore run is dropped and the character after it is
/// uppercased. Every other character is copied as is, so `FOO_bar` becomes
/// `FOOBar`, not `fooBar`.
pub fn to_camel_case(raw: &str) -> String {
    let (prefix, core, suffix) = split_underscore_markers(raw);

    let mut result = String::with_capacity(raw.len());
    result.push_str(prefix);

    let mut uppercase_next = false;
    for c in core.chars() {
        if c == '_' {
            uppercase_next = true;
        } else if uppercase_next {
            result.extend(c.to_uppercase());
            uppercase_next = false;
        } else {
            result.push(c);
        }
    }

    result.push_str(suffix);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_markers() {
        assert_eq!(split_underscore_markers("my_var"), ("", "my_var", ""));
        assert_eq!(split_underscore_markers("_my_var"), ("_", "my_var", ""));
        assert_eq!(split_underscore_markers("my_var__"), ("", "my_var", "__"));
        assert_eq!(
            split_underscore_markers("__private_name__"),
            ("__", "private_name", "__")
        );
    }

    #[test]
    fn test_split_only_underscores() {
        assert_eq!(split_underscore_markers("___"), ("___", "", ""));
        assert_eq!(split_underscore_markers(""), ("", "", ""));
    }

    #[test]
    fn test_is_underscored() {
        assert!(is_underscored("my_var"));
        assert!(is_underscored("My_Var"));
        assert!(is_underscored("FOO_bar"));
        assert!(!is_underscored("myVar"));
        assert!(!is_underscored("MAX_SIZE"));
        assert!(!is_underscored("MAX_SIZE_2"));
        assert!(!is_underscored(""));
    }

    #[test]
    fn test_no_inner_underscore_is_unchanged() {
        assert_eq!(to_camel_case("_foo"), "_foo");
        assert_eq!(to_camel_case("foo_"), "foo_");
        assert_eq!(to_camel_case("foo"), "foo");
    }

    #[test]
    fn test_simple_rewrite() {
        assert_eq!(to_camel_case("foo_bar"), "fooBar");
        assert_eq!(to_camel_case("foo_bar_baz"), "fooBarBaz");
    }

    #[test]
    fn test_markers_preserved() {
        assert_eq!(to_camel_case("__private_name__"), "__privateName__");
        assert_eq!(to_camel_case("_cache_key"), "_cacheKey");
        assert_eq!(to_camel_case("last_one_"), "lastOne_");
    }

    #[test]
    fn test_underscore_runs_collapse() {
        assert_eq!(to_camel_case("foo__bar"), "fooBar");
        assert_eq!(to_camel_case("a___b__c"), "aBC");
    }

    #[test]
    fn test_case_is_not_normalized() {
        assert_eq!(to_camel_case("FOO_bar"), "FOOBar");
        assert_eq!(to_camel_case("my_URL"), "myURL");
        assert_eq!(to_camel_case("get_2nd"), "get2nd");
    }

    #[test]
    fn test_all_underscores() {
        assert_eq!(to_camel_case("_"), "_");
        assert_eq!(to_camel_case("____"), "____");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(to_camel_case("größe_ändern"), "größeÄndern");
    }
}
