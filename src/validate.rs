use serde::Serialize;
use utoipa::ToSchema;

use crate::api::types::ListUsersParams;

/// Where a request parameter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Query,
    Path,
}

/// A single rule violation, reported back to the caller verbatim.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub message: String,
    pub parameter: String,
    pub location: Location,
}

struct Violation {
    value: Option<String>,
    message: String,
}

/// One declarative check against the request parameters. Guarded rules are
/// skipped entirely when the guard does not hold, not defaulted.
struct Rule<T: ?Sized> {
    parameter: &'static str,
    location: Location,
    guard: fn(&T) -> bool,
    check: fn(&T) -> Option<Violation>,
}

/// Evaluates every rule whose guard holds and aggregates all violations
/// rather than stopping at the first.
fn run<T: ?Sized>(rules: &[Rule<T>], params: &T) -> Vec<ValidationFailure> {
    rules
        .iter()
        .filter(|rule| (rule.guard)(params))
        .filter_map(|rule| {
            (rule.check)(params).map(|violation| ValidationFailure {
                value: violation.value,
                message: violation.message,
                parameter: rule.parameter.to_string(),
                location: rule.location,
            })
        })
        .collect()
}

fn always<T: ?Sized>(_: &T) -> bool {
    true
}

pub fn list_users(params: &ListUsersParams) -> Vec<ValidationFailure> {
    let rules: &[Rule<ListUsersParams>] = &[
        Rule {
            parameter: "perPage",
            location: Location::Query,
            guard: always,
            check: |p| {
                int_in_range(
                    p.per_page.as_deref(),
                    1,
                    100,
                    "perPage must be an integer between 1 and 100",
                )
            },
        },
        Rule {
            parameter: "since",
            location: Location::Query,
            guard: |p| p.search.is_none(),
            check: |p| {
                int_in_range(
                    p.since.as_deref(),
                    0,
                    u64::MAX,
                    "since must be an integer greater than or equal to 0",
                )
            },
        },
        Rule {
            parameter: "search",
            location: Location::Query,
            guard: always,
            check: |p| {
                min_len(
                    p.search.as_deref(),
                    3,
                    "search must be at least 3 characters long",
                )
            },
        },
        Rule {
            parameter: "sort",
            location: Location::Query,
            guard: |p| p.search.is_some(),
            check: |p| {
                one_of(
                    p.sort.as_deref(),
                    &["followers", "repositories", "joined"],
                    "sort must be one of followers, repositories or joined",
                )
            },
        },
        Rule {
            parameter: "order",
            location: Location::Query,
            guard: |p| p.search.is_some(),
            check: |p| {
                one_of(
                    p.order.as_deref(),
                    &["asc", "desc"],
                    "order must be either asc or desc",
                )
            },
        },
        Rule {
            parameter: "page",
            location: Location::Query,
            guard: |p| p.search.is_some(),
            // Capped at u32::MAX so an accepted value always survives the
            // handler's parse, like perPage's range does.
            check: |p| {
                int_in_range(
                    p.page.as_deref(),
                    1,
                    u32::MAX as u64,
                    "page must be an integer greater than or equal to 1",
                )
            },
        },
    ];

    run(rules, params)
}

pub fn get_user(username: &str) -> Vec<ValidationFailure> {
    let rules: &[Rule<str>] = &[Rule {
        parameter: "username",
        location: Location::Path,
        guard: always,
        check: |name| {
            if is_valid_username(name) {
                None
            } else {
                Some(Violation {
                    value: Some(name.to_string()),
                    message: "username must be a valid GitHub username".to_string(),
                })
            }
        },
    }];

    run(rules, username)
}

/// GitHub login pattern: ASCII alphanumerics and single hyphens, no
/// leading/trailing hyphen, 1-39 characters.
pub fn is_valid_username(name: &str) -> bool {
    if name.is_empty() || name.len() > 39 {
        return false;
    }
    let bytes = name.as_bytes();
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return false;
    }
    let mut previous_hyphen = false;
    for &byte in bytes {
        if byte == b'-' {
            if previous_hyphen {
                return false;
            }
            previous_hyphen = true;
        } else if byte.is_ascii_alphanumeric() {
            previous_hyphen = false;
        } else {
            return false;
        }
    }
    true
}

fn int_in_range(raw: Option<&str>, min: u64, max: u64, message: &str) -> Option<Violation> {
    let raw = raw?;
    match raw.parse::<u64>() {
        Ok(n) if (min..=max).contains(&n) => None,
        _ => Some(violation(raw, message)),
    }
}

fn one_of(raw: Option<&str>, allowed: &[&str], message: &str) -> Option<Violation> {
    let raw = raw?;
    if allowed.contains(&raw) {
        None
    } else {
        Some(violation(raw, message))
    }
}

fn min_len(raw: Option<&str>, min: usize, message: &str) -> Option<Violation> {
    let raw = raw?;
    if raw.chars().count() >= min {
        None
    } else {
        Some(violation(raw, message))
    }
}

fn violation(value: &str, message: &str) -> Violation {
    Violation {
        value: Some(value.to_string()),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ListUsersParams {
        ListUsersParams::default()
    }

    #[test]
    fn empty_query_is_accepted() {
        assert!(list_users(&params()).is_empty());
    }

    #[test]
    fn per_page_out_of_range_is_rejected() {
        let failures = list_users(&ListUsersParams {
            per_page: Some("101".to_string()),
            ..params()
        });
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].parameter, "perPage");
        assert_eq!(failures[0].value.as_deref(), Some("101"));
        assert_eq!(failures[0].location, Location::Query);
        assert!(failures[0].message.contains("between 1 and 100"));
    }

    #[test]
    fn per_page_must_be_numeric() {
        let failures = list_users(&ListUsersParams {
            per_page: Some("lots".to_string()),
            ..params()
        });
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].parameter, "perPage");
    }

    #[test]
    fn per_page_bounds_are_inclusive() {
        for value in ["1", "100"] {
            let failures = list_users(&ListUsersParams {
                per_page: Some(value.to_string()),
                ..params()
            });
            assert!(failures.is_empty(), "perPage={value} should be accepted");
        }
    }

    #[test]
    fn negative_since_is_rejected() {
        let failures = list_users(&ListUsersParams {
            since: Some("-1".to_string()),
            ..params()
        });
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].parameter, "since");
    }

    #[test]
    fn short_search_is_rejected() {
        let failures = list_users(&ListUsersParams {
            search: Some("ab".to_string()),
            ..params()
        });
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].parameter, "search");
    }

    #[test]
    fn sort_is_checked_only_with_search() {
        let accepted = list_users(&ListUsersParams {
            search: Some("alice".to_string()),
            sort: Some("followers".to_string()),
            ..params()
        });
        assert!(accepted.is_empty());

        // Without search the sort rule is skipped entirely, so even an
        // invalid value goes unreported.
        let skipped = list_users(&ListUsersParams {
            sort: Some("banana".to_string()),
            ..params()
        });
        assert!(skipped.is_empty());
    }

    #[test]
    fn since_is_skipped_when_search_is_present() {
        let failures = list_users(&ListUsersParams {
            search: Some("alice".to_string()),
            since: Some("not-a-number".to_string()),
            ..params()
        });
        assert!(failures.is_empty());
    }

    #[test]
    fn invalid_sort_and_order_are_rejected_with_search() {
        let failures = list_users(&ListUsersParams {
            search: Some("alice".to_string()),
            sort: Some("stars".to_string()),
            order: Some("sideways".to_string()),
            page: Some("0".to_string()),
            ..params()
        });
        let parameters: Vec<_> = failures.iter().map(|f| f.parameter.as_str()).collect();
        assert_eq!(parameters, vec!["sort", "order", "page"]);
    }

    #[test]
    fn page_beyond_u32_is_rejected_not_dropped() {
        // 2^32: parses as u64 but not as the u32 the upstream client takes,
        // so accepting it would silently drop the parameter downstream.
        let failures = list_users(&ListUsersParams {
            search: Some("alice".to_string()),
            page: Some("4294967296".to_string()),
            ..params()
        });
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].parameter, "page");
    }

    #[test]
    fn failures_are_aggregated_not_short_circuited() {
        let failures = list_users(&ListUsersParams {
            per_page: Some("0".to_string()),
            search: Some("ab".to_string()),
            ..params()
        });
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn valid_usernames_are_accepted() {
        for name in ["octocat", "octo-cat", "a", "user1", "a1-b2-c3"] {
            assert!(get_user(name).is_empty(), "{name} should be accepted");
        }
        assert!(is_valid_username(&"a".repeat(39)));
    }

    #[test]
    fn invalid_usernames_are_rejected() {
        for name in ["-octocat", "octocat-", "octocat--2", "", "octo_cat", "octo cat"] {
            let failures = get_user(name);
            assert_eq!(failures.len(), 1, "{name:?} should be rejected");
            assert_eq!(failures[0].parameter, "username");
            assert_eq!(failures[0].location, Location::Path);
        }
        assert!(!is_valid_username(&"a".repeat(40)));
    }
}
