use actix_web::http::Method;
use once_cell::sync::Lazy;

use crate::model::role::Role;
use Role::*;

/// One gate rule: callers hitting a path under `prefix` with the given
/// verb (or any verb when `None`) must hold one of `roles`.
pub struct Rule {
    pub prefix: &'static str,
    pub method: Option<Method>,
    pub roles: &'static [Role],
}

const ANY_ROLE: &[Role] = &[Admin, Manager, Employee, Finance, Client];

/// The static gate table, sorted longest-prefix-first so the most specific
/// rule wins. Within one prefix, verb-specific rules are listed before the
/// any-verb rule and the stable sort preserves that order. Prefixes are
/// relative to the configured API prefix.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = vec![
        Rule { prefix: "/reports/monthly", method: None, roles: &[Admin, Finance] },
        Rule { prefix: "/reports", method: None, roles: &[Admin, Manager, Finance] },
        Rule { prefix: "/payrolls", method: Some(Method::GET), roles: &[Admin, Finance, Manager] },
        Rule { prefix: "/payrolls", method: None, roles: &[Admin, Finance] },
        Rule { prefix: "/users", method: Some(Method::GET), roles: &[Admin, Manager, Finance] },
        Rule { prefix: "/users", method: None, roles: &[Admin] },
        Rule { prefix: "/projects", method: Some(Method::GET), roles: ANY_ROLE },
        Rule { prefix: "/projects", method: None, roles: &[Admin, Manager] },
        Rule { prefix: "/tasks", method: Some(Method::GET), roles: &[Admin, Manager, Employee, Finance] },
        Rule { prefix: "/tasks", method: None, roles: &[Admin, Manager, Employee] },
        Rule { prefix: "/worklogs", method: Some(Method::GET), roles: &[Admin, Manager, Finance] },
        Rule { prefix: "/worklogs", method: None, roles: &[Admin, Manager, Employee] },
        Rule { prefix: "/invoices", method: None, roles: &[Admin, Finance] },
        Rule { prefix: "/expenses", method: None, roles: &[Admin, Finance] },
        Rule { prefix: "/clients", method: None, roles: &[Admin, Finance, Manager] },
        // catch-all: any recognized role; a caller without a role is
        // denied everything under the gate
        Rule { prefix: "", method: None, roles: ANY_ROLE },
    ];
    rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    rules
});

/// Roles allowed for this path and verb, from the first matching rule.
pub fn required_roles(path: &str, method: &Method) -> &'static [Role] {
    RULES
        .iter()
        .find(|r| {
            path.starts_with(r.prefix) && r.method.as_ref().is_none_or(|m| m == method)
        })
        .map(|r| r.roles)
        .unwrap_or(ANY_ROLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_specific_prefix_wins() {
        let monthly = required_roles("/reports/monthly", &Method::GET);
        assert!(!monthly.contains(&Manager));
        let reports = required_roles("/reports/project/p-1", &Method::GET);
        assert!(reports.contains(&Manager));
    }

    #[test]
    fn verb_specific_rule_beats_the_any_verb_rule() {
        assert!(required_roles("/payrolls", &Method::GET).contains(&Manager));
        assert!(!required_roles("/payrolls/calculate", &Method::POST).contains(&Manager));
    }

    #[test]
    fn unlisted_paths_fall_to_the_catch_all() {
        let roles = required_roles("/healthish", &Method::GET);
        assert_eq!(roles, ANY_ROLE);
    }

    #[test]
    fn user_writes_are_admin_only() {
        let roles = required_roles("/users/u-9", &Method::DELETE);
        assert_eq!(roles, &[Admin]);
    }
}
