//! Helpers for normalising and taking apart hierarchical names.
use crate::DomainError;
use idna::Config;

const WILDCARD_PREFIX: &str = "*.";

/// Level of the domain: a top-level domain (`pls`) is 0, a domain (`foo.pls`)
/// is 1, a subdomain (`bar.foo.pls`) is 2 and so on.
pub fn domain_level(name: &str) -> usize {
    name.matches('.').count()
}

/// Turns a domain into normal form: lowercase and UTS-46 mapped to unicode.
/// Underscores and other non-STD3 characters are allowed.
pub fn normalise_domain(domain: &str) -> Result<String, DomainError> {
    normalise(domain, false)
}

/// Like [`normalise_domain`] but applying strict DNS rules (e.g. no underscores).
pub fn normalise_domain_strict(domain: &str) -> Result<String, DomainError> {
    normalise(domain, true)
}

fn normalise(domain: &str, strict: bool) -> Result<String, DomainError> {
    let (wildcard, domain) = match domain.strip_prefix(WILDCARD_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, domain),
    };

    let (mut output, result) = Config::default()
        .use_std3_ascii_rules(strict)
        .transitional_processing(false)
        .to_unicode(&domain.to_lowercase());
    result.map_err(|err| DomainError::Idna(err.to_string()))?;

    // mapping may drop the leading period of a rooted name
    if domain.starts_with('.') && !output.starts_with('.') {
        output.insert(0, '.');
    }
    if wildcard {
        output.insert_str(0, WILDCARD_PREFIX);
    }
    Ok(output)
}

/// Top-level domain of a name, or an empty string if the name does not normalise.
pub fn tld(domain: &str) -> String {
    let Ok(domain) = normalise_domain(domain) else {
        return String::new();
    };
    domain_part(&domain, -1).unwrap_or(domain)
}

/// Removes everything up to and including the first period.
///
/// `pls` gives ``, `foo.pls` gives `pls` and `bar.foo.pls` gives `foo.pls`.
pub fn domain(domain: &str) -> &str {
    domain
        .split_once('.')
        .map(|(_, parent)| parent)
        .unwrap_or_default()
}

/// Obtains one label of a name.
///
/// Positive parts count from the lowest level towards the top-level domain,
/// negative parts from the top-level domain downwards. For `bar.foo.com`:
///
/// | part | label |
/// |------|-------|
/// |    1 | bar   |
/// |    2 | foo   |
/// |    3 | com   |
/// |   -1 | com   |
/// |   -2 | foo   |
/// |   -3 | bar   |
pub fn domain_part(domain: &str, part: i32) -> Result<String, DomainError> {
    if part == 0 {
        return Err(DomainError::InvalidPart);
    }
    let domain = normalise_domain(domain)?;
    let parts: Vec<&str> = domain.split('.').collect();
    let wanted = part.unsigned_abs() as usize;
    if parts.len() < wanted {
        return Err(DomainError::NotEnoughParts {
            domain: domain.clone(),
            part,
        });
    }
    let index = if part < 0 {
        parts.len() - wanted
    } else {
        wanted - 1
    };
    Ok(parts[index].to_string())
}

/// Strips `root` from the domain, failing unless what remains is a single label.
pub fn unqualified_name<'a>(domain: &'a str, root: &str) -> Result<&'a str, DomainError> {
    let suffix = format!(".{root}");
    let name = domain.strip_suffix(suffix.as_str()).unwrap_or(domain);
    if name.contains('.') {
        return Err(DomainError::NotDirectChild {
            domain: domain.to_string(),
            root: root.to_string(),
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pls", 0)]
    #[case("foo.pls", 1)]
    #[case("bar.foo.pls", 2)]
    #[case("", 0)]
    #[case(".pls", 1)]
    fn levels(#[case] name: &str, #[case] expected: usize) {
        assert_eq!(domain_level(name), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case(".", ".")]
    #[case("pls", "pls")]
    #[case("PLS", "pls")]
    #[case(".pls", ".pls")]
    #[case(".pls.", ".pls.")]
    #[case("wealdtech.pls", "wealdtech.pls")]
    #[case(".wealdtech.pls", ".wealdtech.pls")]
    #[case("subdomain.wealdtech.pls", "subdomain.wealdtech.pls")]
    #[case("*.wealdtech.pls", "*.wealdtech.pls")]
    #[case("omg.thetoken.pls", "omg.thetoken.pls")]
    #[case("點看.pls", "點看.pls")]
    fn normalises(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalise_domain(input).unwrap(), expected);
        assert_eq!(normalise_domain_strict(input).unwrap(), expected);
    }

    #[test]
    fn underscore_only_allowed_leniently() {
        assert_eq!(
            normalise_domain("_underscore.thetoken.pls").unwrap(),
            "_underscore.thetoken.pls"
        );
        assert!(matches!(
            normalise_domain_strict("_underscore.thetoken.pls"),
            Err(DomainError::Idna(_))
        ));
    }

    #[rstest]
    #[case("", "")]
    #[case(".", "")]
    #[case("pls", "pls")]
    #[case("PLS", "pls")]
    #[case(".pls", "pls")]
    #[case("wealdtech.pls", "pls")]
    #[case(".wealdtech.pls", "pls")]
    #[case("subdomain.wealdtech.pls", "pls")]
    fn tlds(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(tld(input), expected);
    }

    #[rstest]
    #[case("pls", "")]
    #[case("foo.pls", "pls")]
    #[case("bar.foo.pls", "foo.pls")]
    #[case(".pls", "pls")]
    fn parent_domains(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(domain(input), expected);
    }

    #[rstest]
    #[case("", 1, Some(""))]
    #[case("", 2, None)]
    #[case("", -1, Some(""))]
    #[case("", -2, None)]
    #[case(".", 1, Some(""))]
    #[case(".", 2, Some(""))]
    #[case(".", 3, None)]
    #[case(".", -1, Some(""))]
    #[case(".", -2, Some(""))]
    #[case(".", -3, None)]
    #[case("PLS", 1, Some("pls"))]
    #[case("PLS", 2, None)]
    #[case("PLS", -1, Some("pls"))]
    #[case("PLS", -2, None)]
    #[case(".PLS", 1, Some(""))]
    #[case(".PLS", 2, Some("pls"))]
    #[case(".PLS", 3, None)]
    #[case(".PLS", -1, Some("pls"))]
    #[case(".PLS", -2, Some(""))]
    #[case(".PLS", -3, None)]
    #[case(".wealdtech.pls", 1, Some(""))]
    #[case(".wealdtech.pls", 2, Some("wealdtech"))]
    #[case(".wealdtech.pls", 3, Some("pls"))]
    #[case(".wealdtech.pls", 4, None)]
    #[case(".wealdtech.pls", -1, Some("pls"))]
    #[case(".wealdtech.pls", -2, Some("wealdtech"))]
    #[case(".wealdtech.pls", -3, Some(""))]
    #[case(".wealdtech.pls", -4, None)]
    #[case("subdomain.wealdtech.pls", 1, Some("subdomain"))]
    #[case("subdomain.wealdtech.pls", 2, Some("wealdtech"))]
    #[case("subdomain.wealdtech.pls", 3, Some("pls"))]
    #[case("subdomain.wealdtech.pls", 4, None)]
    #[case("subdomain.wealdtech.pls", -1, Some("pls"))]
    #[case("subdomain.wealdtech.pls", -2, Some("wealdtech"))]
    #[case("subdomain.wealdtech.pls", -3, Some("subdomain"))]
    #[case("subdomain.wealdtech.pls", -4, None)]
    #[case("a.b.c", 1, Some("a"))]
    #[case("a.b.c", 3, Some("c"))]
    #[case("a.b.c", -3, Some("a"))]
    #[case("a.b.c", -4, None)]
    fn parts(#[case] input: &str, #[case] part: i32, #[case] expected: Option<&str>) {
        let result = domain_part(input, part);
        match expected {
            Some(label) => assert_eq!(result.unwrap(), label),
            None => assert!(
                matches!(result, Err(DomainError::NotEnoughParts { .. })),
                "{input}, {part}: expected an error, got {result:?}"
            ),
        }
    }

    #[test]
    fn part_zero_is_invalid() {
        assert_eq!(domain_part("foo.pls", 0), Err(DomainError::InvalidPart));
    }

    #[rstest]
    #[case("", "", "")]
    #[case("wealdtech.pls", "pls", "wealdtech")]
    #[case("wealdtech", "pls", "wealdtech")]
    fn unqualified_names(#[case] domain: &str, #[case] root: &str, #[case] expected: &str) {
        assert_eq!(unqualified_name(domain, root).unwrap(), expected);
    }

    #[test]
    fn unqualified_name_rejects_grandchildren() {
        assert_eq!(
            unqualified_name("sub.wealdtech.pls", "pls").unwrap_err().to_string(),
            "sub.wealdtech.pls not a direct child of pls"
        );
    }
}
