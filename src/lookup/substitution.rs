use std::collections::BTreeMap;

/// Placeholder values applied to a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Substitution {
    /// Return the stored value unchanged.
    #[default]
    None,
    /// Replace `{name}` with the value stored under `name`.
    Named(BTreeMap<String, String>),
    /// Replace `{0}`, `{1}`, ... with the value at that index.
    Positional(Vec<String>),
}

impl Substitution {
    pub fn named<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn positional<V: Into<String>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Fills the placeholders of `template`.
    ///
    /// Placeholders without a value are left verbatim. Inserted values are
    /// not scanned again.
    pub fn apply(&self, template: &str) -> String {
        match self {
            Self::None => template.to_string(),
            Self::Named(values) => fill(template, |name| values.get(name).map(String::as_str)),
            Self::Positional(values) => fill(template, |name| {
                positional_index(name)
                    .and_then(|i| values.get(i))
                    .map(String::as_str)
            }),
        }
    }
}

/// Parses `0`, `1`, `12`, ... but not `+1`, `01` or the empty string.
fn positional_index(name: &str) -> Option<usize> {
    let canonical = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'));
    if canonical { name.parse().ok() } else { None }
}

fn fill<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after
            .find('}')
            .and_then(|close| lookup(&after[..close]).map(|value| (close, value)));

        match replacement {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_returns_template() {
        assert_eq!(Substitution::None.apply("Hi {name}"), "Hi {name}");
    }

    #[test]
    fn test_named() {
        let subst = Substitution::named([("name", "Ann")]);
        assert_eq!(subst.apply("Hi {name}"), "Hi Ann");
    }

    #[test]
    fn test_named_repeated_and_multiple() {
        let subst = Substitution::named([("a", "1"), ("b", "2")]);
        assert_eq!(subst.apply("{a}+{a}={b}"), "1+1=2");
    }

    #[test]
    fn test_named_unmatched_left_verbatim() {
        let subst = Substitution::named([("name", "Ann")]);
        assert_eq!(subst.apply("Hi {name}, {missing}!"), "Hi Ann, {missing}!");
        assert_eq!(subst.apply("unclosed {name"), "unclosed {name");
        assert_eq!(subst.apply("{{name}}"), "{Ann}");
    }

    #[test]
    fn test_named_values_not_rescanned() {
        let subst = Substitution::named([("a", "{b}"), ("b", "x")]);
        assert_eq!(subst.apply("{a} {b}"), "{b} x");
    }

    #[test]
    fn test_positional() {
        assert_eq!(Substitution::positional(["Ann"]).apply("Hi {0}"), "Hi Ann");
        assert_eq!(
            Substitution::positional(["a", "b"]).apply("{1} then {0}"),
            "b then a"
        );
    }

    #[test]
    fn test_positional_out_of_range_or_odd_index() {
        let subst = Substitution::positional(["a"]);
        assert_eq!(subst.apply("{0} {1}"), "a {1}");
        assert_eq!(subst.apply("{+0} {00} {}"), "{+0} {00} {}");
        assert_eq!(subst.apply("{name}"), "{name}");
    }

    #[test]
    fn test_unicode_template() {
        let subst = Substitution::named([("名前", "アン")]);
        assert_eq!(subst.apply("こんにちは、{名前}さん"), "こんにちは、アンさん");
    }
}
