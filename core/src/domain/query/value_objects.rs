use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parameter names with special meaning; everything else in the query
/// string is a candidate field filter.
pub const RESERVED_PARAMS: [&str; 5] = ["page", "sort", "limit", "fields", "search"];

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 100;

/// Raw query-string parameters, verbatim from the HTTP layer. Repeated
/// keys are last-wins, matching the urlencoded extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery(BTreeMap<String, String>);

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Seeds a parameter only when the caller did not supply it. Used by
    /// route aliases such as top-5-cheap.
    pub fn set_default(&mut self, key: &str, value: &str) {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries left after stripping the reserved parameter names.
    pub fn filter_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(key, _)| !RESERVED_PARAMS.contains(key))
    }
}

impl FromIterator<(String, String)> for RawQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Comparison operator recognized in the bracket position of a filter key
/// (`price[gte]=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Gte,
    Gt,
    Lte,
    Lt,
}

impl FilterOperator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "gte" => Some(FilterOperator::Gte),
            "gt" => Some(FilterOperator::Gt),
            "lte" => Some(FilterOperator::Lte),
            "lt" => Some(FilterOperator::Lt),
            _ => None,
        }
    }
}

/// Splits a filter key into field name and operator. Operators are only
/// recognized in operator position; an unknown bracket token leaves the
/// key untouched so it round-trips to the query engine verbatim.
pub fn parse_filter_key(key: &str) -> (&str, FilterOperator) {
    if let Some(open) = key.find('[')
        && key.ends_with(']')
        && let Some(op) = FilterOperator::from_token(&key[open + 1..key.len() - 1])
    {
        return (&key[..open], op);
    }
    (key, FilterOperator::Eq)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parses a sort list like `price,-ratings_average`. Listed order is
    /// tie-break priority, first key highest.
    pub fn parse_list(raw: &str) -> Vec<SortSpec> {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty() && *part != "-")
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect()
    }
}

/// Page/limit with the documented fallbacks: non-numeric, missing or
/// non-positive values fall back to page=1, limit=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page: u64,
    pub limit: u64,
}

impl PageSpec {
    pub fn from_params(params: &RawQuery) -> Self {
        Self {
            page: parse_positive(params.get("page")).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(params.get("limit")).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// `(page - 1) * limit`, saturating so absurd caller-supplied pages
    /// cannot overflow.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&v| v > 0)
}

/// Splits a comma-separated projection list.
pub fn parse_field_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> RawQuery {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn filter_entries_strip_reserved_names() {
        let params = query(&[
            ("difficulty", "easy"),
            ("page", "2"),
            ("sort", "-price"),
            ("limit", "5"),
            ("fields", "name"),
            ("search", "camp"),
        ]);
        let entries: Vec<_> = params.filter_entries().collect();
        assert_eq!(entries, vec![("difficulty", "easy")]);
    }

    #[test]
    fn filter_key_without_brackets_is_equality() {
        assert_eq!(parse_filter_key("difficulty"), ("difficulty", FilterOperator::Eq));
    }

    #[test]
    fn filter_key_with_operator_suffix() {
        assert_eq!(parse_filter_key("price[gte]"), ("price", FilterOperator::Gte));
        assert_eq!(parse_filter_key("duration[lt]"), ("duration", FilterOperator::Lt));
    }

    #[test]
    fn unknown_operator_token_passes_through_unchanged() {
        assert_eq!(parse_filter_key("price[foo]"), ("price[foo]", FilterOperator::Eq));
    }

    #[test]
    fn field_literally_named_gte_is_plain_equality() {
        // operators are only recognized in operator position
        assert_eq!(parse_filter_key("gte"), ("gte", FilterOperator::Eq));
    }

    #[test]
    fn sort_list_orders_and_directions() {
        let specs = SortSpec::parse_list("price,-ratings_average");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].field, "price");
        assert_eq!(specs[0].direction, SortDirection::Asc);
        assert_eq!(specs[1].field, "ratings_average");
        assert_eq!(specs[1].direction, SortDirection::Desc);
    }

    #[test]
    fn sort_list_skips_empty_segments() {
        let specs = SortSpec::parse_list("price,,-");
        assert_eq!(specs.len(), 1);
    }

    #[test]
    fn page_spec_parses_explicit_values() {
        let spec = PageSpec::from_params(&query(&[("page", "2"), ("limit", "10")]));
        assert_eq!(spec.page, 2);
        assert_eq!(spec.limit, 10);
        assert_eq!(spec.skip(), 10);
    }

    #[test]
    fn page_spec_falls_back_on_garbage() {
        let spec = PageSpec::from_params(&query(&[("page", "abc"), ("limit", "-3")]));
        assert_eq!(spec.page, DEFAULT_PAGE);
        assert_eq!(spec.limit, DEFAULT_LIMIT);
        assert_eq!(spec.skip(), 0);
    }

    #[test]
    fn page_spec_skip_saturates_instead_of_overflowing() {
        let spec = PageSpec::from_params(&query(&[
            ("page", "18446744073709551615"),
            ("limit", "100"),
        ]));
        assert_eq!(spec.skip(), u64::MAX);
    }

    #[test]
    fn page_spec_treats_zero_as_absent() {
        let spec = PageSpec::from_params(&query(&[("page", "0"), ("limit", "0")]));
        assert_eq!(spec.page, 1);
        assert_eq!(spec.limit, 100);
    }

    #[test]
    fn set_default_does_not_override_caller_values() {
        let mut params = query(&[("limit", "20")]);
        params.set_default("limit", "5");
        params.set_default("sort", "price");
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("sort"), Some("price"));
    }

    #[test]
    fn field_list_trims_and_drops_empties() {
        assert_eq!(parse_field_list("name, price,,summary"), vec!["name", "price", "summary"]);
    }
}
