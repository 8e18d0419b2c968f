//! Shareable links: assumption sets encoded as URL query parameters
//!
//! Each field travels under its own key (`pSEO_pages=500&avg_msv=50&...`).
//! Decoding is lenient: unknown keys are ignored and unparsable values read
//! as 0. When a key repeats, the first occurrence wins.

use std::collections::HashSet;

use url::{form_urlencoded, Url};

use crate::inputs::{parse_param, InputField, SimulationInputs};

/// Encode every field, in form order
pub fn to_query_string(inputs: &SimulationInputs) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for field in InputField::ALL.iter() {
        serializer.append_pair(field.key(), &inputs.get(*field).to_string());
    }
    serializer.finish()
}

/// Link to `base` (its own query and fragment dropped) carrying the inputs
pub fn share_url(base: &str, inputs: &SimulationInputs) -> String {
    let query = to_query_string(inputs);

    match Url::parse(base) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.set_query(Some(&query));
            url.into()
        }
        // Relative bases such as "/planner" are not URLs on their own
        Err(_) => {
            let end = base.find(['?', '#']).unwrap_or(base.len());
            format!("{}?{}", &base[..end], query)
        }
    }
}

/// Overlay fields found in `query` onto `inputs`.
///
/// Accepts a bare query string, one with a leading `?`, or an absolute URL.
/// Values may themselves hold URLs (`ref=https://...&cltv=900`).
/// Returns the number of fields that were set.
pub fn apply_query(inputs: &mut SimulationInputs, query: &str) -> usize {
    let query = query.trim();
    let url = Url::parse(query).ok();
    let query = match &url {
        Some(url) => url.query().unwrap_or(""),
        None => query.strip_prefix('?').unwrap_or(query),
    };

    let mut seen = HashSet::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let Ok(field) = key.parse::<InputField>() else {
            log::debug!("Ignoring unknown query parameter {:?}", key);
            continue;
        };
        if !seen.insert(field) {
            continue;
        }

        inputs.set(field, parse_param(&value));
    }

    seen.len()
}

/// Defaults overlaid with whatever the query carries
pub fn from_query(query: &str) -> SimulationInputs {
    let mut inputs = SimulationInputs::default();
    apply_query(&mut inputs, query);
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_string() {
        assert_eq!(
            to_query_string(&SimulationInputs::default()),
            "pSEO_pages=500&avg_msv=50&avg_ctr=3&traffic_cr=2&lead_cr=10\
             &cltv=1500&ramp_up=6&monthly_expense=2000"
        );
    }

    #[test]
    fn test_fractional_and_negative_values() {
        let inputs = SimulationInputs {
            avg_ctr: 2.5,
            monthly_expense: -100.0,
            ..Default::default()
        };
        let query = to_query_string(&inputs);
        assert!(query.contains("avg_ctr=2.5"));
        assert!(query.contains("monthly_expense=-100"));
        assert_eq!(from_query(&query), inputs);
    }

    #[test]
    fn test_share_url_replaces_existing_query() {
        let url = share_url("https://example.com/planner?old=1#top", &SimulationInputs::default());
        assert!(url.starts_with("https://example.com/planner?pSEO_pages=500&"));
        assert!(!url.contains("old=1"));
        assert!(!url.contains('#'));
    }

    #[test]
    fn test_apply_query_accepts_urls_and_bare_queries() {
        let mut inputs = SimulationInputs::default();
        let set = apply_query(&mut inputs, "https://example.com/?cltv=900&ramp_up=3#x");
        assert_eq!(set, 2);
        assert_eq!(inputs.cltv, 900.0);
        assert_eq!(inputs.ramp_up, 3.0);

        let mut inputs = SimulationInputs::default();
        assert_eq!(apply_query(&mut inputs, "?avg_msv=75"), 1);
        assert_eq!(inputs.avg_msv, 75.0);

        let mut inputs = SimulationInputs::default();
        assert_eq!(apply_query(&mut inputs, "https://example.com/planner"), 0);
        assert_eq!(inputs, SimulationInputs::default());
    }

    #[test]
    fn test_unparsable_values_become_zero() {
        let inputs = from_query("pSEO_pages=lots&avg_msv=&lead_cr");
        assert_eq!(inputs.pseo_pages, 0.0);
        assert_eq!(inputs.avg_msv, 0.0);
        assert_eq!(inputs.lead_cr, 0.0);
        assert_eq!(inputs.cltv, 1500.0);
    }

    #[test]
    fn test_unknown_keys_ignored_and_first_value_wins() {
        let mut inputs = SimulationInputs::default();
        let set = apply_query(&mut inputs, "utm_source=mail&cltv=100&cltv=200");
        assert_eq!(set, 1);
        assert_eq!(inputs.cltv, 100.0);
    }

    #[test]
    fn test_percent_encoded_values_are_decoded() {
        let inputs = from_query("monthly_expense=2%2E5&avg_ctr=+4&p%53EO_pages=80");
        assert_eq!(inputs.monthly_expense, 2.5);
        assert_eq!(inputs.avg_ctr, 4.0);
        assert_eq!(inputs.pseo_pages, 80.0);
    }

    #[test]
    fn test_url_valued_parameter_does_not_hide_fields() {
        let mut inputs = SimulationInputs::default();
        let set = apply_query(&mut inputs, "ref=https://partner.example.com&cltv=900");
        assert_eq!(set, 1);
        assert_eq!(inputs.cltv, 900.0);

        let inputs = from_query("?back=http://a.example.com/x?y=1&ramp_up=4");
        assert_eq!(inputs.ramp_up, 4.0);
    }

    #[test]
    fn test_query_values_stop_at_comma() {
        let inputs = from_query("pSEO_pages=1,500&monthly_expense=2%2C500");
        assert_eq!(inputs.pseo_pages, 1.0);
        assert_eq!(inputs.monthly_expense, 2.0);
    }

    #[test]
    fn test_share_url_with_relative_base() {
        let url = share_url("/planner#top", &SimulationInputs::default());
        assert!(url.starts_with("/planner?pSEO_pages=500&avg_msv=50&"));
    }
}
