use crate::certificate::record::Certificate;
use std::collections::HashSet;

/// Keeps the certificates whose id, device id or issuer contains `query`, ignoring case.
pub fn search<'a>(certificates: &'a [Certificate], query: &str) -> Vec<&'a Certificate> {
    let query = query.to_lowercase();

    certificates
        .iter()
        .filter(|certificate| {
            let fields = certificate.resolve();
            [fields.id, fields.device_id, fields.issuer]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

pub fn unique_device_count(certificates: &[Certificate]) -> usize {
    certificates.iter().map(Certificate::device_id).collect::<HashSet<_>>().len()
}

/// The most recently created certificate. A record only stays ahead when it is strictly newer,
/// so ties and unreadable timestamps go to the later record.
pub fn latest(certificates: &[Certificate]) -> Option<&Certificate> {
    certificates.iter().reduce(|previous, current| {
        match (previous.created_at_timestamp(), current.created_at_timestamp()) {
            (Some(previous_at), Some(current_at)) if previous_at > current_at => previous,
            _ => current,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn certificates() -> Vec<Certificate> {
        serde_json::from_str(include_str!("../../tests/resources/mixed_certificates.json")).expect("valid fixture")
    }

    fn ids(certificates: &[&Certificate]) -> Vec<String> {
        certificates.iter().map(|c| c.certificate_id()).collect()
    }

    #[rstest]
    fn empty_query_keeps_everything_in_order(certificates: Vec<Certificate>) {
        let result = search(&certificates, "");

        assert_eq!(result.len(), certificates.len());
        assert_eq!(ids(&result), certificates.iter().map(Certificate::certificate_id).collect::<Vec<_>>());
    }

    #[rstest]
    fn search_ignores_case(certificates: Vec<Certificate>) {
        let result = search(&certificates, "wd-");

        assert_eq!(ids(&result), vec!["cert-direct-0001".to_string(), "cert-direct-0004".to_string()]);
    }

    #[rstest]
    #[case::by_id("NESTED-0002", vec!["cert-nested-0002"])]
    #[case::by_issuer("sanitize", vec!["cert-nested-0002"])]
    #[case::by_device("sn-", vec!["cert-nested-0002"])]
    #[case::default_issuer_matches_everything_without_one("unknown", vec!["cert-direct-0001", "", "cert-direct-0004"])]
    #[case::no_match("zzz", vec![])]
    fn search_matches_any_resolved_field(certificates: Vec<Certificate>, #[case] query: &str, #[case] expected: Vec<&str>) {
        let result = search(&certificates, query);

        assert_eq!(ids(&result), expected.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[rstest]
    fn counts_each_device_once(certificates: Vec<Certificate>) {
        // WD-1234 twice, SN-5678 once, and the flat record resolves to Unknown
        assert_eq!(unique_device_count(&certificates), 3);
    }

    #[test]
    fn device_count_is_case_sensitive() {
        let certificates = vec![
            Certificate::new(json!({ "device": "wd-1" })),
            Certificate::new(json!({ "device": "WD-1" })),
        ];

        assert_eq!(unique_device_count(&certificates), 2);
    }

    #[test]
    fn latest_picks_the_newest_timestamp() {
        let certificates = vec![
            Certificate::new(json!({ "certificateId": "old", "createdAt": "2024-01-01" })),
            Certificate::new(json!({ "certificateId": "new", "createdAt": "2024-06-01" })),
        ];

        assert_eq!(latest(&certificates).map(Certificate::certificate_id), Some("new".to_string()));

        let reversed = certificates.into_iter().rev().collect::<Vec<_>>();
        assert_eq!(latest(&reversed).map(Certificate::certificate_id), Some("new".to_string()));
    }

    #[rstest]
    #[case::http_dates("Mon, 01 Jan 2024 12:00:00 GMT", "Sat, 01 Jun 2024 12:00:00 GMT")]
    #[case::space_separated("2024-01-01 12:00:00", "2024-06-01 12:00:00")]
    fn latest_compares_http_and_space_separated_dates(#[case] older: &str, #[case] newer: &str) {
        let certificates = vec![
            Certificate::new(json!({ "certificateId": "new", "createdAt": newer })),
            Certificate::new(json!({ "certificateId": "old", "created_at": older })),
        ];

        assert_eq!(latest(&certificates).map(Certificate::certificate_id), Some("new".to_string()));
    }

    #[test]
    fn latest_resolves_ties_and_missing_timestamps_to_the_last_record() {
        let tied = vec![
            Certificate::new(json!({ "certificateId": "first", "createdAt": "2024-06-01" })),
            Certificate::new(json!({ "certificateId": "second", "createdAt": "2024-06-01" })),
        ];
        assert_eq!(latest(&tied).map(Certificate::certificate_id), Some("second".to_string()));

        let undated = vec![
            Certificate::new(json!({ "certificateId": "dated", "createdAt": "2024-06-01" })),
            Certificate::new(json!({ "certificateId": "undated" })),
        ];
        assert_eq!(latest(&undated).map(Certificate::certificate_id), Some("undated".to_string()));
    }

    #[test]
    fn latest_of_nothing_is_none() {
        assert_eq!(latest(&[]), None);
    }
}
