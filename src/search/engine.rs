//! Member search over an index snapshot.

use url::Url;

use crate::models::{CommitteeDetails, Member};
use crate::storage::Index;
use crate::utils::committee_url;

use super::types::SearchResult;

/// Find the committees with members matching `query`.
///
/// A member matches when any of first name, last name, party or canton
/// contains the query, ignoring case. Results keep the index order; an empty
/// query matches nothing.
pub fn search(index: &Index, query: &str, base_url: &Url) -> Vec<SearchResult> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut results = Vec::new();
    for (committee, details) in index.entries() {
        let match_count = count_matches(details, &needle);
        if match_count == 0 {
            continue;
        }

        results.push(SearchResult {
            rank: results.len() + 1,
            committee_id: committee.id,
            committee_name: committee.name.clone(),
            member_count: details.member_count(),
            match_count,
            url: committee_url(base_url, committee.id),
        });
    }

    log::debug!("query {:?} matched {} committees", query, results.len());
    results
}

/// Number of members matching `needle`, which must already be lowercase.
fn count_matches(details: &CommitteeDetails, needle: &str) -> usize {
    details
        .members
        .iter()
        .filter(|m| member_matches(m, needle))
        .count()
}

fn member_matches(member: &Member, needle: &str) -> bool {
    member
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::index::fixtures::*;

    fn base() -> Url {
        Url::parse("http://ws.parlament.ch").unwrap()
    }

    fn sample_index() -> Index {
        index_of(vec![
            (
                committee(10, "Finance"),
                vec![
                    member(1, "Anna", "Keller", "ZH", "SP"),
                    member(2, "Ben", "Frei", "BE", "FDP"),
                ],
            ),
            (
                committee(20, "Transport"),
                vec![member(3, "Carla", "Rossi", "TI", "Mitte")],
            ),
            (
                committee(30, "Health"),
                vec![
                    member(4, "Hans", "Zanoni", "GR", "SVP"),
                    member(5, "Daniel", "Brand", "SG", "SP"),
                    member(6, "Eva", "Muster", "BE", "GLP"),
                ],
            ),
        ])
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(search(&sample_index(), "", &base()).is_empty());
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let index = index_of(vec![(
            committee(1, "Finance"),
            vec![
                member(1, "Anna", "Keller", "ZH", "SP"),
                member(2, "Ben", "Frei", "BE", "FDP"),
            ],
        )]);

        let results = search(&index, "an", &base());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_count, 1);

        let upper = search(&index, "AN", &base());
        assert_eq!(upper, results);
    }

    #[test]
    fn test_member_counts_once_across_fields() {
        // "be" hits Ben's first name and his canton.
        let index = index_of(vec![(
            committee(1, "Finance"),
            vec![member(2, "Ben", "Frei", "BE", "FDP")],
        )]);

        let results = search(&index, "be", &base());
        assert_eq!(results[0].match_count, 1);
    }

    #[test]
    fn test_matches_party_and_canton() {
        let results = search(&sample_index(), "sp", &base());
        let counts: Vec<(u64, usize)> = results
            .iter()
            .map(|r| (r.committee_id, r.match_count))
            .collect();
        assert_eq!(counts, vec![(10, 1), (30, 1)]);

        let results = search(&sample_index(), "ti", &base());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].committee_id, 20);
    }

    #[test]
    fn test_results_keep_index_order_with_dense_ranks() {
        // Health matches more members but stays after Finance.
        let results = search(&sample_index(), "an", &base());

        let summary: Vec<(usize, u64, usize)> = results
            .iter()
            .map(|r| (r.rank, r.committee_id, r.match_count))
            .collect();
        assert_eq!(summary, vec![(1, 10, 1), (2, 30, 3)]);
    }

    #[test]
    fn test_result_fields() {
        let results = search(&sample_index(), "rossi", &base());

        assert_eq!(
            results,
            vec![SearchResult {
                rank: 1,
                committee_id: 20,
                committee_name: "Transport".to_string(),
                member_count: 1,
                match_count: 1,
                url: "http://ws.parlament.ch/committees/20".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(search(&sample_index(), "xyz", &base()).is_empty());
        assert!(search(&Index::empty(), "anna", &base()).is_empty());
    }
}
