//! Search Matcher — substring filtering over the career catalog.
//!
//! Inclusion/exclusion only: no relevance scoring, no fuzzy matching.
//! Matches keep their catalog order, so the result is always a
//! subsequence of the catalog.

use crate::catalog::{Catalog, CareerProfile};

/// Filters the catalog against a free-text query.
///
/// An empty (after trimming) query returns the whole catalog in order.
/// Otherwise the query is trimmed and lowercased, and a profile matches
/// when ANY of its searchable fields — title, description, space-joined
/// skills, space-joined tags — contains the query as a substring.
///
/// Each field is tested on its own rather than searching one concatenated
/// string, so a query can never match across a field boundary.
pub fn matching_profiles<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a CareerProfile> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return catalog.profiles.iter().collect();
    }

    catalog
        .profiles
        .iter()
        .filter(|profile| profile_matches(profile, &normalized))
        .collect()
}

/// Case-insensitive per-field substring predicate. `needle` must already be
/// trimmed and lowercased.
fn profile_matches(profile: &CareerProfile, needle: &str) -> bool {
    if profile.title.to_lowercase().contains(needle)
        || profile.description.to_lowercase().contains(needle)
    {
        return true;
    }
    profile.skills.join(" ").to_lowercase().contains(needle)
        || profile.tags.join(" ").to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(id: &str, title: &str, skills: &[&str], tags: &[&str]) -> CareerProfile {
        CareerProfile {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} day-to-day work"),
            salary_range: "$50,000 – $90,000".to_string(),
            education: "Varies".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn make_catalog() -> Catalog {
        Catalog {
            profiles: vec![
                make_profile("p1", "Data Scientist", &["Python", "SQL"], &["analytical"]),
                make_profile("p2", "UX Designer", &["Figma"], &["creative"]),
                make_profile("p3", "Nurse Practitioner", &["Care planning"], &["people"]),
            ],
            questions: vec![],
        }
    }

    #[test]
    fn test_empty_query_returns_catalog_in_order() {
        let catalog = make_catalog();
        let matches = matching_profiles(&catalog, "");
        let ids: Vec<_> = matches.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_whitespace_only_query_is_treated_as_empty() {
        let catalog = make_catalog();
        assert_eq!(matching_profiles(&catalog, "   ").len(), 3);
    }

    #[test]
    fn test_match_is_case_insensitive_and_trimmed() {
        let catalog = make_catalog();
        let matches = matching_profiles(&catalog, "  DATA ");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "p1");
    }

    #[test]
    fn test_skills_and_tags_are_searchable() {
        let catalog = make_catalog();
        assert_eq!(matching_profiles(&catalog, "figma")[0].id, "p2");
        assert_eq!(matching_profiles(&catalog, "people")[0].id, "p3");
    }

    #[test]
    fn test_matches_preserve_catalog_order() {
        let catalog = Catalog {
            profiles: vec![
                make_profile("a", "Designer", &[], &[]),
                make_profile("b", "Engineer", &[], &[]),
                make_profile("c", "Sound Designer", &[], &[]),
            ],
            questions: vec![],
        };
        let ids: Vec<_> = matching_profiles(&catalog, "designer")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_no_cross_field_boundary_match() {
        // "Scientist Python" spans title and skills; a concatenated haystack
        // would match it, the per-field predicate must not.
        let catalog = make_catalog();
        assert!(matching_profiles(&catalog, "Scientist Python").is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let catalog = Catalog {
            profiles: vec![],
            questions: vec![],
        };
        assert!(matching_profiles(&catalog, "anything").is_empty());
        assert!(matching_profiles(&catalog, "").is_empty());
    }

    #[test]
    fn test_result_is_subset_of_catalog() {
        let catalog = make_catalog();
        for query in ["", "a", "designer", "zzz", "PEOPLE"] {
            let matches = matching_profiles(&catalog, query);
            assert!(matches.len() <= catalog.profiles.len());
            for m in matches {
                assert!(catalog.profiles.iter().any(|p| p.id == m.id));
            }
        }
    }
}
