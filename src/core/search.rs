use crate::models::ServiceItem;

/// Query tokens that mark a car-related query. A token matches when it
/// *contains* one of these, so "tesli" (an inflected form) does not trigger
/// the rule while "tesla" does.
pub const VEHICLE_QUERY_KEYWORDS: [&str; 7] = [
    "auto",
    "samochod",
    "samochód",
    "tesla",
    "pojazd",
    "pojazdów",
    "pojazdow",
];

/// Substrings that must appear in a service's category/tag text for the
/// service to survive the vehicle override
pub const VEHICLE_SERVICE_MARKERS: [&str; 3] = ["auto", "samoch", "pojazd"];

/// Split a query into lowercased whitespace tokens
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether the tokens look like a car/vehicle query
#[inline]
pub fn is_vehicle_query(tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|t| VEHICLE_QUERY_KEYWORDS.iter().any(|k| t.contains(k)))
}

/// Whether a service passes the vehicle override (category/tags mention cars)
#[inline]
pub fn is_vehicle_service(service: &ServiceItem) -> bool {
    let haystack = service.vehicle_text();
    VEHICLE_SERVICE_MARKERS.iter().any(|m| haystack.contains(m))
}

/// Merge the AI id ranking with the local catalog, or fall back to
/// substring search.
///
/// - Empty query: the full catalog, untouched.
/// - `ai_ids` present and non-empty: catalog entries reconstructed in the
///   model's order (ids unknown to the catalog are silently dropped), then
///   restricted to vehicle services when the query is car-related. The
///   override enforces the same car/bicycle disjointness the model is
///   instructed to apply, as a backstop against model mistakes.
/// - Otherwise: every service whose name/description/category/tags contain
///   at least one query token.
pub fn filter_services<'a>(
    catalog: &'a [ServiceItem],
    query: &str,
    ai_ids: Option<&[u64]>,
) -> Vec<&'a ServiceItem> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return catalog.iter().collect();
    }

    if let Some(ids) = ai_ids {
        if !ids.is_empty() {
            let mut base: Vec<&ServiceItem> = ids
                .iter()
                .filter_map(|id| catalog.iter().find(|s| s.id == *id))
                .collect();

            if is_vehicle_query(&tokens) {
                base.retain(|service| is_vehicle_service(service));
            }

            return base;
        }
    }

    catalog
        .iter()
        .filter(|service| {
            let haystack = service.search_text();
            tokens.iter().any(|token| haystack.contains(token.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: u64, name: &str, category: &str, tags: &[&str]) -> ServiceItem {
        ServiceItem {
            id,
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn catalog() -> Vec<ServiceItem> {
        vec![
            service(1, "Serwis Rowerowy Szprycha", "rowery, serwis", &["rower", "naprawa roweru"]),
            service(
                3,
                "Punkt ładowania Manufaktura",
                "ładowanie aut elektrycznych, stacja ładowania",
                &["ładowanie tesli", "ładowanie samochodu"],
            ),
            service(4, "Warsztat EcoMechanik", "mechanik, samochody ekologiczne", &["serwis auta"]),
            service(6, "Biblioteka Miejska", "biblioteka, edukacja, kultura", &["książki"]),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = catalog();
        let result = filter_services(&catalog, "   ", None);
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_fallback_matches_any_token() {
        let catalog = catalog();
        let result = filter_services(&catalog, "książki albo rower", None);

        let ids: Vec<u64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 6]);
    }

    #[test]
    fn test_fallback_is_case_insensitive() {
        let catalog = catalog();
        let result = filter_services(&catalog, "BIBLIOTEKA", None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 6);
    }

    #[test]
    fn test_ai_path_preserves_model_order() {
        let catalog = catalog();
        let result = filter_services(&catalog, "coś na wieczór", Some(&[6, 1, 3]));

        let ids: Vec<u64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![6, 1, 3]);
    }

    #[test]
    fn test_foreign_ids_are_dropped_silently() {
        let catalog = catalog();
        let result = filter_services(&catalog, "coś na wieczór", Some(&[99, 6, 42, 1]));

        let ids: Vec<u64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![6, 1]);
    }

    #[test]
    fn test_empty_ai_result_falls_back_to_substring_search() {
        let catalog = catalog();
        let result = filter_services(&catalog, "rower", Some(&[]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_vehicle_override_drops_bicycle_services() {
        let catalog = catalog();
        // Model (wrongly) ranked the bicycle repair shop for a Tesla query.
        let result = filter_services(&catalog, "naprawa tesla", Some(&[1, 3, 4]));

        let ids: Vec<u64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_inflected_tesli_does_not_trigger_override() {
        // "tesli" does not contain "tesla", so the token check must not
        // fire and the AI ordering passes through untouched.
        let tokens = query_tokens("naprawa tesli");
        assert!(!is_vehicle_query(&tokens));

        let catalog = catalog();
        let result = filter_services(&catalog, "naprawa tesli", Some(&[1, 3]));
        let ids: Vec<u64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_override_triggers_on_every_keyword() {
        for keyword in VEHICLE_QUERY_KEYWORDS {
            let tokens = query_tokens(&format!("naprawa {keyword}"));
            assert!(is_vehicle_query(&tokens), "keyword {keyword} did not trigger");
        }
    }

    #[test]
    fn test_override_matches_keyword_inside_token() {
        // "samochodu" contains "samochod".
        let tokens = query_tokens("bateria samochodu");
        assert!(is_vehicle_query(&tokens));
    }

    #[test]
    fn test_override_applies_only_to_ai_path() {
        let catalog = catalog();
        // Fallback search for a car query may still surface the bicycle
        // shop when a token happens to match; the hard rule is an AI-path
        // backstop only.
        let result = filter_services(&catalog, "serwis auta", None);
        let ids: Vec<u64> = result.iter().map(|s| s.id).collect();
        assert!(ids.contains(&1));
        assert!(ids.contains(&4));
    }
}
