//! Fixed list of popular cities and the substring suggestion filter.

/// Cities offered as suggestions while the user types. Order is significant:
/// matches are returned in this order, unranked.
pub const POPULAR_CITIES: [&str; 10] = [
    "Москва",
    "Санкт-Петербург",
    "Новосибирск",
    "Екатеринбург",
    "Казань",
    "Нижний Новгород",
    "Челябинск",
    "Самара",
    "Уфа",
    "Ростов-на-Дону",
];

/// Case-insensitive substring filter over [`POPULAR_CITIES`].
///
/// A blank query matches nothing. The query is matched untrimmed, so stray
/// leading or trailing spaces suppress all suggestions.
pub fn matching(query: &str) -> Vec<&'static str> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    POPULAR_CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_nothing() {
        assert!(matching("").is_empty());
    }

    #[test]
    fn whitespace_query_matches_nothing() {
        assert!(matching("   ").is_empty());
    }

    #[test]
    fn inner_substring_of_every_known_city_matches_it() {
        for city in POPULAR_CITIES {
            let chars: Vec<char> = city.chars().collect();
            let inner: String = chars[1..chars.len() - 1].iter().collect();

            assert!(
                matching(&inner).contains(&city),
                "{inner:?} should surface {city:?}"
            );
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(matching("москва"), ["Москва"]);
        assert_eq!(matching("МОСКВА"), ["Москва"]);
        assert_eq!(matching("пЕтЕрБуРг"), ["Санкт-Петербург"]);
    }

    #[test]
    fn matches_keep_list_order() {
        assert_eq!(matching("са"), ["Санкт-Петербург", "Самара"]);
    }

    #[test]
    fn unknown_query_matches_nothing() {
        assert!(matching("Zzzzz").is_empty());
    }

    #[test]
    fn query_is_matched_untrimmed() {
        assert!(matching(" Москва").is_empty());
    }
}
