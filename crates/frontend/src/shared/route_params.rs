//! Numeric ids taken from the current route

use leptos::prelude::*;
use leptos_router::params::ParamsMap;

/// Parse an id segment; ids start at 1
pub fn parse_id(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|id| *id > 0)
}

/// Id param that follows navigation between records on the same route.
///
/// Only changes when the id itself changes, so views keyed on it are rebuilt
/// once per record and not on unrelated param updates.
pub fn route_id(params: Memo<ParamsMap>, key: &'static str) -> Memo<Option<u64>> {
    Memo::new(move |_| params.with(|p| parse_id(p.get_str(key))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("42")), Some(42));
        assert_eq!(parse_id(Some(" 7 ")), Some(7));
        assert_eq!(parse_id(Some("0")), None);
        assert_eq!(parse_id(Some("abc")), None);
        assert_eq!(parse_id(None), None);
    }

    #[test]
    fn test_route_id_follows_navigation() {
        let owner = Owner::new();
        owner.set();

        let raw = RwSignal::new(ParamsMap::new());
        raw.update(|p| p.replace("id", "1".to_string()));
        let params = Memo::new(move |_| raw.get());
        let id = route_id(params, "id");
        assert_eq!(id.get_untracked(), Some(1));

        raw.update(|p| p.replace("id", "2".to_string()));
        assert_eq!(id.get_untracked(), Some(2));

        raw.update(|p| p.replace("id", "oops".to_string()));
        assert_eq!(id.get_untracked(), None);
    }
}
