// ============================================================================
// ROUTER - Hash based page routing (#/, #/map-view, #/loyalty)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    RouteMap,
    Loyalty,
}

impl Page {
    pub const NAV: [Page; 3] = [Page::Home, Page::RouteMap, Page::Loyalty];

    /// Unknown hashes fall back to Home
    pub fn from_hash(hash: &str) -> Page {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        match path {
            "/map-view" => Page::RouteMap,
            "/loyalty" => Page::Loyalty,
            _ => Page::Home,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::RouteMap => "#/map-view",
            Page::Loyalty => "#/loyalty",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::RouteMap => "Route MapView",
            Page::Loyalty => "Loyalty Program",
        }
    }
}

/// Page for the current `location.hash`
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_hashes() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash("#/map-view"), Page::RouteMap);
        assert_eq!(Page::from_hash("#/map-view/"), Page::RouteMap);
        assert_eq!(Page::from_hash("#/loyalty"), Page::Loyalty);
        assert_eq!(Page::from_hash("#/nope"), Page::Home);
    }

    #[test]
    fn hash_round_trips() {
        for page in Page::NAV {
            assert_eq!(Page::from_hash(page.hash()), page);
        }
    }
}
