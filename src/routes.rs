use crate::models_api::views::NavEntry;

/// The resolved view for a request path, with any captured path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Fixtures,
    FixtureDetail(String),
    Table,
    Players { query: Option<String> },
    PlayerDetail(String),
    MatchDetail(String),
    News,
    NotFound,
}

#[derive(Debug, Clone, Copy)]
enum Page {
    Home,
    Fixtures,
    FixtureDetail,
    Table,
    Players,
    PlayerDetail,
    MatchDetail,
    News,
}

// Matched in order, first hit wins. `:`-prefixed segments capture.
const ROUTES: [(&str, Page); 8] = [
    ("/", Page::Home),
    ("/fixtures", Page::Fixtures),
    ("/fixture/:id", Page::FixtureDetail),
    ("/table", Page::Table),
    ("/players", Page::Players),
    ("/player/:id", Page::PlayerDetail),
    ("/match/:id", Page::MatchDetail),
    ("/news", Page::News),
];

const NAV_LINKS: [(&str, &str); 4] = [
    ("Fixtures", "/fixtures"),
    ("Table", "/table"),
    ("Players", "/players"),
    ("News", "/news"),
];

pub fn resolve(path: &str, query: Option<&str>) -> View {
    for (pattern, page) in ROUTES {
        if let Some(param) = match_pattern(pattern, path) {
            let param = param.unwrap_or_default();
            return match page {
                Page::Home => View::Home,
                Page::Fixtures => View::Fixtures,
                Page::FixtureDetail => View::FixtureDetail(param),
                Page::Table => View::Table,
                Page::Players => View::Players { query: query_param(query, "q") },
                Page::PlayerDetail => View::PlayerDetail(param),
                Page::MatchDetail => View::MatchDetail(param),
                Page::News => View::News,
            };
        }
    }
    View::NotFound
}

/// Segment-wise match against a pattern. Returns the captured `:param`
/// value (at most one per pattern) when the path matches.
fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut capture = None;
    for (expected, actual) in pattern_segments.iter().zip(path_segments.iter()) {
        if expected.starts_with(':') {
            if actual.is_empty() {
                return None;
            }
            capture = Some(decode(actual));
        } else if expected != actual {
            return None;
        }
    }
    Some(capture)
}

pub fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    let query = query?;
    query.split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode(v))
}

fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

/// Plain path equality against the current path, as on the original site.
/// A link is never marked active for a sub-path of itself.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
}

pub fn nav(current_path: &str) -> Vec<NavEntry> {
    NAV_LINKS.iter()
        .map(|(label, path)| NavEntry {
            label: label.to_string(),
            path: path.to_string(),
            active: is_active(current_path, path),
        })
        .collect()
}
