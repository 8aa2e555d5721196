use crate::dataset::DEMO_FIXTURES;
use crate::models_api::fixture::ApiFixture;

pub struct FixtureService;
impl FixtureService {
    /// All scheduled fixtures, earliest first.
    pub fn read_all() -> Vec<ApiFixture> {
        let mut fixtures: Vec<ApiFixture> = DEMO_FIXTURES.iter().map(ApiFixture::from).collect();
        fixtures.sort_by_key(|e| e.date);
        fixtures
    }

    pub fn read(id: &str) -> Option<ApiFixture> {
        DEMO_FIXTURES.iter().find(|e| e.id == id).map(ApiFixture::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all_sorted_by_date() {
        let fixtures = FixtureService::read_all();
        assert_eq!(fixtures.len(), 2);
        assert!(fixtures[0].date <= fixtures[1].date);
        assert_eq!(fixtures[0].id, "ARS-MCI-2025-08-17");
    }

    #[test]
    fn test_read_by_id() {
        let fixture = FixtureService::read("CHE-ARS-2025-08-24").unwrap();
        assert_eq!(fixture.venue, "Stamford Bridge");
        assert!(FixtureService::read("ARS-XXX-2000-01-01").is_none());
    }
}
