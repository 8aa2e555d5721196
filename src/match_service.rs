use crate::dataset::DEMO_RESULTS;
use crate::models_api::match_result::ApiMatchResult;

pub struct MatchService;
impl MatchService {
    /// All played matches, most recent first.
    pub fn read_all() -> Vec<ApiMatchResult> {
        let mut results: Vec<ApiMatchResult> = DEMO_RESULTS.iter().map(ApiMatchResult::from).collect();
        results.sort_by_key(|e| std::cmp::Reverse(e.date));
        results
    }

    pub fn read(id: &str) -> Option<ApiMatchResult> {
        DEMO_RESULTS.iter().find(|e| e.id == id).map(ApiMatchResult::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_by_id() {
        let result = MatchService::read("ARS-TOT-2025-05-12").unwrap();
        assert_eq!(result.score, "2–1");
        assert_eq!(result.stats.possession_home + result.stats.possession_away, 100);
        assert!(MatchService::read("UNKNOWN").is_none());
    }

    #[test]
    fn test_read_all() {
        assert_eq!(MatchService::read_all().len(), 1);
    }
}
