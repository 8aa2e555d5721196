use crate::dataset::DEMO_PLAYERS;
use crate::models_api::player::ApiPlayer;

pub struct PlayerService;
impl PlayerService {
    pub fn read_all() -> Vec<ApiPlayer> {
        DEMO_PLAYERS.iter().map(ApiPlayer::from).collect()
    }

    pub fn read(id: i32) -> Option<ApiPlayer> {
        DEMO_PLAYERS.iter().find(|e| e.id == id).map(ApiPlayer::from)
    }

    /// Case-insensitive name filter for the `q` query parameter.
    /// No query means the full squad list.
    pub fn search(query: Option<&str>) -> Vec<ApiPlayer> {
        match query {
            None => PlayerService::read_all(),
            Some(q) => {
                let needle = q.to_lowercase();
                DEMO_PLAYERS.iter()
                    .filter(|e| e.name.to_lowercase().contains(&needle))
                    .map(ApiPlayer::from)
                    .collect()
            }
        }
    }

    /// Leaderboard for the home page, best tackle percentage first.
    pub fn tackle_leaders(limit: usize) -> Vec<ApiPlayer> {
        let mut players = PlayerService::read_all();
        players.sort_by(|a, b| b.tackle_success_pct.total_cmp(&a.tackle_success_pct));
        players.truncate(limit);
        players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = PlayerService::search(Some("saka"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bukayo Saka");
    }

    #[test]
    fn test_search_without_query_returns_all() {
        assert_eq!(PlayerService::search(None).len(), DEMO_PLAYERS.len());
    }

    #[test]
    fn test_search_no_hits() {
        assert!(PlayerService::search(Some("Kane")).is_empty());
    }

    #[test]
    fn test_read_by_id() {
        let player = PlayerService::read(1).unwrap();
        assert_eq!(player.name, "Declan Rice");
        assert_eq!(player.tackle_success_pct, (72.0 / 98.0) * 100.0);
        assert_eq!(player.pass_completion_pct, (2365.0 / 2600.0) * 100.0);

        assert!(PlayerService::read(99).is_none());
    }

    #[test]
    fn test_tackle_leaders_sorted() {
        let leaders = PlayerService::tackle_leaders(3);
        assert_eq!(leaders.len(), 3);
        assert!(leaders[0].tackle_success_pct >= leaders[1].tackle_success_pct);
        assert!(leaders[1].tackle_success_pct >= leaders[2].tackle_success_pct);
        // Saliba wins 55 of 70, the best rate in the squad
        assert_eq!(leaders[0].name, "William Saliba");
    }
}
