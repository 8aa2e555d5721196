use crate::dataset::DEMO_TABLE;
use crate::models::TableRow;
use crate::models_api::standings::ApiTableRow;

pub struct StandingService;
impl StandingService {
    pub fn read() -> Vec<ApiTableRow> {
        StandingService::rank(&DEMO_TABLE)
    }

    /// Points first, goal difference as tiebreak. Rank is 1-based and
    /// assigned after sorting; ties keep dataset order (stable sort).
    fn rank(rows: &[TableRow]) -> Vec<ApiTableRow> {
        let mut all_teams: Vec<ApiTableRow> = rows.iter().map(ApiTableRow::from).collect();

        all_teams.sort_by(|a, b| {
            if a.points == b.points {
                b.goal_diff.cmp(&a.goal_diff)
            } else {
                b.points.cmp(&a.points)
            }
        });

        all_teams.into_iter().enumerate().map(|mut e| {
            e.1.rank = u8::try_from(e.0).unwrap() + 1;
            e.1
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(team: &str, won: u16, drawn: u16, gf: i16, ga: i16) -> TableRow {
        TableRow {
            team: team.to_string(),
            played: won + drawn,
            won,
            drawn,
            lost: 0,
            goals_for: gf,
            goals_against: ga,
            goal_diff: gf - ga,
            points: 3 * won + drawn,
        }
    }

    #[test]
    fn test_rank_by_points_then_goal_diff() {
        let rows = vec![
            row("Arsenal", 2, 0, 5, 1),
            row("Man City", 2, 1, 6, 4),
            row("Liverpool", 2, 0, 4, 1),
        ];
        let ranked = StandingService::rank(&rows);
        assert_eq!(ranked[0].team, "Man City");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].team, "Arsenal");
        assert_eq!(ranked[2].team, "Liverpool");
    }

    #[test]
    fn test_pre_season_table_keeps_dataset_order() {
        let rows = StandingService::read();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].team, "Arsenal");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[2].team, "Liverpool");
        assert_eq!(rows[2].rank, 3);
    }
}
