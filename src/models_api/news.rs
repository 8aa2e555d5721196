use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::NewsItem;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiNewsItem {
    pub id: i32,
    pub date: NaiveDate,
    pub title: String,
    pub summary: String,
}

impl From<&NewsItem> for ApiNewsItem {
    fn from(n: &NewsItem) -> Self {
        ApiNewsItem { id: n.id, date: n.date, title: n.title.clone(), summary: n.summary.clone() }
    }
}
