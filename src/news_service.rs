use crate::dataset::DEMO_NEWS;
use crate::models_api::news::ApiNewsItem;

pub struct NewsService;
impl NewsService {
    /// Newest first.
    pub fn read_all() -> Vec<ApiNewsItem> {
        let mut items: Vec<ApiNewsItem> = DEMO_NEWS.iter().map(ApiNewsItem::from).collect();
        items.sort_by_key(|e| std::cmp::Reverse(e.date));
        items
    }
}
