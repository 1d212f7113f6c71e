/// A content card on the home grid.
///
/// The real data-fetching layer is an external collaborator; this demo
/// catalog stands in for it so the shell has something to route to.
#[derive(Debug, Clone)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub views: u64,
    pub tag: String,
}

impl VideoSummary {
    fn new(id: &str, title: &str, duration: &str, views: u64, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            duration: duration.to_string(),
            views,
            tag: tag.to_string(),
        }
    }
}

pub fn demo() -> Vec<VideoSummary> {
    vec![
        VideoSummary::new("1", "Midnight City Drive", "12:41", 482_113, "featured"),
        VideoSummary::new("2", "Rooftop Golden Hour", "08:03", 291_406, "new"),
        VideoSummary::new("3", "Backstage Afterparty", "21:17", 1_204_882, "trending"),
        VideoSummary::new("4", "Slow Jazz Sessions", "45:00", 77_019, "premium"),
        VideoSummary::new("5", "Velvet Lounge Nights", "16:52", 530_244, "trending"),
        VideoSummary::new("6", "Neon Rain Walkthrough", "09:38", 64_090, "new"),
        VideoSummary::new("7", "Private Pool Weekend", "27:11", 899_501, "premium"),
        VideoSummary::new("8", "Desert Road Sunrise", "11:05", 48_377, "featured"),
    ]
}

pub fn find<'a>(catalog: &'a [VideoSummary], id: &str) -> Option<&'a VideoSummary> {
    catalog.iter().find(|v| v.id == id)
}
