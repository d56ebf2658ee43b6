#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: f64,
}

/// Fields to change on an existing bookmark. `None` leaves the column untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.description.is_none() && self.rating.is_none()
    }
}
