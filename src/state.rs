//! Client-side view state, kept free of rendering so it can be tested natively.
use crate::models::product::Product;
use crate::models::review::{NewReview, Review};

/// Lifecycle of a view that loads its data over HTTP.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(err) => ViewState::Error(err.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Error(message) => ViewState::Error(message.clone()),
            ViewState::Ready(data) => ViewState::Ready(f(data)),
        }
    }

    /// Applies `f` to the data when ready; other states are left as they are.
    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let ViewState::Ready(data) = self {
            f(data);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub reviews: Vec<Review>,
}

impl ProductDetail {
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

/// Image gallery with a locally selected image.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<String>,
    selected: usize,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Self {
        Gallery { images, selected: 0 }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.images.get(self.selected).map(String::as_str)
    }

    // Out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.selected = index;
        }
    }
}

pub const DEFAULT_USER_NAME: &str = "Anonymous";

/// Contents of the review form.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub comment: String,
    pub user_name: String,
    pub rating: i64,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        ReviewDraft {
            comment: String::new(),
            user_name: DEFAULT_USER_NAME.to_string(),
            rating: 1,
        }
    }
}

impl ReviewDraft {
    /// Parses the value of the rating select; unparsable input keeps the current rating.
    pub fn set_rating(&mut self, raw: &str) {
        if let Ok(rating) = raw.trim().parse() {
            self.rating = rating;
        }
    }

    /// No client-side checks: an empty comment is sent as is.
    pub fn to_new_review(&self, product_id: &str) -> NewReview {
        NewReview {
            product_id: product_id.to_string(),
            user_name: self.user_name.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
        }
    }

    // After a successful submit only the comment is cleared
    pub fn clear_comment(&mut self) {
        self.comment.clear();
    }
}
