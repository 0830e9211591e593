use serde::{Deserialize, Serialize};

pub const NO_REVIEWS: &str = "No reviews yet.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
    // the listing endpoint calls it `text`, the detail endpoint `comment`
    #[serde(alias = "text", default)]
    pub comment: String,
    pub rating: u8,
}

impl Review {
    /// One line of the review list, e.g. `Ada: Lovely flat (5/5)`.
    pub fn summary(&self) -> String {
        let author = self
            .user
            .as_ref()
            .map(|user| user.first_name.as_str())
            .unwrap_or("Anonymous");
        format!("{}: {} ({}/5)", author, self.comment, self.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Place {
    /// `$50`, `$49.5`
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

pub fn review_lines(place: &Place) -> Vec<String> {
    if place.reviews.is_empty() {
        return vec![NO_REVIEWS.to_string()];
    }
    place.reviews.iter().map(Review::summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: &str) -> Place {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn place_without_reviews_renders_placeholder() {
        let p = place(r#"{"id":"1","title":"Loft","price":80}"#);
        assert_eq!(review_lines(&p), vec!["No reviews yet.".to_string()]);
    }

    #[test]
    fn reviews_accept_text_or_comment() {
        let p = place(
            r#"{
                "id": "2",
                "title": "Cabin",
                "description": "In the woods",
                "price": 49.5,
                "amenities": [{"id": "a1", "name": "Wifi"}],
                "reviews": [
                    {"user": {"first_name": "Ada"}, "comment": "Great", "rating": 5},
                    {"id": "r2", "text": "Cold at night", "rating": 3}
                ]
            }"#,
        );
        assert_eq!(p.amenities[0].name, "Wifi");
        assert_eq!(
            review_lines(&p),
            vec![
                "Ada: Great (5/5)".to_string(),
                "Anonymous: Cold at night (3/5)".to_string()
            ]
        );
    }

    #[test]
    fn price_label_uses_shortest_form() {
        assert_eq!(place(r#"{"id":"1","title":"a","price":50}"#).price_label(), "$50");
        assert_eq!(place(r#"{"id":"1","title":"a","price":49.5}"#).price_label(), "$49.5");
    }
}
