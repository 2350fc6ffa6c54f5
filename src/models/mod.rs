use serde::{Deserialize, Serialize};

/// A single classified-ad result as returned by the API.
///
/// The backend owns this shape; we only deserialize and display it,
/// so every field stays exactly as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertItem {
    pub title: String,
    pub price: f64,
    pub location: String,
    pub image_url: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_array() {
        let body = r#"[{"title":"Chair","price":0,"location":"Berlin","image_url":"http://x/img.jpg","link":"http://x/item/1"}]"#;
        let items: Vec<InsertItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Chair");
        assert_eq!(items[0].price, 0.0);
        assert_eq!(items[0].image_url, "http://x/img.jpg");
    }
}
