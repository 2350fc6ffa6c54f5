use crate::view::FetchState;

/// Render the current fetch state for display.
///
/// Pure function of the state: loading shows only a busy line, an error
/// shows only its message, and a success shows the raw structural dump of
/// the items. Per-item layout is deliberately left to future work.
pub fn render(state: &FetchState) -> String {
    match state {
        FetchState::Idle => "Enter a search and submit.".to_string(),
        FetchState::Loading { .. } => "Searching...".to_string(),
        FetchState::Error(message) => message.clone(),
        FetchState::Success(items) => {
            serde_json::to_string_pretty(items).unwrap_or_else(|e| format!("<render error: {e}>"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::USER_FACING_ERROR;
    use crate::models::InsertItem;

    #[test]
    fn loading_hides_stale_items() {
        let state = FetchState::Loading {
            stale: vec![InsertItem {
                title: "Chair".to_string(),
                price: 0.0,
                location: "Berlin".to_string(),
                image_url: "http://x/img.jpg".to_string(),
                link: "http://x/item/1".to_string(),
            }],
        };
        assert_eq!(render(&state), "Searching...");
    }

    #[test]
    fn error_renders_only_the_message() {
        let state = FetchState::Error(USER_FACING_ERROR.to_string());
        let out = render(&state);
        assert_eq!(out, USER_FACING_ERROR);
        assert!(!out.contains("title"));
    }

    #[test]
    fn success_renders_the_item_dump() {
        let state = FetchState::Success(vec![InsertItem {
            title: "Chair".to_string(),
            price: 0.0,
            location: "Berlin".to_string(),
            image_url: "http://x/img.jpg".to_string(),
            link: "http://x/item/1".to_string(),
        }]);
        let out = render(&state);
        assert!(out.contains("\"title\": \"Chair\""));
        assert!(out.contains("\"image_url\": \"http://x/img.jpg\""));
    }

    #[test]
    fn empty_success_is_an_empty_array() {
        assert_eq!(render(&FetchState::Success(vec![])), "[]");
    }
}
