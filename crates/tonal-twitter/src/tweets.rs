//! User timeline.

use tonal_core::entities::Post;

use crate::http::decode_json;
use crate::wire::{Envelope, TweetObject};
use crate::{TwitterClient, TwitterError};

const USER_TWEETS: &str = "users/:id/tweets";

impl TwitterClient {
    /// Fetch the most recent tweets by `user_id`, one page of up to
    /// `timeline_page_size` entries.
    ///
    /// A response without `data` (no tweets, protected or suspended account)
    /// is an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns transport, status, and decode errors.
    pub async fn get_user_tweets(&self, user_id: &str) -> Result<Vec<Post>, TwitterError> {
        let url = self.endpoint(&format!(
            "users/{}/tweets?max_results={}",
            urlencoding::encode(user_id),
            self.timeline_page_size
        ));
        let envelope: Envelope<Vec<TweetObject>> =
            decode_json(self.get(&url).await?, USER_TWEETS).await?;
        Ok(posts_from_envelope(envelope, user_id))
    }
}

fn posts_from_envelope(envelope: Envelope<Vec<TweetObject>>, user_id: &str) -> Vec<Post> {
    match envelope.data {
        Some(tweets) => tweets.into_iter().map(Post::from).collect(),
        None => {
            if let Some(problem) = envelope.first_problem() {
                tracing::warn!(user_id, %problem, "timeline unavailable; treating as empty");
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::parse_body;

    const FIXTURE: &str = r#"{
        "data": [
            {"id": "1", "text": "What a great day!", "edit_history_tweet_ids": ["1"]},
            {"id": "2", "text": "This release is terrible.", "edit_history_tweet_ids": ["2"]}
        ],
        "meta": {"result_count": 2, "newest_id": "2", "oldest_id": "1"}
    }"#;

    #[test]
    fn parses_timeline() {
        let envelope: Envelope<Vec<TweetObject>> = parse_body(FIXTURE, USER_TWEETS).unwrap();
        let posts = posts_from_envelope(envelope, "7");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text, "What a great day!");
        assert_eq!(posts[1].id, "2");
    }

    #[test]
    fn absent_data_is_empty() {
        let envelope: Envelope<Vec<TweetObject>> =
            parse_body(r#"{"meta":{"result_count":0}}"#, USER_TWEETS).unwrap();
        assert!(posts_from_envelope(envelope, "7").is_empty());
    }

    #[test]
    fn problem_without_data_is_empty() {
        let envelope: Envelope<Vec<TweetObject>> = parse_body(
            r#"{"errors":[{"title":"Authorization Error","detail":"Sorry, you are not authorized to see the Tweets."}]}"#,
            USER_TWEETS,
        )
        .unwrap();
        assert!(posts_from_envelope(envelope, "7").is_empty());
    }
}
