//! User lookup and following list.

use tonal_core::entities::Account;
use tonal_core::handle::Handle;

use crate::http::decode_json;
use crate::wire::{Envelope, UserObject};
use crate::{TwitterClient, TwitterError};

const USER_BY_USERNAME: &str = "users/by/username";
const FOLLOWING: &str = "users/:id/following";

impl TwitterClient {
    /// Resolve `handle` to an account.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Upstream`] when the API reports a problem (for
    /// example an unknown user), [`TwitterError::MalformedResponse`] when the
    /// body has neither data nor problems, and the usual transport errors.
    pub async fn get_user_by_username(&self, handle: &Handle) -> Result<Account, TwitterError> {
        let url = self.endpoint(&format!(
            "users/by/username/{}",
            urlencoding::encode(handle.as_str())
        ));
        let envelope: Envelope<UserObject> =
            decode_json(self.get(&url).await?, USER_BY_USERNAME).await?;
        account_from_envelope(envelope)
    }

    /// List accounts followed by `user_id`, one page of up to
    /// `following_page_size` entries.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Upstream`] if the API reports a problem and no
    /// data, plus the usual transport and decode errors.
    pub async fn get_following(&self, user_id: &str) -> Result<Vec<Account>, TwitterError> {
        let url = self.endpoint(&format!(
            "users/{}/following?max_results={}",
            urlencoding::encode(user_id),
            self.following_page_size
        ));
        let envelope: Envelope<Vec<UserObject>> =
            decode_json(self.get(&url).await?, FOLLOWING).await?;
        following_from_envelope(envelope, user_id)
    }
}

fn account_from_envelope(envelope: Envelope<UserObject>) -> Result<Account, TwitterError> {
    if let Some(user) = envelope.data {
        return Ok(user.into());
    }
    Err(envelope
        .first_problem()
        .unwrap_or_else(|| TwitterError::MalformedResponse {
            endpoint: USER_BY_USERNAME.to_string(),
            reason: "missing field `data`".to_string(),
        }))
}

fn following_from_envelope(
    envelope: Envelope<Vec<UserObject>>,
    user_id: &str,
) -> Result<Vec<Account>, TwitterError> {
    if envelope.has_more() {
        tracing::info!(user_id, "following list has more pages; only the first is used");
    }
    match envelope.data {
        Some(users) => Ok(users.into_iter().map(Account::from).collect()),
        None => match envelope.first_problem() {
            Some(problem) => Err(problem),
            None => Ok(Vec::new()),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::http::parse_body;

    const USER_FIXTURE: &str = r#"{
        "data": {"id": "2244994945", "name": "Twitter Dev", "username": "TwitterDev"}
    }"#;

    const FOLLOWING_FIXTURE: &str = r#"{
        "data": [
            {"id": "6253282", "name": "Twitter API", "username": "TwitterAPI"},
            {"id": "2244994945", "name": "Twitter Dev", "username": "TwitterDev"}
        ],
        "meta": {"result_count": 2}
    }"#;

    #[test]
    fn parses_user_lookup() {
        let envelope: Envelope<UserObject> = parse_body(USER_FIXTURE, USER_BY_USERNAME).unwrap();
        let account = account_from_envelope(envelope).unwrap();
        assert_eq!(
            account,
            Account {
                id: "2244994945".into(),
                handle: "TwitterDev".into(),
                display_name: "Twitter Dev".into(),
            }
        );
    }

    #[test]
    fn user_lookup_without_data_is_malformed() {
        let envelope: Envelope<UserObject> = parse_body("{}", USER_BY_USERNAME).unwrap();
        let err = account_from_envelope(envelope).unwrap_err();
        assert!(matches!(err, TwitterError::MalformedResponse { .. }));
    }

    #[test]
    fn user_lookup_with_missing_id_is_malformed() {
        let err = parse_body::<Envelope<UserObject>>(
            r#"{"data":{"name":"x","username":"x"}}"#,
            USER_BY_USERNAME,
        )
        .unwrap_err();
        assert!(matches!(err, TwitterError::MalformedResponse { .. }));
    }

    #[test]
    fn unknown_user_is_upstream_problem() {
        let envelope: Envelope<UserObject> = parse_body(
            r#"{"errors":[{"title":"Not Found Error","detail":"Could not find user with username: [ghost]."}]}"#,
            USER_BY_USERNAME,
        )
        .unwrap();
        let err = account_from_envelope(envelope).unwrap_err();
        assert!(
            matches!(err, TwitterError::Upstream { ref title, .. } if title == "Not Found Error")
        );
    }

    #[test]
    fn parses_following_page() {
        let envelope: Envelope<Vec<UserObject>> =
            parse_body(FOLLOWING_FIXTURE, FOLLOWING).unwrap();
        let accounts = following_from_envelope(envelope, "1").unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].handle, "TwitterAPI");
        assert_eq!(accounts[1].display_name, "Twitter Dev");
    }

    #[test]
    fn empty_following_is_empty_list() {
        let envelope: Envelope<Vec<UserObject>> =
            parse_body(r#"{"meta":{"result_count":0}}"#, FOLLOWING).unwrap();
        assert!(following_from_envelope(envelope, "1").unwrap().is_empty());
    }

    #[test]
    fn following_problem_without_data_is_error() {
        let envelope: Envelope<Vec<UserObject>> = parse_body(
            r#"{"errors":[{"title":"Authorization Error","detail":"Sorry, you are not authorized."}]}"#,
            FOLLOWING,
        )
        .unwrap();
        assert!(following_from_envelope(envelope, "1").is_err());
    }
}
