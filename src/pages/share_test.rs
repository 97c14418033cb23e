use super::*;

#[test]
fn unauthorized_without_password_prompts_silently() {
    let err = ApiError::from_status(401, r#"{"message":"this share requires password to access"}"#);
    assert_eq!(stage_for_error(&err, false), ShareStage::NeedsPassword(None));
}

#[test]
fn unauthorized_with_cached_password_reports_rejection() {
    let err = ApiError::from_status(401, r#"{"message":"invalid password"}"#);
    assert_eq!(
        stage_for_error(&err, true),
        ShareStage::NeedsPassword(Some("Incorrect password.".to_owned()))
    );
}

#[test]
fn missing_share_gets_friendly_message() {
    let err = ApiError::from_status(404, "");
    assert_eq!(
        stage_for_error(&err, false),
        ShareStage::Failed("This share does not exist or has expired.".to_owned())
    );
}

#[test]
fn other_errors_show_error_text() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(stage_for_error(&err, false), ShareStage::Failed("network error: offline".to_owned()));
}
