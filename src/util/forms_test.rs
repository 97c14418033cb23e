use super::*;

fn text_form(text: &str) -> ShareForm {
    ShareForm { text: text.to_owned(), ..ShareForm::default() }
}

#[test]
fn share_name_pattern() {
    assert!(is_valid_share_name("ab"));
    assert!(is_valid_share_name("Report2024"));
    assert!(!is_valid_share_name("a"));
    assert!(!is_valid_share_name("has-dash"));
    assert!(!is_valid_share_name(&"x".repeat(65)));
}

#[test]
fn random_name_text_share_is_valid() {
    let request = validate_share_form(&text_form("hello")).unwrap();
    assert_eq!(request.kind, ShareType::Text);
    assert!(request.name_random);
    assert!(request.name.is_empty());
    assert_eq!(request.text, "hello");
}

#[test]
fn text_is_kept_verbatim_but_url_is_trimmed() {
    let request = validate_share_form(&text_form("  indented\n")).unwrap();
    assert_eq!(request.text, "  indented\n");

    let form = ShareForm { kind: ShareType::Url, ..text_form(" https://example.com ") };
    assert_eq!(validate_share_form(&form).unwrap().text, "https://example.com");
}

#[test]
fn custom_name_is_required_and_checked() {
    let form = ShareForm { name_random: false, ..text_form("hi") };
    assert_eq!(validate_share_form(&form), Err("Please choose a name for your share."));

    let form = ShareForm { name_random: false, name: "bad name".to_owned(), ..text_form("hi") };
    assert_eq!(validate_share_form(&form), Err("Share names use 2-64 letters or digits."));

    let form = ShareForm { name_random: false, name: " notes ".to_owned(), ..text_form("hi") };
    assert_eq!(validate_share_form(&form).unwrap().name, "notes");
}

#[test]
fn random_length_bounds() {
    let form = ShareForm { name_random_length: 3, ..text_form("hi") };
    assert_eq!(validate_share_form(&form), Err("Random names must be 4-32 characters long."));
    let form = ShareForm { name_random_length: 32, ..text_form("hi") };
    assert!(validate_share_form(&form).is_ok());
}

#[test]
fn password_and_expiry_limits() {
    let form = ShareForm { password: "p".repeat(73), ..text_form("hi") };
    assert_eq!(validate_share_form(&form), Err("Password must be at most 72 bytes."));
    let form = ShareForm { expiry: 2, ..text_form("hi") };
    assert_eq!(validate_share_form(&form), Err("Choose a supported expiry."));
}

#[test]
fn empty_content_is_rejected() {
    assert_eq!(validate_share_form(&text_form("   ")), Err("Enter some text to share."));
    let form = ShareForm { kind: ShareType::Url, ..text_form("") };
    assert_eq!(validate_share_form(&form), Err("Enter a URL to share."));
}

#[test]
fn url_needs_scheme() {
    let form = ShareForm { kind: ShareType::Url, ..text_form("example.com") };
    assert_eq!(validate_share_form(&form), Err("Invalid URL."));
    let form = ShareForm { kind: ShareType::Url, ..text_form("ftp://files.example.com/x") };
    assert!(validate_share_form(&form).is_ok());
}

fn uploaded(count: usize) -> Vec<ShareFileUpload> {
    (0..count).map(|i| ShareFileUpload { id: format!("up-{i}"), path: format!("file-{i}.bin") }).collect()
}

#[test]
fn file_share_needs_an_upload() {
    let form = ShareForm { kind: ShareType::File, ..ShareForm::default() };
    assert_eq!(validate_share_form(&form), Err("Please upload at least one file first."));
}

#[test]
fn file_share_sends_uploads_and_no_text() {
    let form = ShareForm { kind: ShareType::File, files: uploaded(2), ..text_form("ignored") };
    let request = validate_share_form(&form).unwrap();
    assert_eq!(request.kind, ShareType::File);
    assert!(request.text.is_empty());
    assert_eq!(request.files, uploaded(2));
}

#[test]
fn file_share_limit() {
    let form = ShareForm { kind: ShareType::File, files: uploaded(MAX_SHARE_FILES), ..ShareForm::default() };
    assert!(validate_share_form(&form).is_ok());
    let form = ShareForm { kind: ShareType::File, files: uploaded(MAX_SHARE_FILES + 1), ..ShareForm::default() };
    assert_eq!(validate_share_form(&form), Err("A share holds at most 100 files."));
}

#[test]
fn directory_is_not_picked_directly() {
    let form = ShareForm { kind: ShareType::Directory, files: uploaded(1), ..ShareForm::default() };
    assert!(validate_share_form(&form).is_err());
}

#[test]
fn text_share_drops_stale_uploads() {
    let form = ShareForm { files: uploaded(1), ..text_form("hi") };
    assert!(validate_share_form(&form).unwrap().files.is_empty());
}

#[test]
fn password_input_is_trimmed_and_required() {
    assert_eq!(validate_password_input("  secret "), Ok("secret".to_owned()));
    assert_eq!(validate_password_input("   "), Err("Enter the share password."));
}

#[test]
fn type_select_values() {
    assert_eq!(kind_from_choice("text"), ShareType::Text);
    assert_eq!(kind_from_choice("url"), ShareType::Url);
    assert_eq!(kind_from_choice("file"), ShareType::File);
    assert_eq!(kind_from_choice("directory"), ShareType::Text);
}

#[test]
fn expiry_labels() {
    assert_eq!(expiry_label(0), "Never");
    assert_eq!(expiry_label(1), "1 day");
    assert_eq!(expiry_label(7), "7 days");
}
