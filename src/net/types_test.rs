use super::*;

#[test]
fn share_decodes_backend_directory_payload() {
    let raw = r#"{
        "type": "directory",
        "name": "abc",
        "size": 2048,
        "createdAt": "2024-05-01T10:00:00Z",
        "files": [
            {"id": "f1", "path": "docs/a.txt", "size": 1024},
            {"id": "f2", "path": "b.bin"}
        ],
        "creator": {"subject": "sub-1", "username": "alice"}
    }"#;
    let share: Share = serde_json::from_str(raw).unwrap();
    assert_eq!(share.kind, ShareType::Directory);
    assert_eq!(share.name, "abc");
    assert_eq!(share.size, 2048);
    assert_eq!(share.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    assert_eq!(share.file_list().len(), 2);
    assert_eq!(share.file_list()[1].size, None);
    assert_eq!(share.creator.unwrap().username.as_deref(), Some("alice"));
}

#[test]
fn share_without_optional_fields_decodes() {
    let share: Share = serde_json::from_str(r#"{"type":"text","name":"t","size":5}"#).unwrap();
    assert_eq!(share.kind, ShareType::Text);
    assert!(share.password.is_none());
    assert!(share.expiry.is_none());
    assert!(share.file_list().is_empty());
}

#[test]
fn share_rejects_unknown_type() {
    let result = serde_json::from_str::<Share>(r#"{"type":"video","name":"v","size":1}"#);
    assert!(result.is_err());
}

#[test]
fn userinfo_tolerates_missing_username() {
    let info: Userinfo = serde_json::from_str(r#"{"subject":"s"}"#).unwrap();
    assert_eq!(info.subject, "s");
    assert!(info.username.is_empty());
}

#[test]
fn list_page_reads_data_and_cursor() {
    let page: ShareListPage =
        serde_json::from_str(r#"{"data":[{"type":"url","name":"u","size":0}],"cursor":"next"}"#).unwrap();
    assert_eq!(page.shares.len(), 1);
    assert_eq!(page.next_cursor(), Some("next"));
}

#[test]
fn list_page_empty_cursor_means_exhausted() {
    let page: ShareListPage = serde_json::from_str(r#"{"data":[],"cursor":""}"#).unwrap();
    assert_eq!(page.next_cursor(), None);
}

#[test]
fn create_request_serializes_camel_case() {
    let req = CreateShareRequest {
        kind: ShareType::Url,
        name: String::new(),
        name_random: true,
        name_random_length: 6,
        password: String::new(),
        expiry: 7,
        text: "https://example.com".to_owned(),
        files: Vec::new(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["type"], "url");
    assert_eq!(value["nameRandom"], true);
    assert_eq!(value["nameRandomLength"], 6);
    assert_eq!(value["expiry"], 7);
    assert!(value["files"].as_array().unwrap().is_empty());
}

#[test]
fn share_type_labels_match_wire_names() {
    for kind in [ShareType::File, ShareType::Directory, ShareType::Text, ShareType::Url] {
        let wire = serde_json::to_value(kind).unwrap();
        assert_eq!(wire, kind.label());
    }
}

#[test]
fn upload_start_reads_part_size() {
    let start: UploadStart = serde_json::from_str(r#"{"id":"up-1","partSize":20971520}"#).unwrap();
    assert_eq!(start.id, "up-1");
    assert_eq!(start.part_size, 20 * 1024 * 1024);
}

#[test]
fn create_request_carries_uploaded_files() {
    let req = CreateShareRequest {
        kind: ShareType::File,
        name: "docs".to_owned(),
        name_random: false,
        name_random_length: 6,
        password: String::new(),
        expiry: 0,
        text: String::new(),
        files: vec![ShareFileUpload { id: "up-1".to_owned(), path: "report.pdf".to_owned() }],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["type"], "file");
    assert_eq!(value["files"][0]["id"], "up-1");
    assert_eq!(value["files"][0]["path"], "report.pdf");
}

#[test]
fn file_type_reads_labels_and_tolerates_new_ones() {
    let image: FileType = serde_json::from_str(r#""image""#).unwrap();
    assert_eq!(image, FileType::Image);
    let unknown: FileType = serde_json::from_str(r#""unknown""#).unwrap();
    assert_eq!(unknown, FileType::Unknown);
    let archive: FileType = serde_json::from_str(r#""archive""#).unwrap();
    assert_eq!(archive, FileType::Unknown);
}
