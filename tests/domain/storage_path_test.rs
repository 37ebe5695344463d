use songsheet::domain::{JobId, StoragePath, sanitize_filename};

#[test]
fn given_job_and_index_when_creating_path_then_nests_under_job_with_prefix() {
    let job_id = JobId::new();
    let path = StoragePath::new(&job_id, 2, "song.html");

    assert_eq!(path.as_str(), format!("{}/0002_song.html", job_id));
}

#[test]
fn given_duplicate_names_when_creating_paths_then_paths_differ() {
    let job_id = JobId::new();

    let first = StoragePath::new(&job_id, 0, "page.html");
    let second = StoragePath::new(&job_id, 1, "page.html");

    assert_ne!(first, second);
}

#[test]
fn given_traversal_name_when_sanitizing_then_keeps_last_component() {
    assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_filename("C:\\Users\\me\\lagu.html"), "lagu.html");
}

#[test]
fn given_empty_or_dot_name_when_sanitizing_then_uses_placeholder() {
    assert_eq!(sanitize_filename(""), "unnamed");
    assert_eq!(sanitize_filename(".."), "unnamed");
    assert_eq!(sanitize_filename("   "), "unnamed");
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::new(&JobId::new(), 0, "test.txt");
    assert_eq!(format!("{}", path), path.as_str());
}
