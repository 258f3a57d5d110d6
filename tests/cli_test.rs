use std::io::Cursor;

use spanalyze::cli::prompt_selection;
use spanalyze::types::Playlist;

// Helper function to create playlists named "Mix <i>"
fn create_test_playlists(count: usize) -> Vec<Playlist> {
    (0..count)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": format!("p{}", i),
                "name": format!("Mix {}", i),
                "owner": { "display_name": "me" },
                "tracks": { "total": i }
            }))
            .unwrap()
        })
        .collect()
}

#[test]
fn test_prompt_selection_writes_only_to_given_output() {
    let playlists = create_test_playlists(3);
    let mut out: Vec<u8> = Vec::new();
    let mut input = Cursor::new("2\n");

    let idx = prompt_selection(&mut out, &mut input, &playlists).unwrap();

    assert_eq!(idx, 1);
    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("Mix 0"));
    assert!(shown.contains("Mix 2"));
    assert!(shown.ends_with("Select a playlist [1-3]: "));
}

#[test]
fn test_prompt_selection_rejects_out_of_range() {
    let playlists = create_test_playlists(2);
    let mut out: Vec<u8> = Vec::new();

    assert!(prompt_selection(&mut out, &mut Cursor::new("3\n"), &playlists).is_err());
    assert!(prompt_selection(&mut out, &mut Cursor::new(""), &playlists).is_err());
}
