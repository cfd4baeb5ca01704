//! Loading archives from disk and extracting them.

use eswzip::{ExtractOptions, extract_in_background, read_archive_file, streaming_history};

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_file_to_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("my_spotify_data.zip");
    let archive = build_archive(&[
        TestEntry::Dir("MyData/"),
        TestEntry::Deflated("MyData/endsong_0.json", sample_plays("Intro").as_bytes()),
        TestEntry::Stored("MyData/Userdata.json", b"{\"username\":\"listener\"}"),
    ]);
    std::fs::write(&path, &archive).unwrap();

    let input = read_archive_file(&path).await.unwrap();
    assert_eq!(input.len(), archive.len());

    let result = extract_in_background(input, ExtractOptions::default())
        .await
        .unwrap();
    assert_eq!(result.entries.len(), 2);
    assert!(result.is_complete());

    let history = streaming_history(&result).unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].text.contains("Intro"));
}
