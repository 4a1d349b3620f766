// End-to-end batch tests: mock wiki server, temporary output root.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::tempdir;
use tianzi_core::batch::{execute_batch, BatchOptions};
use tianzi_core::config::DynastyEntry;
use tianzi_scraper::normalize;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn list_page(server_uri: &str) -> String {
    format!(
        r#"<html><body>
        <table class="wikitable">
            <tr><th>Name</th><th>Reign</th></tr>
            <tr><td><a href="{}/ruler/jia">甲</a></td><td>-2070</td></tr>
        </table>
        </body></html>"#,
        server_uri
    )
}

fn detail_page_with_portrait(server_uri: &str) -> String {
    format!(
        r#"<html><body>
        <table class="infobox"><tbody><tr><td>
            <img src="{}/commons/thumb/a/ab/pic.jpg/220px-pic.jpg">
        </td></tr></tbody></table>
        </body></html>"#,
        server_uri
    )
}

fn detail_page_without_portrait() -> &'static str {
    "<html><body><table class=\"infobox\"><tr><td>no image</td></tr></table></body></html>"
}

async fn mount_html(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

fn options(server: &MockServer, root: PathBuf, dynasty: &str) -> BatchOptions {
    BatchOptions {
        dynasties: vec![DynastyEntry::new(
            dynasty,
            format!("{}/list", server.uri()),
        )],
        output_root: root,
        show_progress_bars: false,
    }
}

/// Scenario A: one ruler, upgraded fetch succeeds, file lands under the
/// normalized dynasty/name path.
#[tokio::test]
async fn test_batch_downloads_upgraded_portrait() {
    let server = MockServer::start().await;
    mount_html(&server, "/list", list_page(&server.uri())).await;
    mount_html(&server, "/ruler/jia", detail_page_with_portrait(&server.uri())).await;

    // Full-resolution original; the thumbnail URL must not be fetched.
    Mock::given(method("GET"))
        .and(path("/commons/a/ab/pic.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xCD; 4096]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commons/thumb/a/ab/pic.jpg/220px-pic.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"thumb".to_vec()))
        .expect(0)
        .mount(&server)
        .await;

    let root = tempdir().unwrap();
    let summaries = execute_batch(
        options(&server, root.path().to_path_buf(), "TestDynasty"),
        normalize::identity(),
        None,
    )
    .await;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].rulers_seen, 1);
    assert_eq!(summaries[0].downloads_succeeded, 1);

    let saved = root.path().join("TestDynasty").join("甲.jpg");
    assert!(saved.exists());
    assert_eq!(std::fs::read(&saved).unwrap().len(), 4096);
}

/// Scenario B: undersized HD payload falls back to the thumbnail, whose
/// bytes are written as-is.
#[tokio::test]
async fn test_batch_falls_back_to_thumbnail() {
    let server = MockServer::start().await;
    mount_html(&server, "/list", list_page(&server.uri())).await;
    mount_html(&server, "/ruler/jia", detail_page_with_portrait(&server.uri())).await;

    Mock::given(method("GET"))
        .and(path("/commons/a/ab/pic.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 400]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commons/thumb/a/ab/pic.jpg/220px-pic.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"thumbnail bytes".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let root = tempdir().unwrap();
    let summaries = execute_batch(
        options(&server, root.path().to_path_buf(), "TestDynasty"),
        normalize::identity(),
        None,
    )
    .await;

    assert_eq!(summaries[0].downloads_succeeded, 1);

    let saved = root.path().join("TestDynasty").join("甲.jpg");
    assert_eq!(std::fs::read(&saved).unwrap(), b"thumbnail bytes");
}

/// Scenario C: detail page with no infobox image. The ruler counts as seen
/// but not as a success, and no file is written.
#[tokio::test]
async fn test_batch_skips_ruler_without_portrait() {
    let server = MockServer::start().await;
    mount_html(&server, "/list", list_page(&server.uri())).await;
    mount_html(&server, "/ruler/jia", detail_page_without_portrait().to_string()).await;

    let root = tempdir().unwrap();
    let summaries = execute_batch(
        options(&server, root.path().to_path_buf(), "TestDynasty"),
        normalize::identity(),
        None,
    )
    .await;

    assert_eq!(summaries[0].rulers_seen, 1);
    assert_eq!(summaries[0].downloads_succeeded, 0);
    assert!(!root.path().join("TestDynasty").join("甲.jpg").exists());
}

/// Scenario D: a dead list page skips that dynasty only; the runner moves
/// on to the next configured dynasty.
#[tokio::test]
async fn test_batch_survives_list_page_transport_failure() {
    let server = MockServer::start().await;
    mount_html(&server, "/list", list_page(&server.uri())).await;
    mount_html(&server, "/ruler/jia", detail_page_with_portrait(&server.uri())).await;
    Mock::given(method("GET"))
        .and(path("/commons/a/ab/pic.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xCD; 4096]))
        .mount(&server)
        .await;

    let root = tempdir().unwrap();
    let options = BatchOptions {
        dynasties: vec![
            // Port 1 refuses connections.
            DynastyEntry::new("DeadDynasty", "http://127.0.0.1:1/list"),
            DynastyEntry::new("TestDynasty", format!("{}/list", server.uri())),
        ],
        output_root: root.path().to_path_buf(),
        show_progress_bars: false,
    };

    let summaries = execute_batch(options, normalize::identity(), None).await;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].dynasty, "DeadDynasty");
    assert_eq!(summaries[0].rulers_seen, 0);
    assert_eq!(summaries[0].downloads_succeeded, 0);
    assert_eq!(summaries[1].downloads_succeeded, 1);
}

/// A list page without any qualifying table is treated as an empty result.
#[tokio::test]
async fn test_batch_handles_missing_table() {
    let server = MockServer::start().await;
    mount_html(
        &server,
        "/list",
        "<html><body><p>no tables here</p></body></html>".to_string(),
    )
    .await;

    let root = tempdir().unwrap();
    let summaries = execute_batch(
        options(&server, root.path().to_path_buf(), "TestDynasty"),
        normalize::identity(),
        None,
    )
    .await;

    assert_eq!(summaries[0].rulers_seen, 0);
    assert_eq!(summaries[0].downloads_succeeded, 0);
}

/// Names and dynasty labels are normalized before the path is computed.
#[tokio::test]
async fn test_batch_normalizes_output_paths() {
    let server = MockServer::start().await;
    let list = format!(
        r#"<html><body><table class="wikitable">
           <tr><th>Name</th><th>Reign</th></tr>
           <tr><td><a href="{}/ruler/wudi">漢武帝</a></td><td>-141</td></tr>
           </table></body></html>"#,
        server.uri()
    );
    mount_html(&server, "/list", list).await;
    mount_html(&server, "/ruler/wudi", detail_page_with_portrait(&server.uri())).await;
    Mock::given(method("GET"))
        .and(path("/commons/a/ab/pic.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xCD; 4096]))
        .mount(&server)
        .await;

    let root = tempdir().unwrap();
    let summaries = execute_batch(
        options(&server, root.path().to_path_buf(), "漢朝"),
        normalize::simplified_chinese(),
        None,
    )
    .await;

    assert_eq!(summaries[0].downloads_succeeded, 1);
    assert!(root.path().join("汉朝").join("汉武帝.jpg").exists());
}

/// The per-dynasty progress callback fires once per configured dynasty.
#[tokio::test]
async fn test_batch_progress_callback() {
    let server = MockServer::start().await;
    mount_html(
        &server,
        "/list",
        "<html><body><p>empty</p></body></html>".to_string(),
    )
    .await;

    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_clone = seen.clone();

    let root = tempdir().unwrap();
    let options = BatchOptions {
        dynasties: vec![
            DynastyEntry::new("One", format!("{}/list", server.uri())),
            DynastyEntry::new("Two", format!("{}/list", server.uri())),
        ],
        output_root: root.path().to_path_buf(),
        show_progress_bars: false,
    };

    execute_batch(
        options,
        normalize::identity(),
        Some(Arc::new(move |line: String| {
            seen_clone.lock().unwrap().push(line);
        })),
    )
    .await;

    let lines = seen.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("1/2"));
    assert!(lines[1].contains("2/2"));
}
