mod common;

use common::{context, odysee_feed, rumble_feed, youtube_feed, CHANNEL_ID};
use pretty_assertions::assert_eq;
use vidfeed::domain::{Platform, Subscription, SubscriptionSet};
use vidfeed::store::Store;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_youtube(server: &MockServer, videos: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/feeds/videos.xml"))
        .and(query_param("channel_id", CHANNEL_ID))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(youtube_feed("Some Channel", videos)),
        )
        .mount(server)
        .await;
}

async fn mount_body(server: &MockServer, url_path: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_unreachable_channel_is_left_out() {
    let server = MockServer::start().await;
    mount_youtube(&server, &[("vid00000001", "Hello")]).await;
    mount_body(&server, "/rumble/badid", 404, String::new()).await;

    let (ctx, _dir) = context(&server.uri());
    let subs: SubscriptionSet = [
        Subscription::new("Some Channel", CHANNEL_ID, Platform::YouTube),
        Subscription::new("badid", "badid", Platform::Rumble),
    ]
    .into_iter()
    .collect();
    ctx.store().save(&subs).unwrap();

    let result = ctx.aggregate().await.unwrap();

    assert_eq!(result.len(), 1);
    let entry = &result.entries[0];
    assert_eq!(entry.platform, Platform::YouTube);
    assert_eq!(entry.title, "Hello");
    assert_eq!(entry.author, "Some Channel");
    assert_eq!(entry.video_ref, "vid00000001");
    assert_eq!(
        entry.thumbnail_url,
        "https://i4.ytimg.com/vi/vid00000001/hqdefault.jpg"
    );
}

#[tokio::test]
async fn test_failures_only_remove_their_own_entries() {
    let server = MockServer::start().await;
    mount_youtube(&server, &[("vidA", "A"), ("vidB", "B")]).await;
    mount_body(
        &server,
        "/rumble/good",
        200,
        rumble_feed(&[("v1", "One"), ("v2", "Two"), ("v3", "Three")]),
    )
    .await;
    mount_body(&server, "/rumble/gone", 404, String::new()).await;
    mount_body(&server, "/rumble/broken", 500, String::new()).await;
    mount_body(
        &server,
        "/$/rss/@alice:abc",
        200,
        "<html>not a feed</html>".to_string(),
    )
    .await;

    let (ctx, _dir) = context(&server.uri());
    let subs: SubscriptionSet = [
        Subscription::new("Some Channel", CHANNEL_ID, Platform::YouTube),
        Subscription::new("good", "good", Platform::Rumble),
        Subscription::new("gone", "gone", Platform::Rumble),
        Subscription::new("broken", "broken", Platform::Rumble),
        Subscription::new("alice", "alice:abc", Platform::Odysee),
    ]
    .into_iter()
    .collect();
    ctx.store().save(&subs).unwrap();

    let result = ctx.aggregate().await.unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(result.count_for(Platform::YouTube), 2);
    assert_eq!(result.count_for(Platform::Rumble), 3);
    assert_eq!(result.count_for(Platform::Odysee), 0);

    // Entries of one channel stay in feed order
    let rumble: Vec<&str> = result
        .entries
        .iter()
        .filter(|e| e.platform == Platform::Rumble)
        .map(|e| e.video_ref.as_str())
        .collect();
    assert_eq!(rumble, vec!["v1", "v2", "v3"]);
}

#[tokio::test]
async fn test_odysee_entries_link_to_embed_player() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        "/$/rss/@alice:abc",
        200,
        odysee_feed(&[("https://odysee.com/@alice:abc/first-video:7", "First")]),
    )
    .await;

    let (ctx, _dir) = context(&server.uri());
    let subs: SubscriptionSet = [Subscription::new("alice", "alice:abc", Platform::Odysee)]
        .into_iter()
        .collect();
    ctx.store().save(&subs).unwrap();

    let result = ctx.aggregate().await.unwrap();

    assert_eq!(result.len(), 1);
    let entry = &result.entries[0];
    assert_eq!(entry.platform, Platform::Odysee);
    assert_eq!(entry.title, "First");
    assert_eq!(entry.author, "@alice");
    assert_eq!(
        entry.video_ref,
        "https://odysee.com/$/embed/@alice:abc/first-video:7"
    );
    assert_eq!(entry.thumbnail_url, "https://thumbs.odycdn.com/x.jpg");
}

#[tokio::test]
async fn test_empty_subscriptions_give_empty_result() {
    let server = MockServer::start().await;
    let (ctx, _dir) = context(&server.uri());
    ctx.store().create_if_missing().unwrap();

    let result = ctx.aggregate().await.unwrap();
    assert!(result.is_empty());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "Entries": [] }));
}

#[tokio::test]
async fn test_missing_subscriptions_file_fails_aggregation() {
    let server = MockServer::start().await;
    let (ctx, _dir) = context(&server.uri());

    let err = ctx.aggregate().await.unwrap_err();
    assert!(err.is_storage());
}
