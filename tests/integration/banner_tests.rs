use crate::common;
use mockito::Matcher;
use mytarget_client::prelude::*;

#[tokio::test]
async fn list_sends_comma_joined_fields() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("GET", "/api/v1/banners.json")
        .match_query(Matcher::UrlEncoded("fields".into(), "id,name".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    client
        .banners
        .list(&BannerListParams::new().with_fields(["id", "name"]))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn list_sends_every_filter() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("GET", "/api/v1/banners/5;6.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "active".into()),
            Matcher::UrlEncoded("campaign__status".into(), "active".into()),
            Matcher::UrlEncoded("fields".into(), "id".into()),
            Matcher::UrlEncoded("updated__gte".into(), "2020-01-01 00:00:00".into()),
            Matcher::UrlEncoded(
                "last_stats_updated__gte".into(),
                "2020-01-02 00:00:00".into(),
            ),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let params = BannerListParams::new()
        .with_ids([5, 6])
        .with_status("active")
        .with_campaign_status("active")
        .with_field("id")
        .with_updated_gte("2020-01-01 00:00:00")
        .with_last_stats_updated_gte("2020-01-02 00:00:00");
    client.banners.list(&params).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn update_posts_json_body() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("POST", "/api/v1/banners/42.json")
        .match_header("content-type", "application/json")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(json!({"status": "active"})))
        .with_status(200)
        .with_body(r#"{"id":42,"status":"active"}"#)
        .create_async()
        .await;

    let banner = client
        .banners
        .update(42.into(), &json!({"status": "active"}))
        .await
        .unwrap();
    assert_eq!(banner["status"], "active");
    mock.assert_async().await;
}

#[tokio::test]
async fn update_several_banners_at_once() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("POST", "/api/v1/banners/1;2.json")
        .match_body(Matcher::Json(json!({"status": "blocked"})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client
        .banners
        .update(vec![1, 2].into(), &json!({"status": "blocked"}))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn update_without_ids_is_rejected_locally() {
    let (_server, client) = common::authenticated().await;
    let result = client
        .banners
        .update(IdList::default(), &json!({"status": "active"}))
        .await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}
