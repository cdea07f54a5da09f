//! End-to-end flows through the router: add, edit, delete, export.

mod common;

use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use common::{body_json, body_string, build_test_app, get, location, post_form};
use plancal_core::store::EntryStore;

const LAUNCH_POST: &str =
    "title=Launch+Post&content_type=Blog+Post&start_date=2024-06-01&num_days=3";

#[tokio::test]
async fn empty_page_shows_add_form_and_hint() {
    let (app, _, _) = build_test_app();
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Add New Content"));
    assert!(html.contains("No content yet"));
}

#[tokio::test]
async fn submit_inserts_entry_and_redirects() {
    let (app, store, owner) = build_test_app();

    let response = post_form(&app, "/entries", LAUNCH_POST).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?notice=added");

    let entries = store.find_by_owner(&owner).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].fields.end_date.to_string(), "2024-06-03");

    let html = body_string(get(&app, "/?month=2024-06&notice=added").await).await;
    assert!(html.contains("Added to your calendar!"));
    assert!(html.contains("<strong>Blog Post:</strong> Launch Post"));
    assert!(html.contains(&format!("/entries/{}/edit", entries[0].id)));
}

#[tokio::test]
async fn submit_with_empty_title_saves_nothing() {
    let (app, store, _) = build_test_app();

    let response = post_form(
        &app,
        "/entries",
        "title=&content_type=Blog&start_date=2024-06-01&num_days=1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("value=\"Blog\""));
    assert!(store.is_empty());
}

#[tokio::test]
async fn malformed_date_is_bad_request() {
    let (app, store, _) = build_test_app();

    let response = post_form(
        &app,
        "/entries",
        "title=a&content_type=b&start_date=June+1&num_days=1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("June 1"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn date_at_end_of_calendar_is_bad_request() {
    let (app, store, _) = build_test_app();

    let response = post_form(
        &app,
        "/entries",
        "title=a&content_type=b&start_date=%2B262142-12-31&num_days=1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty());
    assert_eq!(get(&app, "/").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn edit_then_save_updates_in_place() {
    let (app, store, owner) = build_test_app();
    post_form(&app, "/entries", LAUNCH_POST).await;
    let id = store.find_by_owner(&owner).unwrap()[0].id;

    let response = post_form(&app, &format!("/entries/{id}/edit"), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("Edit Content"));
    assert!(html.contains("value=\"Launch Post\""));
    assert!(html.contains("value=\"2024-06-01\""));
    assert!(html.contains("value=\"3\""));

    let response = post_form(
        &app,
        "/entries",
        "title=Launch+Post&content_type=Blog+Post&start_date=2024-06-01&num_days=1",
    )
    .await;
    assert_eq!(location(&response), "/?notice=updated");

    let entries = store.find_by_owner(&owner).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].fields.end_date, entries[0].fields.start_date);

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("Add New Content"));
}

#[tokio::test]
async fn cancel_edit_returns_to_add_mode() {
    let (app, store, owner) = build_test_app();
    post_form(&app, "/entries", LAUNCH_POST).await;
    let id = store.find_by_owner(&owner).unwrap()[0].id;

    post_form(&app, &format!("/entries/{id}/edit"), "").await;
    post_form(&app, "/entries/cancel-edit", "").await;

    let html = body_string(get(&app, "/").await).await;
    assert!(html.contains("Add New Content"));
}

#[tokio::test]
async fn delete_removes_entry() {
    let (app, store, owner) = build_test_app();
    post_form(&app, "/entries", LAUNCH_POST).await;
    post_form(
        &app,
        "/entries",
        "title=Teaser&content_type=YouTube+Video&start_date=2024-05-20&num_days=1",
    )
    .await;
    let id = store.find_by_owner(&owner).unwrap()[0].id;

    let response = post_form(&app, &format!("/entries/{id}/delete"), "").await;
    assert_eq!(location(&response), "/?notice=deleted");

    let remaining = store.find_by_owner(&owner).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0].id, id);

    let response = post_form(&app, &format!("/entries/{id}/delete"), "").await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn export_csv_lists_sorted_entries() {
    let (app, _, owner) = build_test_app();
    post_form(&app, "/entries", LAUNCH_POST).await;
    post_form(
        &app,
        "/entries",
        "title=Teaser&content_type=YouTube+Video&start_date=2024-05-20&num_days=1",
    )
    .await;

    let response = get(&app, "/export.csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[CONTENT_DISPOSITION],
        "attachment; filename=\"calendar.csv\""
    );

    let csv = body_string(response).await;
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "owner_id,title,type,start_date,end_date,num_days");
    assert_eq!(
        lines[1],
        format!("{owner},Teaser,YouTube Video,2024-05-20,2024-05-20,1")
    );
    assert_eq!(
        lines[2],
        format!("{owner},Launch Post,Blog Post,2024-06-01,2024-06-03,3")
    );
}

#[tokio::test]
async fn events_api_uses_exclusive_end() {
    let (app, _, _) = build_test_app();
    post_form(&app, "/entries", LAUNCH_POST).await;

    let json = body_json(get(&app, "/api/events").await).await;
    let event = &json["events"][0];
    assert_eq!(event["title"], "Blog Post: Launch Post");
    assert_eq!(event["start"], "2024-06-01");
    assert_eq!(event["end"], "2024-06-04");
    assert_eq!(json["options"]["initialView"], "dayGridMonth");
    assert_eq!(json["options"]["editable"], false);
}

#[tokio::test]
async fn entries_api_returns_stored_fields() {
    let (app, _, owner) = build_test_app();
    post_form(&app, "/entries", LAUNCH_POST).await;

    let json = body_json(get(&app, "/api/entries").await).await;
    let entry = &json[0];
    assert_eq!(entry["owner_id"], owner);
    assert_eq!(entry["type"], "Blog Post");
    assert_eq!(entry["end_date"], "2024-06-03");
    assert_eq!(entry["num_days"], 3);
}

#[tokio::test]
async fn invalid_month_is_bad_request() {
    let (app, _, _) = build_test_app();
    let response = get(&app, "/?month=2024-13").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
