// Checkout flow through the HTTP layer

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test};
use helpers::*;
use payee::core::calendar;
use payee::processors::{ItemKind, ProcessorKind, TransactionRepository};
use serde_json::Value;

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_checkout_renders_redirect_form() {
    let tx = TestDataFactory::transaction(
        1,
        ProcessorKind::DalPay,
        ItemKind::Purchase,
        date(2026, 3, 15),
    );
    let (_, service) = create_test_service(vec![tx]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/checkout/1")
        .set_form([("csrf_token", "tok-123"), ("email", "buyer@example.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_text(resp).await;
    assert!(body.contains(&format!("action='{}'", DALPAY_TEST_URL)));
    assert!(body.contains("name='email' value='buyer@example.com'"));
    assert!(body.contains("name='item1_price' value='19.99'"));
    assert!(body.contains("name='user1' value='1'"));
    assert!(!body.contains("csrf_token"));
    assert!(!body.contains("payee_action"));
}

#[actix_web::test]
async fn test_checkout_without_csrf_token() {
    let tx = TestDataFactory::transaction(
        2,
        ProcessorKind::PayPal,
        ItemKind::Purchase,
        date(2026, 3, 15),
    );
    let (_, service) = create_test_service(vec![tx]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/checkout/2")
        .set_form([("email", "buyer@example.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("action='https://www.sandbox.paypal.com/cgi-bin/webscr'"));
    assert!(body.contains("name='cmd' value='_xclick'"));
}

#[actix_web::test]
async fn test_checkout_unknown_transaction() {
    let (_, service) = create_test_service(vec![]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/checkout/404")
        .set_form([("email", "buyer@example.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_checkout_restarts_lapsed_subscription() {
    let tx = TestDataFactory::transaction(
        3,
        ProcessorKind::DalPay,
        ItemKind::Subscription,
        date(2020, 1, 1),
    );
    let (repository, service) = create_test_service(vec![tx]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/checkout/3")
        .set_form([("csrf_token", "tok")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = repository.find_by_id(3).await.unwrap().unwrap();
    assert_eq!(stored.item.due_payment_date, calendar::today());
}

#[actix_web::test]
async fn test_checkout_escapes_submitted_values() {
    let tx = TestDataFactory::transaction(
        4,
        ProcessorKind::DalPay,
        ItemKind::Purchase,
        date(2026, 3, 15),
    );
    let (_, service) = create_test_service(vec![tx]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/checkout/4")
        .set_form([("note", "x'/><script>alert(1)</script>")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("value='x&#x27;/&gt;&lt;script&gt;alert(1)&lt;/script&gt;'"));
}

#[actix_web::test]
async fn test_list_processors() {
    let (_, service) = create_test_service(vec![]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::get().uri("/processors").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["avangate", "paypal", "braintree", "dalpay", "recurly"]
    );
}

#[actix_web::test]
async fn test_proration_endpoint() {
    let tx = TestDataFactory::transaction(
        5,
        ProcessorKind::PayPal,
        ItemKind::Subscription,
        date(2026, 3, 15),
    );
    let (_, service) = create_test_service(vec![tx]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::get()
        .uri("/transactions/5/proration?on=2026-03-12")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["transaction_id"], 5);
    assert_eq!(body["remaining_days"], 3);
    assert_eq!(body["subscription_allowed_date"], "2026-03-14");
    assert_eq!(body["ready_for_subscription"], false);
}

#[actix_web::test]
async fn test_health_reports_processors() {
    let (_, service) = create_test_service(vec![]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}
