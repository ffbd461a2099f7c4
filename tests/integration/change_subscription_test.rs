// Subscription change flow through the HTTP layer

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test};
use helpers::*;
use payee::processors::{ItemKind, ProcessorKind};
use serde_json::Value;

#[actix_web::test]
async fn test_paypal_subscription_change() {
    let tx = TestDataFactory::transaction(
        1,
        ProcessorKind::PayPal,
        ItemKind::Subscription,
        date(2026, 3, 15),
    );
    let (_, service) = create_test_service(vec![tx]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/subscriptions/change")
        .set_form([("payee_purchaseid", "1"), ("csrf_token", "tok")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("name='modify' value='2'"));
    assert!(body.contains("name='cmd' value='_xclick-subscriptions'"));
    assert!(!body.contains("payee_purchaseid"));
    assert!(!body.contains("csrf_token"));
}

#[actix_web::test]
async fn test_unsupported_processor_is_not_implemented() {
    let tx = TestDataFactory::transaction(
        2,
        ProcessorKind::DalPay,
        ItemKind::Subscription,
        date(2026, 3, 15),
    );
    let (_, service) = create_test_service(vec![tx]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/subscriptions/change")
        .set_form([("payee_purchaseid", "2")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
}

#[actix_web::test]
async fn test_missing_purchase_id() {
    let (_, service) = create_test_service(vec![]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/subscriptions/change")
        .set_form([("csrf_token", "tok")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("payee_purchaseid"));
}

#[actix_web::test]
async fn test_unknown_purchase_id() {
    let (_, service) = create_test_service(vec![]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/subscriptions/change")
        .set_form([("payee_purchaseid", "99")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_non_numeric_purchase_id() {
    let (_, service) = create_test_service(vec![]).await;
    let app = init_test_app!(service);

    let req = test::TestRequest::post()
        .uri("/subscriptions/change")
        .set_form([("payee_purchaseid", "abc")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
