// Test helpers shared by the unit and integration test crates.
//
// Usage:
//   #[macro_use]
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code, unused_macros)]

pub mod test_data;

pub use test_app::*;
pub use test_data::*;
pub use test_database::*;

/// Initialise the application the way the binary wires it, around `$service`
macro_rules! init_test_app {
    ($service:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(payee::middleware::ErrorHandler)
                .wrap(payee::middleware::RequestId)
                .app_data(actix_web::web::Data::new($service.clone()))
                .configure(payee::modules::health::configure)
                .configure(payee::modules::processors::configure),
        )
        .await
    };
}
