use super::*;
use crate::acquire::Acquirer;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::collections::HashMap;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn points(acquirer: web::Data<Acquirer>) -> impl Responder {
    match acquirer
        .acquire()
        .await
        .inspect_err(|e| log::error!("failed to supply points: {}", e))
    {
        Ok(points) => HttpResponse::Ok().json(points),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

pub async fn maps(
    loader: web::Data<Loader>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    match loader.script(query.get("callback").map(String::as_str)) {
        Ok(script) => HttpResponse::Ok()
            .content_type("application/javascript")
            .body(script),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquire::Budget;
    use crate::acquire::Oracle;
    use crate::acquire::Verdict;
    use crate::geo::GeoPoint;
    use crate::geo::Region;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use std::sync::Arc;
    use std::time::Duration;

    struct Everywhere;
    #[async_trait::async_trait]
    impl Oracle for Everywhere {
        async fn inspect(&self, _: &GeoPoint) -> Verdict {
            Verdict::Viewable
        }
    }

    struct Nowhere;
    #[async_trait::async_trait]
    impl Oracle for Nowhere {
        async fn inspect(&self, _: &GeoPoint) -> Verdict {
            Verdict::Unavailable("ZERO_RESULTS".to_string())
        }
    }

    fn loader() -> web::Data<Loader> {
        web::Data::new(Loader::new("https://maps.googleapis.com", "KEY"))
    }

    #[actix_web::test]
    async fn points_returns_full_quota() {
        let acquirer = Acquirer::new(Arc::new(Everywhere), Region::cities());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(acquirer))
                .app_data(loader())
                .configure(routes),
        )
        .await;
        for uri in ["/api/points", "/api/streetview"] {
            let request = test::TestRequest::get().uri(uri).to_request();
            let points: Vec<GeoPoint> = test::call_and_read_body_json(&app, request).await;
            assert_eq!(points.len(), crate::POINTS_PER_GAME);
            assert!(points.iter().all(|p| p.name.is_some()));
        }
    }
    #[actix_web::test]
    async fn exhausted_budget_is_a_server_error() {
        let acquirer = Acquirer::new(Arc::new(Nowhere), Region::cities())
            .with_budget(Budget::new(5, Duration::from_secs(60)));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(acquirer))
                .app_data(loader())
                .configure(routes),
        )
        .await;
        let request = test::TestRequest::get().uri("/api/points").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .is_some_and(|e| e.starts_with("insufficient coverage"))
        );
    }
    #[actix_web::test]
    async fn maps_loader_validates_callback() {
        let acquirer = Acquirer::new(Arc::new(Everywhere), Region::cities());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(acquirer))
                .app_data(loader())
                .configure(routes),
        )
        .await;
        let ok = test::TestRequest::get()
            .uri("/api/maps?callback=initStreetView")
            .to_request();
        let response = test::call_service(&app, ok).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("callback=initStreetView"));
        let bad = test::TestRequest::get()
            .uri("/api/maps?callback=alert(1)")
            .to_request();
        assert_eq!(
            test::call_service(&app, bad).await.status(),
            StatusCode::BAD_REQUEST
        );
        let health = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, health).await.status(), StatusCode::OK);
    }
}
