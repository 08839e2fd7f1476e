mod common;

use catalog_console::service::{CategoryService, ProductService, UserService};
use common::{
    MockTransport, api_client, app_state, category_json, envelope, login_json, page,
    product_json, user_json,
};
use serde_json::json;
use shared::{
    abstract_trait::{CategoryServiceTrait, HttpMethod, ProductServiceTrait, UserServiceTrait},
    domain::requests::{
        CategoryFilters, ChangePasswordRequest, CreateCategoryRequest, CreateUserRequest,
        LoginRequest, PaginationParams, ProductFilters, SortOrder,
    },
    errors::ClientError,
};

#[tokio::test]
async fn list_request_omits_unset_filters() {
    let transport = MockTransport::new();
    transport.push_json(200, page(vec![category_json(1, "Bebidas")], 3));
    let service = CategoryService::new(api_client(&transport));

    let filters = CategoryFilters {
        name: Some("beb".to_string()),
        ..Default::default()
    };
    let result = service
        .find_all(&PaginationParams::new(2, 10), &filters)
        .await
        .unwrap();

    assert_eq!(result.total_pages, 3);
    assert_eq!(result.data[0].name, "Bebidas");

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.endpoint, "/categorias");
    assert_eq!(
        request.query,
        vec![
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "10".to_string()),
            ("nombre".to_string(), "beb".to_string()),
        ]
    );
    assert_eq!(request.query_value("activa"), None);
    assert_eq!(request.query_value("sort"), None);
    assert_eq!(request.query_value("order"), None);
}

#[tokio::test]
async fn sort_and_order_are_sent_when_set() {
    let transport = MockTransport::new();
    transport.push_json(200, page(vec![], 1));
    let service = ProductService::new(api_client(&transport));

    let pagination = PaginationParams::new(1, 10).with_sort("precio", Some(SortOrder::Desc));
    let filters = ProductFilters {
        category_id: Some(4),
        price_min: Some(1000.0),
        active: Some(false),
        ..Default::default()
    };
    service.find_all(&pagination, &filters).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.query_value("sort"), Some("precio"));
    assert_eq!(request.query_value("order"), Some("desc"));
    assert_eq!(request.query_value("categoria_id"), Some("4"));
    assert_eq!(request.query_value("precio_min"), Some("1000.0"));
    assert_eq!(request.query_value("activo"), Some("false"));
    assert_eq!(request.query_value("precio_max"), None);
}

#[tokio::test]
async fn non_success_status_becomes_status_error() {
    let transport = MockTransport::new();
    transport.push_json(404, json!({ "detail": "Categoría no encontrada" }));
    let service = CategoryService::new(api_client(&transport));

    let err = service.find_by_id(99).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Status {
            status: 404,
            message: "Categoría no encontrada".to_string()
        }
    );
    assert_eq!(transport.last_request().endpoint, "/categorias/99");
}

#[tokio::test]
async fn failed_envelope_becomes_api_error() {
    let transport = MockTransport::new();
    transport.push_json(
        200,
        json!({ "success": false, "message": "Nombre duplicado", "data": null, "status": 409 }),
    );
    let service = CategoryService::new(api_client(&transport));

    let req = CreateCategoryRequest {
        name: "Bebidas".to_string(),
        description: None,
        active: None,
    };
    let err = service.create(&req).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Api {
            status: 409,
            message: "Nombre duplicado".to_string()
        }
    );

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.body, Some(json!({ "nombre": "Bebidas" })));
}

#[tokio::test]
async fn garbage_body_becomes_decode_error() {
    let transport = MockTransport::new();
    transport.push_raw(200, "<html>oops</html>");
    let service = CategoryService::new(api_client(&transport));

    let err = service.find_active().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(transport.last_request().endpoint, "/categorias/activas");
}

#[tokio::test]
async fn network_failure_is_passed_through_once() {
    let transport = MockTransport::new();
    transport.push_error(ClientError::Transport("connection refused".to_string()));
    let service = UserService::new(api_client(&transport));

    let err = service.find_active().await.unwrap_err();

    assert_eq!(err, ClientError::Transport("connection refused".to_string()));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn product_extra_endpoints() {
    let transport = MockTransport::new();
    transport.push_json(200, envelope(json!([product_json(1, "Laptop", 3)])));
    transport.push_json(200, envelope(json!([])));
    let service = ProductService::new(api_client(&transport));

    let by_category = service.find_by_category(3).await.unwrap();
    assert_eq!(by_category.data.len(), 1);
    assert_eq!(by_category.data[0].category.as_ref().unwrap().name, "Tecnología");

    service.find_active().await.unwrap();

    assert_eq!(
        transport.methods_and_endpoints(),
        vec![
            (HttpMethod::Get, "/productos/categoria/3".to_string()),
            (HttpMethod::Get, "/productos/activos".to_string()),
        ]
    );
}

#[tokio::test]
async fn user_status_and_password_endpoints() {
    let transport = MockTransport::new();
    transport.push_json(200, envelope(user_json(5, "ana@example.com", false)));
    transport.push_json(200, envelope(json!(null)));
    let service = UserService::new(api_client(&transport));

    let toggled = service.toggle_status(5, false).await.unwrap();
    assert!(!toggled.data.active);

    let req = ChangePasswordRequest {
        current_password: "old".to_string(),
        new_password: "new".to_string(),
    };
    let changed = service.change_password(5, &req).await.unwrap();
    assert!(changed.success);
    assert_eq!(changed.data, None);

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Patch);
    assert_eq!(requests[0].endpoint, "/usuarios/5/toggle-status");
    assert_eq!(requests[0].body, Some(json!({ "activo": false })));

    assert_eq!(requests[1].method, HttpMethod::Post);
    assert_eq!(requests[1].endpoint, "/usuarios/5/change-password");
    assert_eq!(
        requests[1].body,
        Some(json!({ "current_password": "old", "new_password": "new" }))
    );
}

#[tokio::test]
async fn delete_accepts_empty_data() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({ "success": true, "message": "Eliminado", "data": null }));
    let service = ProductService::new(api_client(&transport));

    let response = service.delete(8).await.unwrap();

    assert_eq!(response.message, "Eliminado");
    assert_eq!(response.status, 200);
    assert_eq!(transport.last_request().method, HttpMethod::Delete);
    assert_eq!(transport.last_request().endpoint, "/productos/8");
}

#[tokio::test]
async fn delete_accepts_no_content_reply() {
    let transport = MockTransport::new();
    transport.push_raw(204, "");
    let service = ProductService::new(api_client(&transport));

    let response = service.delete(8).await.unwrap();

    assert!(response.success);
    assert_eq!(response.data, None);
    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn user_create_returns_created_user() {
    let transport = MockTransport::new();
    transport.push_json(201, envelope(user_json(9, "luis@example.com", true)));
    let service = UserService::new(api_client(&transport));

    let req = CreateUserRequest {
        email: "luis@example.com".to_string(),
        password: "secreto".to_string(),
        first_name: "Luis".to_string(),
        last_name: "Pérez".to_string(),
        active: None,
    };
    let created = service.create(&req).await.unwrap();

    assert_eq!(created.data.id, 9);
    assert_eq!(created.data.email, "luis@example.com");
    assert_eq!(transport.last_request().method, HttpMethod::Post);
    assert_eq!(transport.last_request().endpoint, "/usuarios");
}

#[tokio::test]
async fn session_token_is_attached_after_login() {
    let transport = MockTransport::new();
    transport.push_json(200, envelope(login_json("abc123")));
    transport.push_json(200, page(vec![], 1));
    let (state, _store) = app_state("remote", &transport);

    state
        .login(&LoginRequest::new("ana@example.com", "secret"))
        .await
        .unwrap();
    state
        .di_container
        .category_service
        .find_all(&PaginationParams::default(), &CategoryFilters::default())
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].endpoint, "/auth/login");
    assert_eq!(requests[0].bearer_token, None);
    assert_eq!(requests[1].bearer_token.as_deref(), Some("abc123"));
}
