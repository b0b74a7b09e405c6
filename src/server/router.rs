use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{address, book, cart, product, user},
    state::{AppState, BookstoreState},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Shopfront API"),
    paths(
        user::signup,
        user::login,
        user::logout,
        product::add_product,
        product::product_view,
        product::search,
        product::filter_price,
        product::add_comment,
        cart::add_to_cart,
        cart::remove_item,
        cart::list_cart,
        cart::cart_checkout,
        cart::instant_buy,
        cart::get_orders,
        address::add_address,
        address::edit_home_address,
        address::edit_work_address,
        address::delete_addresses,
    ),
    tags(
        (name = "user", description = "Signup and session login"),
        (name = "product", description = "Catalogue and comments"),
        (name = "cart", description = "Cart, checkout and order history"),
        (name = "address", description = "Home and work addresses"),
    )
)]
pub struct ShopApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookstore API"),
    paths(
        book::list_books,
        book::get_book,
        book::create_book,
        book::update_book,
        book::delete_book,
    ),
    tags((name = "book", description = "Book catalogue"))
)]
pub struct BookstoreApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(user::signup))
        .route("/users/login", post(user::login))
        .route("/users/logout", post(user::logout))
        .route("/admin/addproduct", post(product::add_product))
        .route("/users/productview", get(product::product_view))
        .route("/users/search", get(product::search))
        .route("/users/filterprice", get(product::filter_price))
        .route("/users/addcomment", post(product::add_comment))
        .route("/addtocart", post(cart::add_to_cart))
        .route("/removeitem", post(cart::remove_item))
        .route("/listcart", get(cart::list_cart))
        .route("/cartcheckout", post(cart::cart_checkout))
        .route("/instantbuy", post(cart::instant_buy))
        .route("/users/orders", get(cart::get_orders))
        .route("/addaddress", post(address::add_address))
        .route("/edithomeaddress", put(address::edit_home_address))
        .route("/editworkaddress", put(address::edit_work_address))
        .route("/deleteaddresses", delete(address::delete_addresses))
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ShopApiDoc::openapi()) }),
        )
}

pub fn bookstore_router() -> Router<BookstoreState> {
    Router::new()
        .route("/books", get(book::list_books).post(book::create_book))
        .route(
            "/books/{id}",
            get(book::get_book)
                .patch(book::update_book)
                .delete(book::delete_book),
        )
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(BookstoreApiDoc::openapi()) }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use test_utils::{
        builder::TestBuilder,
        factory::{self, product::ProductFactory},
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::server::startup;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn authed_request(method: &str, uri: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("cookie", cookie)
            .body(Body::empty())
            .unwrap()
    }

    async fn shop_app(db: &sea_orm::DatabaseConnection) -> Router {
        let session = startup::connect_to_session(db).await.unwrap();
        router()
            .with_state(AppState::new(db.clone(), Duration::from_secs(5)))
            .layer(session)
    }

    /// Signs up and logs in a user, returning its id and the session cookie.
    async fn signup_and_login(app: &Router) -> (String, String) {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users/signup",
                json!({
                    "first_name": "Jane",
                    "last_name": "Doe",
                    "email": "jane@example.com",
                    "phone": "555-0100",
                    "password": "secret123"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let user_id = body_json(response).await["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users/login",
                json!({"email": "jane@example.com", "password": "secret123"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get("set-cookie")
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        (user_id, cookie)
    }

    /// Tests the bookstore create, read and delete flow over HTTP.
    ///
    /// Expected: 201 with a data envelope, {"data": true} on delete, then 404 "Record not found!"
    #[tokio::test]
    async fn serves_book_lifecycle() {
        let test = TestBuilder::new().with_book_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = bookstore_router().with_state(BookstoreState::new(db.clone()));

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/books",
                json!({"title": "Dune", "author": "Frank Herbert", "cost": 12}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["data"]["title"], "Dune");
        let id = created["data"]["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/books/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"data": true}));

        let response = app
            .oneshot(empty_request("GET", &format!("/books/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Record not found!"})
        );
    }

    /// Tests that an unknown sort value is refused.
    ///
    /// Expected: 400 with an error body
    #[tokio::test]
    async fn rejects_unknown_book_sort() {
        let test = TestBuilder::new().with_book_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = bookstore_router().with_state(BookstoreState::new(db.clone()));

        let response = app
            .oneshot(empty_request("GET", "/books?sort=sideways"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    /// Tests that checkout requires a logged-in session.
    ///
    /// Expected: 401 "Not logged in"
    #[tokio::test]
    async fn checkout_requires_login() {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = shop_app(db).await;

        let response = app
            .oneshot(empty_request("POST", "/cartcheckout?id=not-a-user"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({"error": "Not logged in"}));
    }

    /// Tests signup, login and a cart listing using the session cookie.
    ///
    /// Expected: 201 on signup, 200 with a cookie on login, 200 with an empty cart
    #[tokio::test]
    async fn logged_in_user_lists_cart() {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = shop_app(db).await;
        let (user_id, cookie) = signup_and_login(&app).await;

        let response = app
            .oneshot(authed_request(
                "GET",
                &format!("/listcart?id={}", user_id),
                &cookie,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"total": 0, "items": []}));
    }

    /// Tests a cart checkout over HTTP.
    ///
    /// Expected: 200 with a cash-on-delivery order holding the cart items in order, then an
    /// empty cart and a one-order history
    #[tokio::test]
    async fn checks_out_cart_over_http() {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = shop_app(db).await;
        let (user_id, cookie) = signup_and_login(&app).await;
        let owner = Uuid::parse_str(&user_id).unwrap();

        let lamp = ProductFactory::new(db).name("Lamp").price(30).build().await.unwrap();
        let chair = ProductFactory::new(db).name("Chair").price(45).build().await.unwrap();
        for product in [&lamp, &chair, &lamp] {
            factory::create_cart_item(db, owner, product).await.unwrap();
        }

        let response = app
            .clone()
            .oneshot(authed_request(
                "POST",
                &format!("/cartcheckout?id={}", user_id),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let order = body_json(response).await;
        assert_eq!(order["price"], 105);
        assert_eq!(order["payment"], json!({"digital": false, "cod": true}));
        let names: Vec<&str> = order["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["product_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Lamp", "Chair", "Lamp"]);

        let response = app
            .clone()
            .oneshot(authed_request(
                "GET",
                &format!("/listcart?id={}", user_id),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({"total": 0, "items": []}));

        let response = app
            .oneshot(authed_request(
                "GET",
                &format!("/users/orders?id={}", user_id),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let orders = body_json(response).await;
        assert_eq!(orders.as_array().unwrap().len(), 1);
        assert_eq!(orders[0]["id"], order["id"]);
    }

    /// Tests an instant buy over HTTP.
    ///
    /// Expected: 200 with a one-item order at the product price; unknown product is 404
    #[tokio::test]
    async fn instant_buys_over_http() {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = shop_app(db).await;
        let (user_id, cookie) = signup_and_login(&app).await;

        let mug = ProductFactory::new(db).name("Mug").price(12).build().await.unwrap();

        let response = app
            .clone()
            .oneshot(authed_request(
                "POST",
                &format!("/instantbuy?userid={}&pid={}", user_id, mug.id),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let order = body_json(response).await;
        assert_eq!(order["price"], 12);
        assert_eq!(order["payment"]["cod"], true);
        assert_eq!(order["items"].as_array().unwrap().len(), 1);
        assert_eq!(order["items"][0]["product_id"], mug.id.to_string());

        let response = app
            .oneshot(authed_request(
                "POST",
                &format!("/instantbuy?userid={}&pid={}", user_id, Uuid::new_v4()),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Product not found"}));
    }

    /// Tests the search parameter check.
    ///
    /// Expected: 400 "Invalid search index" when name is missing
    #[tokio::test]
    async fn search_requires_name() {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = shop_app(db).await;

        let response = app
            .oneshot(empty_request("GET", "/users/search"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Invalid search index"})
        );
    }

    /// Tests that the OpenAPI document lists the checkout route.
    ///
    /// Expected: 200 with `/cartcheckout` under paths
    #[tokio::test]
    async fn serves_openapi_document() {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = shop_app(db).await;

        let response = app
            .oneshot(empty_request("GET", "/api/docs/openapi.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["paths"]["/cartcheckout"].is_object());
    }
}
