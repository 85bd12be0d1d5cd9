//! Transport integration tests.
//!
//! Starts an axum stub of the catalog and exercises the client against it.

use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pokeapi_client::{
    AsciiOptions, PokeApiClient, PokeApiError, SpriteRequest, fetch_ascii_sprite,
};
use serde_json::{Value, json};

fn pikachu() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "is_default": true,
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "abilities": [
            {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false, "slot": 1}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}}
        ],
        "sprites": {"front_default": null},
        "cries": {"latest": "https://example.com/25.ogg"}
    })
}

fn pichu(base: &str) -> Value {
    json!({
        "id": 172,
        "name": "pichu",
        "sprites": {
            "front_default": format!("{base}/sprites/172.png"),
            "back_default": format!("{base}/sprites/missing.png")
        }
    })
}

fn white_png() -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])))
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

async fn pokemon_handler(
    State(base): State<String>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    match identifier.as_str() {
        "25" | "pikachu" => (StatusCode::OK, Json(pikachu())).into_response(),
        "172" | "pichu" => (StatusCode::OK, Json(pichu(&base))).into_response(),
        "0" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn list_handler(Query(params): Query<HashMap<String, u32>>) -> Json<Value> {
    let limit = params.get("limit").copied().unwrap_or(20);
    let offset = params.get("offset").copied().unwrap_or(0);
    let results: Vec<Value> = (offset + 1..=offset + limit)
        .map(|id| json!({"name": format!("pokemon-{id}"), "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/")}))
        .collect();

    Json(json!({
        "count": 1302,
        "next": format!("https://pokeapi.co/api/v2/pokemon?offset={}&limit={}", offset + limit, limit),
        "previous": null,
        "results": results
    }))
}

async fn sprite_handler(Path(file): Path<String>) -> impl IntoResponse {
    match file.as_str() {
        "172.png" => (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], white_png()).into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Bind to port 0 and return the actual address.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base = format!("http://{addr}");
    let app = Router::new()
        .route("/pokemon", get(list_handler))
        .route("/pokemon/{identifier}", get(pokemon_handler))
        .route("/sprites/{file}", get(sprite_handler))
        .with_state(base.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base
}

async fn client() -> PokeApiClient {
    let base = start_server().await;
    PokeApiClient::new(&base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn get_pokemon_by_name_and_id() {
    let client = client().await;

    for identifier in ["pikachu", "25"] {
        let pokemon = client.get_pokemon(identifier).await.unwrap();
        assert_eq!(pokemon.id, Some(25));
        assert_eq!(pokemon.name.as_deref(), Some("pikachu"));
        assert!(pokemon.is_default);
        assert_eq!(
            pokemon.types[0].r#type.as_ref().unwrap().name.as_deref(),
            Some("electric")
        );
        assert_eq!(pokemon.stats[0].base_stat, Some(35));
    }
}

#[tokio::test]
async fn get_resource_returns_raw_payload() {
    let client = client().await;
    let raw = client.get_resource("pokemon", "pikachu").await.unwrap();
    assert_eq!(raw["cries"]["latest"], "https://example.com/25.ogg");
}

#[tokio::test]
async fn missing_pokemon_is_not_found() {
    let client = client().await;
    let err = client.get_pokemon("not-a-pokemon").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found: Resource not found: pokemon/not-a-pokemon");
}

#[tokio::test]
async fn server_error_is_transport_failure() {
    let client = client().await;
    let err = client.get_pokemon("0").await.unwrap_err();
    assert!(matches!(err, PokeApiError::Transport(_)));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let client = client().await;
    let err = client.get_pokemon("garbled").await.unwrap_err();
    assert!(matches!(err, PokeApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_host_is_transport_failure() {
    // Nothing listens on the discard port
    let client = PokeApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = client.get_pokemon("25").await.unwrap_err();
    assert!(matches!(err, PokeApiError::Transport(_)));
}

#[tokio::test]
async fn list_pages_through_stub() {
    let client = client().await;

    let page = client.get_pokemon_list(5, 0).await.unwrap();
    assert_eq!(page.count, 1302);
    assert_eq!(page.results.len(), 5);
    assert_eq!(page.results[0].id, 1);
    assert_eq!(page.results[0].name, "pokemon-1");
    assert!(page.has_next());
    assert!(!page.has_previous());

    let page = client.get_resource_list("pokemon", 3, 20).await.unwrap();
    let ids: Vec<i32> = page.results.iter().map(|stub| stub.id).collect();
    assert_eq!(ids, vec![21, 22, 23]);
}

#[tokio::test]
async fn sprite_absent_yields_none() {
    let client = client().await;
    let pokemon = client.get_pokemon("pikachu").await.unwrap();
    let sprite = fetch_ascii_sprite(&client, &pokemon, &SpriteRequest::default())
        .await
        .unwrap();
    assert_eq!(sprite, None);
}

#[tokio::test]
async fn sprite_is_downloaded_and_rendered() {
    let client = client().await;
    let pokemon = client.get_pokemon("pichu").await.unwrap();
    let request = SpriteRequest {
        shiny: false,
        back: false,
        ascii: AsciiOptions {
            width: 4,
            colored: false,
        },
    };

    let sprite = fetch_ascii_sprite(&client, &pokemon, &request).await.unwrap();
    assert_eq!(sprite.as_deref(), Some("@@@@\n@@@@"));
}

#[tokio::test]
async fn missing_sprite_is_not_found() {
    let client = client().await;
    let pokemon = client.get_pokemon("pichu").await.unwrap();

    let url = pokemon.sprite_url(false, true).unwrap();
    let err = client.fetch_bytes(url).await.unwrap_err();
    assert!(err.is_not_found());

    let request = SpriteRequest {
        back: true,
        ..SpriteRequest::default()
    };
    let err = fetch_ascii_sprite(&client, &pokemon, &request).await.unwrap_err();
    assert!(matches!(err, PokeApiError::NotFound(_)));
}

#[tokio::test]
async fn fetch_bytes_returns_body() {
    let client = client().await;
    let url = format!("{}/sprites/172.png", client.base_url());
    let bytes = client.fetch_bytes(&url).await.unwrap();
    assert_eq!(bytes, white_png());
}
