//! PokeAPI client against a mock HTTP server.

mod common;

use std::sync::Arc;

use common::{list_body, pokemon_body};
use mockito::{Matcher, Server, ServerGuard};
use pokedex::domain::models::ApiConfig;
use pokedex::{CatalogSession, DexError, FilterCriteria, PokeApiClient, RecordCache, RecordSource};

fn client_for(server: &ServerGuard) -> PokeApiClient {
    PokeApiClient::with_base_url(format!("{}/api/v2", server.url())).expect("client")
}

#[tokio::test]
async fn test_fetch_index_requests_limit_and_offset() {
    let mut server = Server::new_async().await;
    let base = format!("{}/api/v2", server.url());
    let mock = server
        .mock("GET", "/api/v2/pokemon")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "151".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(list_body(&base, &[(1, "bulbasaur"), (25, "pikachu")]))
        .create_async()
        .await;

    let entries = client_for(&server).fetch_index(151, 0).await.unwrap();

    mock.assert_async().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name, "pikachu");
    assert_eq!(entries[1].id(), 25);
}

#[tokio::test]
async fn test_fetch_by_id_maps_wire_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/pokemon/25")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(pokemon_body(25, "pikachu", &["electric"]))
        .create_async()
        .await;

    let record = client_for(&server).fetch_by_id(25).await.unwrap();

    mock.assert_async().await;
    assert_eq!(record.id, 25);
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.categories, vec!["electric"]);
    assert_eq!(record.height, 4);
    assert_eq!(record.weight, 60);
    assert_eq!(record.sprites.primary, "https://img.invalid/25.png");
    assert_eq!(record.sprites.artwork, "https://img.invalid/art/25.png");
    assert_eq!(record.stats[0].base_value, 35);
    // 300 is above the scale and gets clamped
    assert_eq!(record.stats[1].base_value, 255);
    assert_eq!(record.abilities, vec!["static"]);
    assert_eq!(record.moves.len(), 5);
    assert_eq!(record.display_moves().len(), 4);
}

#[tokio::test]
async fn test_fetch_by_name_lowercases() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/pokemon/pikachu")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(pokemon_body(25, "pikachu", &["electric"]))
        .create_async()
        .await;

    let record = client_for(&server).fetch_by_name("Pikachu").await.unwrap();

    mock.assert_async().await;
    assert_eq!(record.id, 25);
}

#[tokio::test]
async fn test_not_found_is_record_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/pokemon/9999")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let err = client_for(&server).fetch_by_id(9999).await.unwrap_err();
    assert!(err.is_record_unavailable(), "got {err:?}");
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/pokemon/1")
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server).fetch_by_id(1).await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn test_undecodable_body_is_transport_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/pokemon")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"results\": 42}")
        .create_async()
        .await;

    let err = client_for(&server).fetch_index(151, 0).await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn test_mismatched_id_is_invalid_record() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/pokemon/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(pokemon_body(8, "wartortle", &["water"]))
        .create_async()
        .await;

    let err = client_for(&server).fetch_by_id(7).await.unwrap_err();
    assert!(matches!(err, DexError::InvalidRecord(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api/v2".to_string(),
        request_timeout_secs: Some(2),
        ..ApiConfig::default()
    };
    let client = PokeApiClient::new(&config).unwrap();
    let err = client.fetch_index(151, 0).await.unwrap_err();
    assert!(
        matches!(err, DexError::TransportFailure(_) | DexError::Timeout(_)),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_session_over_http_drops_missing_record() {
    let mut server = Server::new_async().await;
    let base = format!("{}/api/v2", server.url());

    let _index = server
        .mock("GET", "/api/v2/pokemon")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(list_body(&base, &[(1, "bulbasaur"), (2, "ivysaur"), (4, "charmander")]))
        .create_async()
        .await;
    let _one = server
        .mock("GET", "/api/v2/pokemon/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(pokemon_body(1, "bulbasaur", &["grass", "poison"]))
        .create_async()
        .await;
    let _two = server
        .mock("GET", "/api/v2/pokemon/2")
        .with_status(404)
        .create_async()
        .await;
    let four = server
        .mock("GET", "/api/v2/pokemon/4")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(pokemon_body(4, "charmander", &["fire"]))
        .expect(1)
        .create_async()
        .await;

    let mut session = CatalogSession::new(Arc::new(client_for(&server)), Arc::new(RecordCache::new()));
    let catalog = session.initialize_catalog().await.unwrap();
    let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "charmander"]);
    assert_eq!(session.last_summary().unwrap().dropped, 1);

    let fire = session.set_filter(FilterCriteria::category("fire"));
    assert_eq!(fire.len(), 1);

    // Served from the cache: the detail endpoint is hit exactly once.
    assert_eq!(session.lookup(4).await.unwrap().name, "charmander");
    four.assert_async().await;
}
