use super::*;

#[test]
fn methods_map_one_to_one() {
    assert_eq!(to_reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(to_reqwest_method(Method::Post), reqwest::Method::POST);
    assert_eq!(to_reqwest_method(Method::Put), reqwest::Method::PUT);
    assert_eq!(to_reqwest_method(Method::Delete), reqwest::Method::DELETE);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let transport = ReqwestTransport::default();
    let config = ApiConfig::new("http://127.0.0.1:9", None);
    let result = transport.send(&config, &ApiRequest::get("/holidaze/venues")).await;
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
