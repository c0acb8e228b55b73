use actix_cors::Cors;
use actix_web::http::Method;

/// CORS policy for the browser front-end: the given origins only, the
/// methods the API uses, any request header, and cookies allowed.
///
/// There is no authentication layer; every route is reachable anonymously.
pub fn dev_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_any_header()
        .supports_credentials()
}
