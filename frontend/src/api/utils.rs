use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::Storage;
use shared::ErrorResponse;

/// Creates a request with the Authorization header from localStorage
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "PATCH" => Request::patch(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    };

    if let Ok(session_id) = gloo_storage::LocalStorage::get::<String>("session_id") {
        req = req.header("Authorization", &format!("Bearer {}", session_id));
    }

    req
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

pub fn authenticated_patch(url: &str) -> RequestBuilder {
    authenticated_request("PATCH", url)
}

/// Pulls the server's message out of a failed response
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => format!("Request failed with status {}", status),
    }
}
