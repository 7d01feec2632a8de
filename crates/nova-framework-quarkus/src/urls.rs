//! URLs of a locally running Quarkus application.
//!
//! Nothing here performs network I/O; the URLs are handed to "open in browser"
//! style actions.

use crate::host::PropertyLookup;

pub const HTTP_PORT: &str = "quarkus.http.port";
pub const DEV_HTTP_PORT: &str = "%dev.quarkus.http.port";
pub const HTTP_ROOT_PATH: &str = "quarkus.http.root-path";
pub const HTTP_NON_APPLICATION_ROOT_PATH: &str = "quarkus.http.non-application-root-path";

pub const DEFAULT_HTTP_PORT: i32 = 8080;
pub const DEFAULT_ROOT_PATH: &str = "/";
pub const DEFAULT_NON_APPLICATION_ROOT_PATH: &str = "q";

/// The dev-mode HTTP port: `%dev.quarkus.http.port`, then `quarkus.http.port`, then 8080.
pub fn http_port<P>(props: &P) -> i32
where
    P: PropertyLookup + ?Sized,
{
    let port = props.property_as_int(HTTP_PORT, DEFAULT_HTTP_PORT);
    props.property_as_int(DEV_HTTP_PORT, port)
}

/// `http://localhost:<port><root-path>/`
pub fn application_url<P>(props: &P) -> String
where
    P: PropertyLookup + ?Sized,
{
    let port = http_port(props);
    let path = props.property(HTTP_ROOT_PATH, DEFAULT_ROOT_PATH);
    format!("http://localhost:{port}{}", normalize_path(&path))
}

/// `http://localhost:<port><non-application-root-path>/dev`
///
/// A relative non-application root path is resolved against the root path.
pub fn dev_ui_url<P>(props: &P) -> String
where
    P: PropertyLookup + ?Sized,
{
    let port = http_port(props);
    let mut path = props.property(
        HTTP_NON_APPLICATION_ROOT_PATH,
        DEFAULT_NON_APPLICATION_ROOT_PATH,
    );
    if !path.starts_with('/') {
        let root_path = props.property(HTTP_ROOT_PATH, DEFAULT_ROOT_PATH);
        path = normalize_path(&root_path) + &path;
    }
    format!("http://localhost:{port}{}dev", normalize_path(&path))
}

/// Ensures a leading and a trailing `/`. No other rewriting happens.
fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(path);
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}
