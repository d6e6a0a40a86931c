//! Maps a parsed request onto a local file, a redirect, or a miss.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::config::ServerConfig;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// Resolves `req` against the root directory and the redirect map.
///
/// First match wins:
/// 1. too-long path → 404, unsupported method → 501
/// 2. legal path naming a regular file → 200 with the file opened
/// 3. path is a redirect key → 302, `Location` stored in `req.headers`
/// 4. anything else → 404
///
/// A file that exists but cannot be opened or sized is a server fault.
pub fn resolve(req: &mut Request, config: &ServerConfig) -> io::Result<Response> {
    if req.path_too_long {
        return Ok(Response::not_found());
    }
    if !req.method.is_supported() {
        return Ok(Response::new(StatusCode::NotImplemented));
    }

    let candidate = candidate_path(&config.root_dir, &req.path);

    if is_within_root(&config.root_dir, &candidate) && is_regular_file(&candidate) {
        let file = File::open(&candidate)?;
        return Response::file(file);
    }

    if let Some(url) = config.redirects.get(&req.path) {
        req.headers.location = Some(url.clone());
        return Ok(Response::new(StatusCode::Found));
    }

    Ok(Response::not_found())
}

/// Root and request path concatenated as text.
///
/// `Path::join` would discard the root because request paths are absolute.
pub fn candidate_path(root: &Path, request_path: &str) -> PathBuf {
    let mut joined = OsString::from(root.as_os_str());
    joined.push(request_path);
    PathBuf::from(joined)
}

/// Traversal guard: true when `candidate`, once normalized, stays under the
/// normalized `root`.
pub fn is_within_root(root: &Path, candidate: &Path) -> bool {
    let root = normalize(root);
    let candidate = normalize(candidate);

    match candidate.strip_prefix(&root) {
        Ok(relative) => !matches!(relative.components().next(), Some(Component::ParentDir)),
        Err(_) => false,
    }
}

/// Lexical normalization: drops `.`, folds `..` into its parent, and never
/// touches the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
