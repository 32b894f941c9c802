//! Media pool path logic
//!
//! Resolve's media pool is a folder tree addressed here by slash paths
//! relative to the root folder. The API itself only hands out opaque
//! folder and clip objects, so everything path-shaped lives on this
//! side: descending a path (creating missing folders on demand) and
//! recovering the path a timeline clip lives at by walking the tree.

use log::debug;

use crate::error::{AppError, HostError};

/// A clip entry inside a media pool folder.
#[derive(Debug, Clone)]
pub(crate) struct ClipInfo<C> {
    pub(crate) name: String,
    /// Resolve clip type property, e.g. "Timeline" or "Video".
    pub(crate) kind: String,
    pub(crate) handle: C,
}

/// Folder-tree view of the media pool. Implemented by the scripting
/// bridge and by an in-memory tree in tests.
pub(crate) trait MediaPool {
    type Folder: Clone;
    type Clip;

    fn root(&mut self) -> Result<Self::Folder, HostError>;

    /// Immediate subfolders of `folder` as (name, handle) pairs.
    fn subfolders(&mut self, folder: &Self::Folder) -> Result<Vec<(String, Self::Folder)>, HostError>;

    /// Create a subfolder. `Ok(None)` means the host refused the
    /// creation without raising an API error.
    fn add_subfolder(
        &mut self,
        parent: &Self::Folder,
        name: &str,
    ) -> Result<Option<Self::Folder>, HostError>;

    fn clips(&mut self, folder: &Self::Folder) -> Result<Vec<ClipInfo<Self::Clip>>, HostError>;
}

/// Split a media pool path into folder-name segments. Backslashes are
/// treated as separators and empty segments are dropped.
pub(crate) fn split_path(path: &str) -> Vec<String> {
    path.replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Descend the media pool folder tree along `path`, returning the
/// deepest folder reached.
///
/// With `create` set, missing segments are created in order and
/// descended into as created. Without it, the first missing segment
/// fails the lookup.
pub(crate) fn resolve_folder_path<P: MediaPool>(
    pool: &mut P,
    path: &str,
    create: bool,
) -> Result<P::Folder, AppError> {
    let segments = split_path(path);
    let mut current = pool.root()?;

    for (i, seg) in segments.iter().enumerate() {
        let children = pool.subfolders(&current)?;
        if let Some((name, child)) = children.into_iter().find(|(name, _)| name == seg) {
            debug!("found subfolder \"{name}\"");
            current = child;
            continue;
        }

        if !create {
            return Err(AppError::PathNotFound {
                path: path.to_string(),
                missing: seg.clone(),
            });
        }

        // Create the rest of the path under the deepest existing folder.
        for seg in &segments[i..] {
            debug!("creating subfolder \"{seg}\"");
            match pool.add_subfolder(&current, seg)? {
                Some(folder) => current = folder,
                None => {
                    return Err(AppError::FolderCreate {
                        path: path.to_string(),
                        name: seg.clone(),
                    });
                }
            }
        }
        return Ok(current);
    }

    debug!("found all folders, nothing created");
    Ok(current)
}

/// Locate the named timeline clip in the media pool and return it
/// together with the slash path of the folder containing it. The root
/// folder maps to `/`.
///
/// The API has no way to ask an object for its media pool location, so
/// this walks the whole tree depth-first.
pub(crate) fn find_timeline_clip<P: MediaPool>(
    pool: &mut P,
    name: &str,
) -> Result<Option<(P::Clip, String)>, HostError> {
    debug!("walking media pool for timeline \"{name}\"");
    let root = pool.root()?;
    let mut trail: Vec<String> = Vec::new();
    walk(pool, &root, name, &mut trail)
}

fn walk<P: MediaPool>(
    pool: &mut P,
    folder: &P::Folder,
    name: &str,
    trail: &mut Vec<String>,
) -> Result<Option<(P::Clip, String)>, HostError> {
    for clip in pool.clips(folder)? {
        if clip.kind == "Timeline" && clip.name == name {
            let path = format!("/{}", trail.join("/"));
            debug!("found timeline \"{name}\" at \"{path}\"");
            return Ok(Some((clip.handle, path)));
        }
    }

    for (sub_name, sub) in pool.subfolders(folder)? {
        trail.push(sub_name);
        if let Some(found) = walk(pool, &sub, name, trail)? {
            return Ok(Some(found));
        }
        trail.pop();
    }

    Ok(None)
}
