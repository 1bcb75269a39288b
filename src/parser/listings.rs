//! Loaders for listing exports and venue asset files.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use crate::error::LoadError;
use crate::model::{BoothNames, Listing, StampRally};

/// Listing exports come either as a bare array or as one page of the
/// listings query (`{ "data": [...] }`).
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingsFile {
    Bare(Vec<Listing>),
    Page { data: Vec<Listing> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RalliesFile {
    Bare(Vec<StampRally>),
    Wrapped {
        #[serde(rename = "stampRallies")]
        stamp_rallies: Vec<StampRally>,
    },
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the listing export.
///
/// # Example
///
/// ```no_run
/// use booth_map::parser::load_listings;
///
/// let listings = load_listings("events.json")?;
/// println!("{} listings", listings.len());
/// # Ok::<(), booth_map::error::LoadError>(())
/// ```
pub fn load_listings<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>, LoadError> {
    let listings = match read_json(path.as_ref())? {
        ListingsFile::Bare(listings) | ListingsFile::Page { data: listings } => listings,
    };
    tracing::debug!(path = %path.as_ref().display(), count = listings.len(), "loaded listings");
    Ok(listings)
}

/// Reads the `code → name` booth map.
pub fn load_booth_names<P: AsRef<Path>>(path: P) -> Result<BoothNames, LoadError> {
    read_json(path.as_ref())
}

/// Reads stamp rallies from `{ "stampRallies": [...] }` or a bare array.
pub fn load_stamp_rallies<P: AsRef<Path>>(path: P) -> Result<Vec<StampRally>, LoadError> {
    Ok(match read_json(path.as_ref())? {
        RalliesFile::Bare(rallies) | RalliesFile::Wrapped { stamp_rallies: rallies } => rallies,
    })
}

/// Reads a draw.io floor map as text. Parsing happens when positions are
/// requested.
pub fn load_floor_map<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    read_file(path.as_ref())
}
