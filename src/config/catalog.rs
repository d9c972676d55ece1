use super::CityFiles;
use crate::models::City;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Immutable mapping from each supported city to its CSV file.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    paths: HashMap<City, PathBuf>,
}

impl CityCatalog {
    pub fn new(data_dir: impl AsRef<Path>, files: &CityFiles) -> Self {
        let paths = City::ALL
            .into_iter()
            .map(|city| (city, data_dir.as_ref().join(files.get(city))))
            .collect();

        Self { paths }
    }

    /// Catalog with the default file names inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir, &CityFiles::default())
    }

    pub fn path_for(&self, city: City) -> &Path {
        // every City is inserted in new()
        self.paths[&city].as_path()
    }

    pub fn entries(&self) -> impl Iterator<Item = (City, &Path)> {
        City::ALL
            .into_iter()
            .map(move |city| (city, self.path_for(city)))
    }
}
