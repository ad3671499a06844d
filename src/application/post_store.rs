//! Post lookup use cases

use crate::domain::{IdFormat, PostRecord, PostSummary, RouteParam, TitleCollator};
use crate::error::{PostStoreError, Result};
use crate::infrastructure::{JsonFileRepository, PostRepository, StoreConfig};
use serde::de::Error as _;
use std::sync::{Arc, PoisonError, RwLock};

/// Read-only accessor over one post document.
///
/// With caching on, the document is parsed on first use and shared by every
/// later call until [`PostStore::reload`]. With caching off, each call
/// re-reads the source.
pub struct PostStore<R = JsonFileRepository> {
    repository: R,
    collator: TitleCollator,
    id_format: IdFormat,
    cache_enabled: bool,
    dump_parsed: bool,
    cache: RwLock<Option<Arc<[PostRecord]>>>,
}

impl PostStore<JsonFileRepository> {
    /// Open the JSON data file named by the config
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let repository = JsonFileRepository::new(config.source_path());
        Self::with_repository(repository, config)
    }
}

impl<R: PostRepository> PostStore<R> {
    /// Use any repository; the config's data location is ignored
    pub fn with_repository(repository: R, config: &StoreConfig) -> Result<Self> {
        let collator = TitleCollator::new(&config.collation_locale()?)?;

        Ok(PostStore {
            repository,
            collator,
            id_format: config.id_format,
            cache_enabled: config.cache,
            dump_parsed: config.dump_parsed,
            cache: RwLock::new(None),
        })
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// All posts as summaries, ordered by title.
    ///
    /// A title that is present but not a string (or null) cannot be
    /// collated and fails the listing as malformed data.
    pub fn list_all_sorted(&self) -> Result<Vec<PostSummary>> {
        let records = self.records()?;

        let mut ordered = Vec::with_capacity(records.len());
        for record in records.iter() {
            let title = record.sort_title().map_err(|value| {
                PostStoreError::malformed(
                    self.repository.location(),
                    serde_json::Error::custom(format!(
                        "post {} has a non-string title: {}",
                        record.id, value
                    )),
                )
            })?;
            ordered.push((title, record));
        }
        self.collator.sort_by_key(&mut ordered, |entry| entry.0);

        Ok(ordered
            .into_iter()
            .map(|(_, record)| PostSummary::from(record))
            .collect())
    }

    /// One route param per post, in document order
    pub fn list_all_ids(&self) -> Result<Vec<RouteParam>> {
        let records = self.records()?;

        if self.dump_parsed {
            tracing::info!(
                path = %self.repository.location().display(),
                records = ?records,
                "parsed post document"
            );
        }

        Ok(records.iter().map(RouteParam::from).collect())
    }

    /// The first post whose string id equals `id`, or the not-found placeholder
    pub fn get_by_id(&self, id: &str) -> Result<PostRecord> {
        let records = self.records()?;

        match records.iter().find(|record| record.has_key(id)) {
            Some(record) => Ok(self.id_format.apply(record.clone())),
            None => {
                tracing::debug!(id, "post not found, returning placeholder");
                Ok(PostRecord::placeholder(id))
            }
        }
    }

    /// Drop the cached document and read the source again.
    /// Returns the number of records now loaded.
    pub fn reload(&self) -> Result<usize> {
        let records: Arc<[PostRecord]> = self.repository.load()?.into();
        let count = records.len();

        if self.cache_enabled {
            *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(records);
        }

        Ok(count)
    }

    fn records(&self) -> Result<Arc<[PostRecord]>> {
        if !self.cache_enabled {
            return Ok(self.repository.load()?.into());
        }

        {
            let cached = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(records) = cached.as_ref() {
                return Ok(Arc::clone(records));
            }
        }

        let mut cached = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded while we waited for the write lock.
        if let Some(records) = cached.as_ref() {
            return Ok(Arc::clone(records));
        }

        let records: Arc<[PostRecord]> = self.repository.load()?.into();
        *cached = Some(Arc::clone(&records));
        Ok(records)
    }
}
