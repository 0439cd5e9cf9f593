use super::{Api, Shared};
use crate::Config;

use rowscan_core::{resolve::NameMapper, CacheMode, MetadataCache, Resolver};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    config: Config,

    /// Replaces the snake case converter when set
    name_mapper: Option<NameMapper>,

    /// Used instead of a cache built from `config.cache_mode` when set
    cache: Option<Arc<dyn MetadataCache>>,
}

impl Builder {
    /// Replaces every configuration value at once.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn cache_mode(&mut self, mode: CacheMode) -> &mut Self {
        self.config.cache_mode = mode;
        self
    }

    pub fn allow_unknown_columns(&mut self, allow: bool) -> &mut Self {
        self.config.allow_unknown_columns = allow;
        self
    }

    pub fn column_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.config.column_separator = separator.into();
        self
    }

    pub fn strict_columns(&mut self, strict: bool) -> &mut Self {
        self.config.strict_columns = strict;
        self
    }

    /// Derives default column names with `mapper` instead of the snake case
    /// converter.
    pub fn name_mapper(
        &mut self,
        mapper: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.name_mapper = Some(Arc::new(mapper));
        self
    }

    /// Stores column maps in `cache`, ignoring the configured cache mode.
    ///
    /// Several `Api`s can share one cache this way. Maps are cached per
    /// column separator, strictness and name mapper, so `Api`s configured
    /// differently never see each other's maps.
    pub fn cache(&mut self, cache: Arc<dyn MetadataCache>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(&self) -> Api {
        let mut resolver = Resolver::new()
            .separator(self.config.column_separator.clone())
            .strict(self.config.strict_columns);

        if let Some(mapper) = &self.name_mapper {
            resolver = resolver.name_mapper(mapper.clone());
        }

        let cache = match &self.cache {
            Some(cache) => cache.clone(),
            None => self.config.cache_mode.build(),
        };

        log::debug!(
            "building api; cache_mode={:?}, custom_cache={}",
            self.config.cache_mode,
            self.cache.is_some()
        );

        Api {
            shared: Arc::new(Shared {
                config: self.config.clone(),
                resolver,
                cache,
            }),
        }
    }
}
