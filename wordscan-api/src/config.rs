//! Walk configuration

use crate::dto::Direction;
use crate::error::{ApiError, Result};

/// Configuration for walking boundaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    direction: Direction,
    start: Option<usize>,
    limit: Option<usize>,
}

impl Config {
    /// Walk forward from the start of the text
    pub fn forward() -> Self {
        Self::default()
    }

    /// Walk backward from the end of the text
    pub fn backward() -> Self {
        Self {
            direction: Direction::Backward,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Walk direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Explicit start index, if any
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Maximum number of boundaries to report
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Start index for a text of `len` chars
    ///
    /// Defaults to the start of the text going forward and to the end of
    /// the text going backward.
    pub fn start_for(&self, len: usize) -> usize {
        match (self.start, self.direction) {
            (Some(start), _) => start,
            (None, Direction::Forward) => 0,
            (None, Direction::Backward) => len,
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the walk direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Walk backward
    pub fn backward(self) -> Self {
        self.direction(Direction::Backward)
    }

    /// Set the char index to start from
    pub fn start(mut self, start: usize) -> Self {
        self.config.start = Some(start);
        self
    }

    /// Cap the number of reported boundaries
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.config.limit = limit;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.limit == Some(0) {
            return Err(ApiError::Config("limit must be at least 1".to_string()));
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Config::forward().direction(), Direction::Forward);
        assert_eq!(Config::backward().direction(), Direction::Backward);
        assert_eq!(Config::forward().start_for(10), 0);
        assert_eq!(Config::backward().start_for(10), 10);
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .backward()
            .start(4)
            .limit(Some(2))
            .build()
            .unwrap();

        assert_eq!(config.direction(), Direction::Backward);
        assert_eq!(config.start(), Some(4));
        assert_eq!(config.start_for(10), 4);
        assert_eq!(config.limit(), Some(2));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = Config::builder().limit(Some(0)).build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
