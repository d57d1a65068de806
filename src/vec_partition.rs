//! Stock `Vec`-backed partition and its configuration.

use crate::envelope::Envelope;
use crate::error::ConfigError;
use crate::partition::Partition;
use crate::value::PointValue;

const DEFAULT_CAPACITY: usize = 64;

/// Sizing policy shared by every [`VecPartition`] a tree creates.
///
/// # Example
/// ```
/// use pointquad::PartitionConfig;
/// let config = PartitionConfig::default().with_capacity(8).with_reserve(2);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.capacity, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartitionConfig {
    /// Values a partition holds before it reports full
    pub capacity: usize,
    /// Slots kept free for regular inserts (split redistribution ignores it)
    pub reserve: usize,
    /// Upper bound for [`Partition::expand`]; equal to `capacity` disables growth
    pub max_capacity: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            reserve: 0,
            max_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl PartitionConfig {
    /// Sets the capacity and disables growth.
    ///
    /// Call [`PartitionConfig::with_max_capacity`] afterwards to allow
    /// [`Partition::expand`] to grow past it.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self.max_capacity = capacity;
        self
    }

    /// Sets the headroom kept free on regular inserts
    #[must_use]
    pub fn with_reserve(mut self, reserve: usize) -> Self {
        self.reserve = reserve;
        self
    }

    /// Sets the growth limit used by [`Partition::expand`]
    #[must_use]
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Checks the configuration is usable.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the first inconsistent field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.reserve >= self.capacity {
            return Err(ConfigError::ReserveTooLarge {
                reserve: self.reserve,
                capacity: self.capacity,
            });
        }
        if self.max_capacity < self.capacity {
            return Err(ConfigError::MaxBelowCapacity {
                max_capacity: self.max_capacity,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Partition constructor suitable for [`QuadTree::new`](crate::QuadTree::new)
    pub fn factory<V: PointValue>(
        self,
    ) -> impl Fn(&Envelope) -> VecPartition<V> + Send + Sync + 'static {
        move |_cell: &Envelope| VecPartition::new(self)
    }
}

/// Bounded partition storing values in insertion order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecPartition<V> {
    values: Vec<V>,
    capacity: usize,
    config: PartitionConfig,
}

impl<V: PointValue> VecPartition<V> {
    /// Creates an empty partition sized by `config`
    pub fn new(config: PartitionConfig) -> Self {
        Self {
            values: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
            config,
        }
    }

    /// Current capacity, which [`Partition::expand`] may have raised
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Configuration this partition was created with
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    // Reserve never pushes the limit below one, so an empty partition
    // only refuses when capacity itself is zero.
    fn limit(&self, reserve_for_speed: bool) -> usize {
        if reserve_for_speed {
            self.capacity.saturating_sub(self.config.reserve).max(1).min(self.capacity)
        } else {
            self.capacity
        }
    }
}

impl<V: PointValue> Partition for VecPartition<V> {
    type Value = V;

    fn size(&self) -> usize {
        self.values.len()
    }

    fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    fn add(&mut self, value: V, reserve_for_speed: bool) -> Result<(), V> {
        if self.values.len() >= self.limit(reserve_for_speed) {
            return Err(value);
        }
        self.values.push(value);
        Ok(())
    }

    fn expand(&mut self) -> bool {
        if self.capacity >= self.config.max_capacity {
            return false;
        }
        self.capacity = (self.capacity.max(1) * 2).min(self.config.max_capacity);
        self.values.reserve(self.capacity.saturating_sub(self.values.len()));
        true
    }

    fn into_values(self) -> impl Iterator<Item = V> {
        self.values.into_iter()
    }
}
